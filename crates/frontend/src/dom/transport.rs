use async_trait::async_trait;
use gloo_net::http::Request;

use crate::settings::error::SubmitError;
use crate::settings::ports::{JsonRequest, Transport};

/// `fetch` transport
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post(&self, request: JsonRequest<'_>) -> Result<String, SubmitError> {
        let response = Request::post(request.url)
            .header("Content-Type", request.content_type)
            .body(request.body)
            .map_err(|e| SubmitError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        // error statuses still carry a { success, message } body
        if !response.ok() {
            log::debug!("{} answered {}", request.url, response.status());
        }

        response
            .text()
            .await
            .map_err(|e| SubmitError::Decode(e.to_string()))
    }
}
