use web_sys::{Document, Element};

use crate::settings::ports::{AlertContainer, Banner};

const BANNER_ID_ATTR: &str = "data-banner-id";

/// The `alert-container` element
pub struct DomAlertContainer {
    document: Document,
    container: Element,
}

impl DomAlertContainer {
    pub fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
        }
    }
}

impl AlertContainer for DomAlertContainer {
    fn clear(&self) {
        self.container.set_inner_html("");
    }

    fn append(&self, banner: &Banner) {
        let element = match self.document.create_element("div") {
            Ok(element) => element,
            Err(e) => {
                log::error!("Failed to create banner element: {:?}", e);
                return;
            }
        };
        element.set_class_name(&banner.kind.css_class());
        element.set_text_content(Some(&banner.message));
        let _ = element.set_attribute(BANNER_ID_ATTR, &banner.id.to_string());

        if let Err(e) = self.container.append_child(&element) {
            log::error!("Failed to insert banner: {:?}", e);
        }
    }

    fn remove(&self, banner_id: u64) {
        let selector = format!("[{}=\"{}\"]", BANNER_ID_ATTR, banner_id);
        if let Ok(Some(element)) = self.container.query_selector(&selector) {
            element.remove();
        }
    }
}
