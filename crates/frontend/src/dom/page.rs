//! Wiring of the settings handler into the settings page.

use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, EventTarget, HtmlFormElement};

use super::alerts::DomAlertContainer;
use super::form::DomSettingsForm;
use super::timers::{LocationReloader, TimeoutScheduler};
use super::transport::FetchTransport;
use crate::settings::{SettingsConfig, SettingsDeps, SettingsSubmissionHandler};

const BACKUP_FILE_ATTR: &str = "data-backup-file";

#[derive(Debug, Error)]
pub enum WiringError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not a form")]
    NotAForm(String),
    #[error("selector query failed: {0}")]
    Query(String),
    #[error("failed to attach {0} listener: {1}")]
    Listener(&'static str, String),
}

/// Build the handler for the current page and attach it to the settings form,
/// the backup restore buttons and page teardown.
pub fn attach(config: SettingsConfig) -> Result<Rc<SettingsSubmissionHandler>, WiringError> {
    let window = web_sys::window().ok_or(WiringError::NoWindow)?;
    let document = window.document().ok_or(WiringError::NoDocument)?;

    let form = document
        .get_element_by_id(&config.form_id)
        .ok_or_else(|| WiringError::MissingElement(config.form_id.clone()))?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| WiringError::NotAForm(config.form_id.clone()))?;
    let container = document
        .get_element_by_id(&config.alert_container_id)
        .ok_or_else(|| WiringError::MissingElement(config.alert_container_id.clone()))?;

    let deps = SettingsDeps {
        form: Rc::new(DomSettingsForm::new(form.clone())),
        alerts: Rc::new(DomAlertContainer::new(document.clone(), container)),
        transport: Rc::new(FetchTransport),
        scheduler: Rc::new(TimeoutScheduler),
        reloader: Rc::new(LocationReloader),
    };
    let handler = Rc::new(SettingsSubmissionHandler::new(deps, config));

    let submit_handler = Rc::clone(&handler);
    listen(&form, "submit", move |event: Event| {
        // must happen during dispatch, before the handler future is polled
        event.prevent_default();
        let handler = Rc::clone(&submit_handler);
        spawn_local(async move {
            handler.on_submit(&event).await;
        });
    })?;

    let buttons = document
        .query_selector_all(&format!("[{}]", BACKUP_FILE_ATTR))
        .map_err(|e| WiringError::Query(format!("{:?}", e)))?;
    for button in (0..buttons.length())
        .filter_map(|i| buttons.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
    {
        let restore_handler = Rc::clone(&handler);
        let target = button.clone();
        listen(&button, "click", move |event: Event| {
            event.prevent_default();
            let backup_file = target.get_attribute(BACKUP_FILE_ATTR).unwrap_or_default();
            let handler = Rc::clone(&restore_handler);
            spawn_local(async move {
                handler.restore_backup(&backup_file).await;
            });
        })?;
    }

    let teardown_handler = Rc::clone(&handler);
    listen(&window, "pagehide", move |_event: Event| {
        teardown_handler.teardown();
    })?;

    log::info!(
        "Settings form attached ({} backup button(s))",
        buttons.length()
    );
    Ok(handler)
}

/// Attach a listener for the lifetime of the page
fn listen(
    target: &EventTarget,
    event_type: &'static str,
    callback: impl FnMut(Event) + 'static,
) -> Result<(), WiringError> {
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(|e| WiringError::Listener(event_type, format!("{:?}", e)))?;
    closure.forget();
    Ok(())
}
