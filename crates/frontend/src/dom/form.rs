use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement, HtmlInputElement};

use crate::settings::fields::{FormInput, InputKind};
use crate::settings::ports::{SettingsForm, SubmitEvent};

impl SubmitEvent for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

/// The `settings-form` element
pub struct DomSettingsForm {
    form: HtmlFormElement,
}

impl DomSettingsForm {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }
}

impl SettingsForm for DomSettingsForm {
    fn inputs(&self) -> Vec<FormInput> {
        let nodes = match self.form.query_selector_all("input") {
            Ok(nodes) => nodes,
            Err(e) => {
                log::error!("Failed to query form inputs: {:?}", e);
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .map(|input| FormInput {
                name: input.name(),
                kind: InputKind::from_type_attr(&input.type_()),
                value: input.value(),
                checked: input.checked(),
            })
            .collect()
    }
}
