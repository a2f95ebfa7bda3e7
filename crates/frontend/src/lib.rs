pub mod dom;
pub mod settings;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

use crate::settings::SettingsConfig;
use crate::shared::api_utils::api_base;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = SettingsConfig::default().with_api_base(&api_base());
    match dom::page::attach(config) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Settings page wiring failed: {}", e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}
