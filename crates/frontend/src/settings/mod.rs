//! Settings form submission: payload construction, request and banner
//! feedback, independent of the browser.

pub mod config;
pub mod error;
pub mod fields;
pub mod handler;
pub mod ports;

pub use config::SettingsConfig;
pub use error::SubmitError;
pub use handler::{SettingsDeps, SettingsSubmissionHandler, SubmissionOutcome, SubmissionState};
