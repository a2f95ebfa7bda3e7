//! Collaborators of the settings handler.
//!
//! The browser implementations live in `crate::dom`; tests provide their own.

use async_trait::async_trait;

use super::error::SubmitError;
use super::fields::FormInput;

/// The submit event that triggered a submission
pub trait SubmitEvent {
    /// Suppress the browser's own form submission
    fn prevent_default(&self);
}

/// The settings form
pub trait SettingsForm {
    /// All inputs of the form in document order
    fn inputs(&self) -> Vec<FormInput>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
        }
    }

    pub fn css_class(&self) -> String {
        format!("alert alert-{}", self.as_str())
    }
}

/// A transient message shown in the alert container
#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub id: u64,
    pub kind: AlertKind,
    pub message: String,
}

/// Element hosting the banners
pub trait AlertContainer {
    /// Remove everything currently in the container
    fn clear(&self);
    fn append(&self, banner: &Banner);
    /// Remove a banner; does nothing if it is no longer in the container
    fn remove(&self, banner_id: u64);
}

/// Outgoing JSON request
#[derive(Clone, Debug, PartialEq)]
pub struct JsonRequest<'a> {
    pub url: &'a str,
    pub content_type: &'a str,
    pub body: String,
}

#[async_trait(?Send)]
pub trait Transport {
    /// POST the request and return the response body.
    ///
    /// The body is returned whatever the HTTP status; only failures to reach
    /// the server or read the body are errors.
    async fn post(&self, request: JsonRequest<'_>) -> Result<String, SubmitError>;
}

/// Handle to a scheduled task.
///
/// Dropping the handle may cancel the task, depending on the scheduler;
/// keep it until the task has run.
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancel the task. Cancelling a task that already ran is a no-op.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;
}

pub trait PageReloader {
    fn reload(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_alert_css_class() {
        assert_eq!(AlertKind::Success.css_class(), "alert alert-success");
        assert_eq!(AlertKind::Danger.css_class(), "alert alert-danger");
    }

    #[test]
    fn test_task_handle_cancel_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let handle = TaskHandle::new(move || counter.set(counter.get() + 1));
        handle.cancel();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_task_handle_drop_does_not_cancel() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        drop(TaskHandle::new(move || counter.set(counter.get() + 1)));
        assert_eq!(calls.get(), 0);
    }
}
