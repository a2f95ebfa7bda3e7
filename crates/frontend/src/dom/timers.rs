use gloo_timers::callback::Timeout;

use crate::settings::ports::{PageReloader, Scheduler, TaskHandle};

/// `setTimeout` based scheduler. Dropping the returned handle cancels the task.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let timeout = Timeout::new(delay_ms, task);
        TaskHandle::new(move || drop(timeout.cancel()))
    }
}

pub struct LocationReloader;

impl PageReloader for LocationReloader {
    fn reload(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().reload() {
            log::error!("Page reload failed: {:?}", e);
        }
    }
}
