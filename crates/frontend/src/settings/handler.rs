use std::cell::{Cell, RefCell};
use std::rc::Rc;

use contracts::shared::settings::{RestoreBackupRequest, SubmissionResult};
use serde::Serialize;

use super::config::{SettingsConfig, CONTENT_TYPE_JSON};
use super::error::SubmitError;
use super::fields::build_payload;
use super::ports::{
    AlertContainer, AlertKind, Banner, JsonRequest, PageReloader, Scheduler, SettingsForm,
    SubmitEvent, TaskHandle, Transport,
};

/// Collaborators injected into the handler
#[derive(Clone)]
pub struct SettingsDeps {
    pub form: Rc<dyn SettingsForm>,
    pub alerts: Rc<dyn AlertContainer>,
    pub transport: Rc<dyn Transport>,
    pub scheduler: Rc<dyn Scheduler>,
    pub reloader: Rc<dyn PageReloader>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    AwaitingResponse,
}

/// How a request ended
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    /// Server answered `success: true`; a reload is scheduled
    Accepted(String),
    /// Server answered `success: false`
    Rejected(String),
    /// Request or response decoding failed
    Failed(SubmitError),
}

struct PendingTask {
    handle: TaskHandle,
    done: Rc<Cell<bool>>,
}

/// Submits the settings form and reports the result through banners.
///
/// There is no guard against double submission; every call runs its own
/// request and the handler is idle only once all of them have finished.
pub struct SettingsSubmissionHandler {
    deps: SettingsDeps,
    config: SettingsConfig,
    in_flight: Cell<usize>,
    next_banner_id: Cell<u64>,
    pending: RefCell<Vec<PendingTask>>,
}

struct InFlight<'a>(&'a Cell<usize>);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a Cell<usize>) -> Self {
        counter.set(counter.get() + 1);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

impl SettingsSubmissionHandler {
    pub fn new(deps: SettingsDeps, config: SettingsConfig) -> Self {
        Self {
            deps,
            config,
            in_flight: Cell::new(0),
            next_banner_id: Cell::new(1),
            pending: RefCell::new(Vec::new()),
        }
    }

    pub fn state(&self) -> SubmissionState {
        if self.in_flight.get() == 0 {
            SubmissionState::Idle
        } else {
            SubmissionState::AwaitingResponse
        }
    }

    /// Number of scheduled tasks that have neither run nor been cancelled
    pub fn pending_tasks(&self) -> usize {
        self.pending
            .borrow()
            .iter()
            .filter(|task| !task.done.get())
            .count()
    }

    /// Handle a submission of the settings form
    pub async fn on_submit(&self, event: &dyn SubmitEvent) -> SubmissionOutcome {
        event.prevent_default();

        let payload = build_payload(&self.deps.form.inputs());
        log::info!("Submitting {} settings", payload.len());

        let url = self.config.settings_url.clone();
        let prefix = self.config.save_error_prefix.clone();
        self.submit_json(&url, &payload, &prefix).await
    }

    /// Ask the server to restore configuration from a backup file
    pub async fn restore_backup(&self, backup_file: &str) -> SubmissionOutcome {
        log::info!("Restoring settings backup '{}'", backup_file);

        let request = RestoreBackupRequest {
            backup_file: backup_file.to_string(),
        };
        let url = self.config.restore_backup_url.clone();
        let prefix = self.config.restore_error_prefix.clone();
        self.submit_json(&url, &request, &prefix).await
    }

    /// Replace the container content with a single banner and schedule its
    /// removal. Returns the banner id.
    pub fn show_alert(&self, kind: AlertKind, message: &str) -> u64 {
        let banner = Banner {
            id: self.next_banner_id.get(),
            kind,
            message: message.to_string(),
        };
        self.next_banner_id.set(banner.id + 1);

        self.deps.alerts.clear();
        self.deps.alerts.append(&banner);

        let alerts = Rc::clone(&self.deps.alerts);
        let banner_id = banner.id;
        self.schedule(self.config.alert_dismiss_ms, move || alerts.remove(banner_id));
        banner_id
    }

    /// Cancel the pending reload and banner removals
    pub fn teardown(&self) {
        let tasks = std::mem::take(&mut *self.pending.borrow_mut());
        let mut cancelled = 0;
        for task in tasks {
            if !task.done.get() {
                task.done.set(true);
                task.handle.cancel();
                cancelled += 1;
            }
        }
        log::debug!("Settings handler torn down, {} task(s) cancelled", cancelled);
    }

    async fn submit_json<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        error_prefix: &str,
    ) -> SubmissionOutcome {
        let result = {
            let _in_flight = InFlight::enter(&self.in_flight);
            self.exchange(url, body).await
        };

        match result {
            Ok(SubmissionResult {
                success: true,
                message,
            }) => {
                self.show_alert(AlertKind::Success, &message);
                self.schedule_reload();
                SubmissionOutcome::Accepted(message)
            }
            Ok(SubmissionResult {
                success: false,
                message,
            }) => {
                log::warn!("Settings request to {} rejected: {}", url, message);
                self.show_alert(AlertKind::Danger, &message);
                SubmissionOutcome::Rejected(message)
            }
            Err(e) => {
                log::warn!("Settings request to {} failed: {:?}", url, e);
                self.show_alert(AlertKind::Danger, &format!("{}{}", error_prefix, e));
                SubmissionOutcome::Failed(e)
            }
        }
    }

    async fn exchange<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<SubmissionResult, SubmitError> {
        let body = serde_json::to_string(body).map_err(|e| SubmitError::Encode(e.to_string()))?;

        let response = self
            .deps
            .transport
            .post(JsonRequest {
                url,
                content_type: CONTENT_TYPE_JSON,
                body,
            })
            .await?;

        Ok(serde_json::from_str(&response)?)
    }

    fn schedule_reload(&self) {
        log::debug!("Page reload in {} ms", self.config.reload_delay_ms);
        let reloader = Rc::clone(&self.deps.reloader);
        self.schedule(self.config.reload_delay_ms, move || reloader.reload());
    }

    fn schedule(&self, delay_ms: u32, task: impl FnOnce() + 'static) {
        let done = Rc::new(Cell::new(false));
        let flag = Rc::clone(&done);
        let handle = self.deps.scheduler.schedule(
            delay_ms,
            Box::new(move || {
                flag.set(true);
                task();
            }),
        );

        let mut pending = self.pending.borrow_mut();
        pending.retain(|task| !task.done.get());
        pending.push(PendingTask { handle, done });
    }
}
