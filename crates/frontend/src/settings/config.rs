use contracts::shared::settings::{RESTORE_BACKUP_ENDPOINT, SETTINGS_ENDPOINT};

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Settings handler configuration.
///
/// Defaults match the settings page served by the monitor: same-origin
/// endpoints, reload 2 s after a successful save, banners dismissed after 5 s.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsConfig {
    pub settings_url: String,
    pub restore_backup_url: String,
    pub reload_delay_ms: u32,
    pub alert_dismiss_ms: u32,
    pub save_error_prefix: String,
    pub restore_error_prefix: String,
    pub form_id: String,
    pub alert_container_id: String,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            settings_url: SETTINGS_ENDPOINT.to_string(),
            restore_backup_url: RESTORE_BACKUP_ENDPOINT.to_string(),
            reload_delay_ms: 2000,
            alert_dismiss_ms: 5000,
            save_error_prefix: "Error saving settings: ".to_string(),
            restore_error_prefix: "Error restoring backup: ".to_string(),
            form_id: "settings-form".to_string(),
            alert_container_id: "alert-container".to_string(),
        }
    }
}

impl SettingsConfig {
    /// Resolve both endpoints against `base` (e.g. `https://monitor.local`)
    pub fn with_api_base(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.settings_url = format!("{}{}", base, SETTINGS_ENDPOINT);
        self.restore_backup_url = format!("{}{}", base, RESTORE_BACKUP_ENDPOINT);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SettingsConfig::default();
        assert_eq!(config.settings_url, "/api/settings");
        assert_eq!(config.restore_backup_url, "/api/settings/backup");
        assert_eq!(config.reload_delay_ms, 2000);
        assert_eq!(config.alert_dismiss_ms, 5000);
        assert_eq!(config.form_id, "settings-form");
        assert_eq!(config.alert_container_id, "alert-container");
    }

    #[test]
    fn test_with_api_base() {
        let config = SettingsConfig::default().with_api_base("http://10.0.0.5:5000/");
        assert_eq!(config.settings_url, "http://10.0.0.5:5000/api/settings");
        assert_eq!(
            config.restore_backup_url,
            "http://10.0.0.5:5000/api/settings/backup"
        );
    }

    #[test]
    fn test_empty_api_base_keeps_relative_paths() {
        let config = SettingsConfig::default().with_api_base("");
        assert_eq!(config.settings_url, "/api/settings");
    }
}
