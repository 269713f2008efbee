//! In-memory settings service.

use std::sync::{Arc, RwLock};

use crate::settings::{Settings, SettingsServiceTrait};

/// Shared, in-memory settings state.
#[derive(Clone, Default)]
pub struct SettingsService {
    settings: Arc<RwLock<Settings>>,
}

impl SettingsService {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
        }
    }
}

impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Settings {
        self.settings.read().unwrap().clone()
    }

    fn base_currency(&self) -> String {
        self.settings.read().unwrap().base_currency.clone()
    }

    fn set_base_currency(&self, currency_code: &str) {
        self.settings.write().unwrap().base_currency = currency_code.to_uppercase();
    }

    fn toggle_currency_visibility(&self, currency_code: &str) -> bool {
        let code = currency_code.to_uppercase();
        let mut settings = self.settings.write().unwrap();
        if settings.hidden_currencies.remove(&code) {
            true
        } else {
            settings.hidden_currencies.insert(code);
            false
        }
    }

    fn is_currency_visible(&self, currency_code: &str) -> bool {
        !self
            .settings
            .read()
            .unwrap()
            .hidden_currencies
            .contains(&currency_code.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_toggle_round_trip() {
        let service = SettingsService::default();
        assert!(service.is_currency_visible("usd"));

        assert!(!service.toggle_currency_visibility("USD"));
        assert!(!service.is_currency_visible("usd"));

        assert!(service.toggle_currency_visibility("usd"));
        assert!(service.is_currency_visible("USD"));
    }

    #[test]
    fn test_base_currency_is_normalized() {
        let service = SettingsService::default();
        service.set_base_currency("brl");
        assert_eq!(service.base_currency(), "BRL");
    }
}
