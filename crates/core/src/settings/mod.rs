//! Settings module - base display currency and currency visibility.

mod settings_model;
mod settings_service;
mod settings_traits;

pub use settings_model::Settings;
pub use settings_service::SettingsService;
pub use settings_traits::SettingsServiceTrait;
