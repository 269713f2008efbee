//! Service trait for settings.

use crate::settings::Settings;

/// Trait for reading and updating display settings.
///
/// Visibility toggles and base-currency reads are display concerns; none
/// of these operations trigger aggregation work.
pub trait SettingsServiceTrait: Send + Sync {
    /// Get the current settings snapshot.
    fn get_settings(&self) -> Settings;

    /// The currency the home rollup converts into.
    fn base_currency(&self) -> String;

    /// Change the base display currency.
    fn set_base_currency(&self, currency_code: &str);

    /// Show or hide one currency. Returns the new visibility.
    fn toggle_currency_visibility(&self, currency_code: &str) -> bool;

    /// True unless the currency was hidden.
    fn is_currency_visible(&self, currency_code: &str) -> bool;
}
