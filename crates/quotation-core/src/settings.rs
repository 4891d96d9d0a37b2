//! Form Settings
//!
//! Presentation knobs for the form. Built from defaults; there is no config file.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Prefix shown before computed amounts
    pub currency_symbol: String,
    /// `step` attribute of rate inputs
    pub rate_step: String,
    /// `step` attribute of quantity inputs
    pub quantity_step: String,
    /// Most verbose level forwarded to the console
    pub log_level: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            rate_step: "0.01".to_string(),
            quantity_step: "1".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl FormSettings {
    /// Parsed log level; unknown names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Amount with currency prefix and two decimals
    pub fn format_amount(&self, amount: f64) -> String {
        if amount < 0.0 {
            format!("-{}{:.2}", self.currency_symbol, -amount)
        } else {
            format!("{}{:.2}", self.currency_symbol, amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        let mut settings = FormSettings::default();
        assert_eq!(settings.level_filter(), LevelFilter::Info);
        settings.log_level = "debug".to_string();
        assert_eq!(settings.level_filter(), LevelFilter::Debug);
        settings.log_level = "chatty".to_string();
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_format_amount() {
        let settings = FormSettings::default();
        assert_eq!(settings.format_amount(180.0), "$180.00");
        assert_eq!(settings.format_amount(-2.5), "-$2.50");
    }

    #[test]
    fn test_partial_settings_deserialize() {
        let settings: FormSettings = serde_json::from_str(r#"{"currency_symbol":"€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.rate_step, "0.01");
    }
}
