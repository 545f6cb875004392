use crate::error::{CheckinError, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Ecuador, UTC-5.
const DEFAULT_UTC_OFFSET_MINUTES: i32 = -300;

/// Report and mapping settings, stored in `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CheckinConfig {
    /// Title printed at the top of the HTML report
    pub event_name: String,

    pub report_subtitle: String,

    pub footer_text: String,

    /// Suggested file name for `export csv` when no output path is given
    pub csv_filename: String,

    pub html_filename: String,

    /// Offset used for every human-readable timestamp in exports
    pub utc_offset_minutes: i32,

    /// Refuse records with an unknown status instead of treating them as pending
    pub strict_status: bool,
}

impl Default for CheckinConfig {
    fn default() -> Self {
        Self {
            event_name: "WARMI POWERFEST".to_string(),
            report_subtitle: "Reporte de Registros".to_string(),
            footer_text: "Warmi PowerFest - Sistema de Registro".to_string(),
            csv_filename: "registros-warmi-powerfest.csv".to_string(),
            html_filename: "reporte-warmi-powerfest.html".to_string(),
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            strict_status: false,
        }
    }
}

impl CheckinConfig {
    pub const KEYS: [&'static str; 7] = [
        "event-name",
        "report-subtitle",
        "footer-text",
        "csv-filename",
        "html-filename",
        "utc-offset-minutes",
        "strict-status",
    ];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CheckinConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "event-name" => Some(self.event_name.clone()),
            "report-subtitle" => Some(self.report_subtitle.clone()),
            "footer-text" => Some(self.footer_text.clone()),
            "csv-filename" => Some(self.csv_filename.clone()),
            "html-filename" => Some(self.html_filename.clone()),
            "utc-offset-minutes" => Some(self.utc_offset_minutes.to_string()),
            "strict-status" => Some(self.strict_status.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "event-name" => self.event_name = value.to_string(),
            "report-subtitle" => self.report_subtitle = value.to_string(),
            "footer-text" => self.footer_text = value.to_string(),
            "csv-filename" => self.csv_filename = value.to_string(),
            "html-filename" => self.html_filename = value.to_string(),
            "utc-offset-minutes" => {
                let minutes: i32 = value.parse().map_err(|_| {
                    CheckinError::Config(format!("Invalid UTC offset in minutes: {}", value))
                })?;
                offset_from_minutes(minutes)?;
                self.utc_offset_minutes = minutes;
            }
            "strict-status" => {
                self.strict_status = value.parse().map_err(|_| {
                    CheckinError::Config(format!("Expected true or false, got: {}", value))
                })?;
            }
            other => {
                return Err(CheckinError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn utc_offset(&self) -> Result<FixedOffset> {
        offset_from_minutes(self.utc_offset_minutes)
    }
}

fn offset_from_minutes(minutes: i32) -> Result<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| CheckinError::Config(format!("UTC offset out of range: {}", minutes)))
}
