use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    currency::CurrencyFormat,
    domain::PeriodSelection,
    errors::{ExpenseError, Result},
    utils::paths,
};

const TMP_SUFFIX: &str = "tmp";

/// Persistent user preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Period tag selected when none is given explicitly.
    #[serde(default = "Config::default_period_tag")]
    pub default_period: String,
    /// Overrides the expense file location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            default_period: Self::default_period_tag(),
            data_file: None,
        }
    }
}

impl Config {
    fn default_period_tag() -> String {
        PeriodSelection::default().tag().to_string()
    }

    pub fn default_selection(&self) -> PeriodSelection {
        PeriodSelection::from_tag(&self.default_period)
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::for_locale(&self.locale, &self.currency)
    }

    /// Updates one preference by key. An empty `data_file` clears the override.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "locale" | "currency" if value.is_empty() => {
                return Err(ExpenseError::Config(format!("{key} must not be empty")));
            }
            "locale" => self.locale = value.to_string(),
            "currency" => self.currency = value.to_ascii_uppercase(),
            "default_period" => {
                if PeriodSelection::from_tag(value).tag() != value {
                    return Err(ExpenseError::Config(format!(
                        "unknown default period `{value}`"
                    )));
                }
                self.default_period = value.to_string();
            }
            "data_file" => {
                self.data_file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            other => {
                return Err(ExpenseError::Config(format!(
                    "unknown key `{other}`; expected locale, currency, default_period or data_file"
                )));
            }
        }
        Ok(())
    }
}

/// Loads and saves [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn with_base_dir(base: &Path) -> Self {
        Self::new(paths::config_file_in(base))
    }

    /// Reads the stored config, or the defaults when nothing has been saved.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            ExpenseError::Config(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(format!("json.{TMP_SUFFIX}"));
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
