use std::env::vars;
use std::fmt::Display;
use std::path::PathBuf;

use anyhow::Context as _;
use log::info;
use serde::Deserialize;

use crate::pagination::PageSize;

/// Visual theme applied at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ThemePreference {
    #[default]
    #[serde(rename = "system")]
    System,
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
}

impl Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Environment variables as read, before defaults are applied.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "payops_page_size")]
    page_size: Option<u32>,
    #[serde(rename = "payops_transfers_file")]
    transfers_file: Option<PathBuf>,
    #[serde(rename = "payops_support_phone")]
    support_phone: Option<String>,
    #[serde(rename = "payops_theme")]
    theme: Option<ThemePreference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    page_size: PageSize,
    transfers_file: Option<PathBuf>,
    support_phone: Option<String>,
    theme: ThemePreference,
}

impl DashboardConfig {
    /// Reads `PAYOPS_*` environment variables and applies defaults.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading dashboard configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            page_size,
            transfers_file,
            support_phone,
            theme,
        } = raw;

        let page_size = match page_size {
            Some(size) => PageSize::try_from(size).context("invalid PAYOPS_PAGE_SIZE")?,
            None => {
                info!("PAYOPS_PAGE_SIZE not set, defaulting to {}", PageSize::default());
                PageSize::default()
            }
        };

        let theme = theme.unwrap_or_default();
        info!("Using {theme} theme");

        if transfers_file.is_none() {
            info!("PAYOPS_TRANSFERS_FILE not set, using built-in demo transfers");
        }

        Ok(Self {
            page_size,
            transfers_file,
            support_phone: support_phone.filter(|phone| !phone.trim().is_empty()),
            theme,
        })
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn transfers_file(&self) -> Option<&PathBuf> {
        self.transfers_file.as_ref()
    }

    pub fn support_phone(&self) -> Option<&str> {
        self.support_phone.as_deref()
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn with_support_phone(mut self, phone: impl Into<String>) -> Self {
        self.support_phone = Some(phone.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn defaults_when_nothing_is_set() {
        let raw: RawConfig = from_iter(vec![("HOME", "/root")]).expect("RawConfig should deserialize");
        let config = DashboardConfig::from_raw(raw).expect("config should build");

        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.page_size().get(), 10);
        assert_eq!(config.theme(), ThemePreference::System);
    }

    #[test]
    fn reads_all_variables() {
        let raw: RawConfig = from_iter(vec![
            ("PAYOPS_PAGE_SIZE", "50"),
            ("PAYOPS_TRANSFERS_FILE", "/tmp/transfers.json"),
            ("PAYOPS_SUPPORT_PHONE", "+1 555 0100"),
            ("PAYOPS_THEME", "dark"),
        ])
        .expect("RawConfig should deserialize");
        let config = DashboardConfig::from_raw(raw).expect("config should build");

        assert_eq!(config.page_size(), PageSize::Fifty);
        assert_eq!(
            config.transfers_file(),
            Some(&PathBuf::from("/tmp/transfers.json"))
        );
        assert_eq!(config.support_phone(), Some("+1 555 0100"));
        assert_eq!(config.theme(), ThemePreference::Dark);
    }

    #[test]
    fn rejects_unsupported_page_size() {
        let raw: RawConfig =
            from_iter(vec![("PAYOPS_PAGE_SIZE", "25")]).expect("RawConfig should deserialize");

        let result = DashboardConfig::from_raw(raw);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("PAYOPS_PAGE_SIZE"));
    }

    #[test]
    fn blank_support_phone_is_ignored() {
        let raw: RawConfig =
            from_iter(vec![("PAYOPS_SUPPORT_PHONE", "  ")]).expect("RawConfig should deserialize");
        let config = DashboardConfig::from_raw(raw).expect("config should build");

        assert_eq!(config.support_phone(), None);
    }
}
