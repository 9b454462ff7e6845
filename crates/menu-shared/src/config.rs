//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::AppError;
use crate::constants::{
    DEFAULT_DISABLED_CLASS, DEFAULT_HEADER_CLASS, DEFAULT_ICON_CLASS, DEFAULT_ITEM_CLASS,
    DEFAULT_LINK_CLASS, DEFAULT_LIST_CLASS, DEFAULT_SEPARATOR_CLASS, DEFAULT_TEXT_CLASS,
};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RenderKitConfig {
    pub menu: MenuSettings,
    pub telemetry: TelemetrySettings,
}

/// Style classes emitted by the menu renderers.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MenuSettings {
    pub separator_class: String,
    pub item_class: String,
    pub link_class: String,
    pub icon_class: String,
    pub text_class: String,
    pub list_class: String,
    pub header_class: String,
    pub disabled_class: String,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            separator_class: DEFAULT_SEPARATOR_CLASS.into(),
            item_class: DEFAULT_ITEM_CLASS.into(),
            link_class: DEFAULT_LINK_CLASS.into(),
            icon_class: DEFAULT_ICON_CLASS.into(),
            text_class: DEFAULT_TEXT_CLASS.into(),
            list_class: DEFAULT_LIST_CLASS.into(),
            header_class: DEFAULT_HEADER_CLASS.into(),
            disabled_class: DEFAULT_DISABLED_CLASS.into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: true,
        }
    }
}

impl RenderKitConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("MENU_ENV").unwrap_or_else(|_| "development".into());
        tracing::debug!("Loading render kit configuration for env {}", env);
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("MENU")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Parses settings from a TOML string layered over the defaults.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        Self::builder()?
            .add_source(File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Rejects blank structural classes; the list and separator markup has
    /// nothing else to hang styling on.
    fn validated(self) -> Result<Self, AppError> {
        let required = [
            ("menu.list_class", &self.menu.list_class),
            ("menu.separator_class", &self.menu.separator_class),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::InvalidSetting {
                    key,
                    reason: "must not be blank".into(),
                });
            }
        }
        Ok(self)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let menu = MenuSettings::default();
        let telemetry = TelemetrySettings::default();
        Config::builder()
            .set_default("menu.separator_class", menu.separator_class)?
            .set_default("menu.item_class", menu.item_class)?
            .set_default("menu.link_class", menu.link_class)?
            .set_default("menu.icon_class", menu.icon_class)?
            .set_default("menu.text_class", menu.text_class)?
            .set_default("menu.list_class", menu.list_class)?
            .set_default("menu.header_class", menu.header_class)?
            .set_default("menu.disabled_class", menu.disabled_class)?
            .set_default("telemetry.level", telemetry.level)?
            .set_default("telemetry.json", telemetry.json)
    }
}
