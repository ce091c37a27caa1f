use super::error::ConfigError;
use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Поведение при открытии выпадающего списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadOnOpen {
    /// Загружать первую страницу, только если опций нет
    #[default]
    WhenEmpty,
    /// Как `WhenEmpty`, плюс повторная загрузка после ошибки
    WhenEmptyOrFailed,
    /// Новая сессия при каждом открытии, даже если запрос ещё в полёте
    Always,
}

/// Настройки селекта с постраничной загрузкой
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub related_key: Option<String>,
    #[serde(default)]
    pub reload_on_open: ReloadOnOpen,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            related_key: None,
            reload_on_open: ReloadOnOpen::default(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
page_size = 20
reload_on_open = "when_empty"
"#;

impl SelectConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_related_key(mut self, related_key: impl Into<String>) -> Self {
        self.related_key = Some(related_key.into());
        self
    }

    pub fn with_reload_on_open(mut self, reload_on_open: ReloadOnOpen) -> Self {
        self.reload_on_open = reload_on_open;
        self
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: SelectConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration embedded in the binary
    pub fn default_config() -> Result<Self, ConfigError> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}
