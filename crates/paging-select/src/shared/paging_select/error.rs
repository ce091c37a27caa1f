use thiserror::Error;

/// Ошибки загрузки страницы опций
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: HTTP {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Source error: {0}")]
    Source(String),
}

impl FetchError {
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::Source(message.into())
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

impl From<serde_qs::Error> for FetchError {
    fn from(err: serde_qs::Error) -> Self {
        Self::Source(format!("query encoding failed: {}", err))
    }
}

/// Ошибки конфигурации селекта
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("page_size must be positive")]
    ZeroPageSize,
}
