//! Ошибки операций фронтенда и уведомления для пользователя.
//!
//! Все ошибки перехватываются на границе операции (load / submit /
//! delete / send) и превращаются в `Notice`; предыдущее состояние
//! экрана при этом не трогается.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Не задан обязательный параметр конфигурации (фатально для экрана)
    #[error("Configuration value {0} is missing. Set it at build time or in the page <meta> tags.")]
    ConfigurationMissing(&'static str),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with HTTP {status}")]
    Server { status: u16 },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl AppError {
    /// Сетевые и серверные ошибки можно повторить тем же действием
    pub fn is_retryable(&self) -> bool {
        !matches!(self, AppError::ConfigurationMissing(_))
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => AppError::Decode(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Сообщение для пользователя (замена alert())
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}
