//! Конфигурация фронтенда.
//!
//! Порядок поиска значений:
//! 1. Переменные окружения на этапе сборки (`API_BASE_URL`, `GOOGLE_MAPS_API_KEY`)
//! 2. `<meta name="api-base-url">` / `<meta name="maps-api-key">` на странице
//!
//! Подставлять адрес "по умолчанию" нельзя: без значения экран, которому
//! оно нужно, показывает блокирующую ошибку.

use crate::shared::error::AppError;

pub const API_BASE_URL: &str = "API_BASE_URL";
pub const GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

const API_BASE_URL_META: &str = "api-base-url";
const MAPS_API_KEY_META: &str = "maps-api-key";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    api_base_url: Option<String>,
    maps_api_key: Option<String>,
}

impl AppConfig {
    pub fn new(api_base_url: Option<String>, maps_api_key: Option<String>) -> Self {
        Self {
            api_base_url: normalize(api_base_url).map(|u| u.trim_end_matches('/').to_string()),
            maps_api_key: normalize(maps_api_key),
        }
    }

    /// Load configuration for the running page
    pub fn load() -> Self {
        let api_base_url = option_env!("API_BASE_URL")
            .map(str::to_string)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| meta_content(API_BASE_URL_META));
        let maps_api_key = option_env!("GOOGLE_MAPS_API_KEY")
            .map(str::to_string)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| meta_content(MAPS_API_KEY_META));

        let config = Self::new(api_base_url, maps_api_key);
        match config.api_base() {
            Ok(base) => log::info!("config: API base URL {}", base),
            Err(e) => log::error!("config: {}", e),
        }
        if config.maps_api_key.is_none() {
            log::warn!("config: {} is not set, maps are disabled", GOOGLE_MAPS_API_KEY);
        }
        config
    }

    pub fn api_base(&self) -> Result<&str, AppError> {
        self.api_base_url
            .as_deref()
            .ok_or(AppError::ConfigurationMissing(API_BASE_URL))
    }

    pub fn maps_api_key(&self) -> Result<&str, AppError> {
        self.maps_api_key
            .as_deref()
            .ok_or(AppError::ConfigurationMissing(GOOGLE_MAPS_API_KEY))
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```ignore
    /// let url = config.api_url("/api/cesp")?;
    /// ```
    pub fn api_url(&self, path: &str) -> Result<String, AppError> {
        Ok(format!("{}{}", self.api_base()?, path))
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    let element = document.query_selector(&selector).ok()??;
    element
        .get_attribute("content")
        .filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::new(Some(" https://api.example.org/ ".into()), Some("k".into()));
        assert_eq!(config.api_base().unwrap(), "https://api.example.org");
        assert_eq!(
            config.api_url("/api/cesp").unwrap(),
            "https://api.example.org/api/cesp"
        );
    }

    #[test]
    fn test_missing_values_fail_fast() {
        let config = AppConfig::new(Some("   ".into()), None);
        assert_eq!(
            config.api_base().unwrap_err(),
            AppError::ConfigurationMissing(API_BASE_URL)
        );
        assert_eq!(
            config.maps_api_key().unwrap_err(),
            AppError::ConfigurationMissing(GOOGLE_MAPS_API_KEY)
        );
        assert!(config.api_url("/gallery").is_err());
    }
}
