//! Демонстрационная проверка учётных данных админки.
//!
//! Настоящей аутентификации нет: логин и пароль зашиты в клиент.

use thiserror::Error;

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "password";

/// Искусственная пауза перед ответом, чтобы был виден индикатор входа
pub const LOGIN_DELAY_MS: u32 = 800;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid username or password.")]
    InvalidCredentials,
}

/// Returns the accepted username
pub fn check_credentials(username: &str, password: &str) -> Result<String, LoginError> {
    let username = username.trim();
    if username == DEMO_USERNAME && password == DEMO_PASSWORD {
        Ok(username.to_string())
    } else {
        Err(LoginError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_credentials_accepted() {
        assert_eq!(check_credentials("admin", "password"), Ok("admin".to_string()));
        assert_eq!(check_credentials(" admin ", "password"), Ok("admin".to_string()));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let err = check_credentials("admin", "admin").unwrap_err();
        assert_eq!(err.to_string(), "Invalid username or password.");
    }

    #[test]
    fn test_password_is_not_trimmed() {
        assert!(check_credentials("admin", "password ").is_err());
    }
}
