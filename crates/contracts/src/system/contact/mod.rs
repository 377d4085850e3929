//! Контактная форма: конфигурация EmailJS и тело запроса отправки

use serde::{Deserialize, Serialize};

/// Ответ `GET {base}/emailjs-config`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    pub fn is_complete(&self) -> bool {
        !self.service_id.trim().is_empty()
            && !self.template_id.trim().is_empty()
            && !self.public_key.trim().is_empty()
    }
}

/// Поля контактной формы; имена совпадают с переменными шаблона
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Please enter your name.");
        }
        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .map_or(false, |(user, domain)| !user.is_empty() && domain.contains('.'));
        if !valid_email {
            return Err("Please enter a valid email address.");
        }
        if self.message.trim().is_empty() {
            return Err("Please enter a message.");
        }
        Ok(())
    }
}

/// Тело `POST https://api.emailjs.com/api/v1.0/email/send`
#[derive(Debug, Clone, Serialize)]
pub struct EmailJsSendRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: ContactMessage,
}

impl EmailJsSendRequest {
    pub fn new(config: &EmailJsConfig, message: ContactMessage) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_uses_camel_case() {
        let config: EmailJsConfig = serde_json::from_str(
            r#"{"serviceId":"svc","templateId":"tpl","publicKey":"pk"}"#,
        )
        .unwrap();
        assert!(config.is_complete());
        assert_eq!(config.public_key, "pk");
    }

    #[test]
    fn test_send_request_maps_public_key_to_user_id() {
        let config = EmailJsConfig {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "pk".into(),
        };
        let message = ContactMessage {
            name: "Nimal".into(),
            email: "nimal@example.org".into(),
            message: "Hello".into(),
        };
        let json = serde_json::to_value(EmailJsSendRequest::new(&config, message)).unwrap();
        assert_eq!(json["user_id"], "pk");
        assert_eq!(json["template_params"]["email"], "nimal@example.org");
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut message = ContactMessage {
            name: "A".into(),
            email: "not-an-email".into(),
            message: "Hi".into(),
        };
        assert!(message.validate().is_err());
        message.email = "a@b.lk".into();
        assert!(message.validate().is_ok());
    }
}
