use contracts::system::contact::{ContactMessage, EmailJsConfig, EmailJsSendRequest};

pub const SENT_MESSAGE: &str = "Your message has been sent successfully!";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send the message. Please try again later.";
pub const CONFIG_FAILED_MESSAGE: &str = "Failed to load email configuration.";
pub const CONFIG_MISSING_MESSAGE: &str = "Email configuration is missing.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactStatus {
    Idle,
    Sending,
    Sent,
    Failed(&'static str),
}

impl ContactStatus {
    pub fn text(&self) -> Option<&'static str> {
        match self {
            ContactStatus::Sent => Some(SENT_MESSAGE),
            ContactStatus::Failed(text) => Some(text),
            ContactStatus::Idle | ContactStatus::Sending => None,
        }
    }
}

/// Состояние контактной формы без сети
#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormState {
    pub message: ContactMessage,
    config: Option<EmailJsConfig>,
    status: ContactStatus,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            message: ContactMessage::default(),
            config: None,
            status: ContactStatus::Idle,
        }
    }
}

impl ContactFormState {
    pub fn status(&self) -> &ContactStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == ContactStatus::Sending
    }

    pub fn config_loaded(&mut self, config: EmailJsConfig) {
        self.config = Some(config);
    }

    pub fn config_failed(&mut self) {
        self.config = None;
        self.status = ContactStatus::Failed(CONFIG_FAILED_MESSAGE);
    }

    /// Returns the request to send, or `None` if the form stays where it is
    pub fn begin_send(&mut self) -> Option<EmailJsSendRequest> {
        if self.is_sending() {
            return None;
        }
        if let Err(text) = self.message.validate() {
            self.status = ContactStatus::Failed(text);
            return None;
        }
        let Some(config) = &self.config else {
            self.status = ContactStatus::Failed(CONFIG_MISSING_MESSAGE);
            return None;
        };
        let request = EmailJsSendRequest::new(config, self.message.clone());
        self.status = ContactStatus::Sending;
        Some(request)
    }

    /// Успех очищает поля, ошибка их сохраняет
    pub fn finish_send(&mut self, ok: bool) {
        if ok {
            self.message = ContactMessage::default();
            self.status = ContactStatus::Sent;
        } else {
            self.status = ContactStatus::Failed(SEND_FAILED_MESSAGE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EmailJsConfig {
        EmailJsConfig {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "pk".into(),
        }
    }

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.message = ContactMessage {
            name: "Kamala".into(),
            email: "kamala@example.lk".into(),
            message: "When is the next meeting?".into(),
        };
        state
    }

    #[test]
    fn test_send_without_config_reports_missing() {
        let mut state = filled();
        assert!(state.begin_send().is_none());
        assert_eq!(state.status().text(), Some(CONFIG_MISSING_MESSAGE));
    }

    #[test]
    fn test_success_clears_fields() {
        let mut state = filled();
        state.config_loaded(config());
        let request = state.begin_send().unwrap();
        assert_eq!(request.user_id, "pk");
        assert!(state.is_sending());
        assert!(state.begin_send().is_none());

        state.finish_send(true);
        assert_eq!(state.message, ContactMessage::default());
        assert_eq!(state.status().text(), Some(SENT_MESSAGE));
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut state = filled();
        state.config_loaded(config());
        state.begin_send();
        state.finish_send(false);
        assert_eq!(state.message.name, "Kamala");
        assert_eq!(state.status(), &ContactStatus::Failed(SEND_FAILED_MESSAGE));
    }

    #[test]
    fn test_invalid_message_is_not_sent() {
        let mut state = ContactFormState::default();
        state.config_loaded(config());
        assert!(state.begin_send().is_none());
        assert_eq!(state.status().text(), Some("Please enter your name."));
    }
}
