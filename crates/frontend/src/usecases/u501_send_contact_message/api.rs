use crate::shared::api_utils;
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;
use contracts::system::contact::{EmailJsConfig, EmailJsSendRequest};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// `GET {base}/emailjs-config`
pub async fn fetch_emailjs_config(config: &AppConfig) -> Result<EmailJsConfig, AppError> {
    let url = config.api_url("/emailjs-config")?;
    log::debug!("u501: GET {}", url);
    let emailjs: EmailJsConfig = api_utils::get_json(&url).await?;
    if !emailjs.is_complete() {
        return Err(AppError::Decode("EmailJS configuration is incomplete".into()));
    }
    Ok(emailjs)
}

/// EmailJS отвечает текстом "OK"
pub async fn send_message(request: &EmailJsSendRequest) -> Result<(), AppError> {
    log::debug!("u501: POST {}", EMAILJS_SEND_URL);
    let reply = api_utils::post_json(EMAILJS_SEND_URL, request).await?;
    log::debug!("u501: EmailJS replied '{}'", reply.trim());
    Ok(())
}
