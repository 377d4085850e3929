//! HTTP-утилиты для обращения к REST-бэкенду.
//!
//! Любой ответ вне диапазона 2xx считается ошибкой, тело ответа на
//! мутирующие запросы не разбирается.

use crate::shared::error::AppError;
use crate::shared::multipart::{MultipartPayload, PartValue, SubmitMethod};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

fn ensure_ok(response: &Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(AppError::Server {
            status: response.status(),
        })
    }
}

/// GET и разбор JSON-тела
///
/// # Example
/// ```ignore
/// let records: Vec<ProjectRecord> = get_json(&config.api_url("/api/cesp")?).await?;
/// ```
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, AppError> {
    let response = Request::get(url).send().await?;
    ensure_ok(&response)?;
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn delete(url: &str) -> Result<(), AppError> {
    let response = Request::delete(url).send().await?;
    ensure_ok(&response)
}

/// POST JSON; возвращает тело ответа как текст
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<String, AppError> {
    let response = Request::post(url).json(body)?.send().await?;
    ensure_ok(&response)?;
    Ok(response.text().await?)
}

/// Отправка формы как multipart/form-data.
/// Content-Type с boundary браузер проставляет сам.
pub async fn send_multipart(payload: &MultipartPayload<File>) -> Result<(), AppError> {
    let form_data = to_form_data(payload)?;
    let builder = match payload.method {
        SubmitMethod::Post => Request::post(&payload.url),
        SubmitMethod::Put => Request::put(&payload.url),
    };
    let response = builder.body(form_data)?.send().await?;
    ensure_ok(&response)
}

fn to_form_data(payload: &MultipartPayload<File>) -> Result<FormData, AppError> {
    let js_error = |e: wasm_bindgen::JsValue| AppError::Network(format!("{e:?}"));

    let form_data = FormData::new().map_err(js_error)?;
    for part in &payload.parts {
        match &part.value {
            PartValue::Text(value) => form_data
                .append_with_str(part.name, value)
                .map_err(js_error)?,
            PartValue::File(file) => form_data
                .append_with_blob_and_filename(part.name, file, &file.name())
                .map_err(js_error)?,
        }
    }
    Ok(form_data)
}
