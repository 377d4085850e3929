use crate::shared::api_utils;
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;
use contracts::domain::a002_gallery_image::GalleryImage;
use contracts::domain::common::{AggregateId, RecordId};

/// `{base}/gallery`
pub fn collection_url(config: &AppConfig) -> Result<String, AppError> {
    config.api_url("/gallery")
}

pub async fn fetch_images(config: &AppConfig) -> Result<Vec<GalleryImage>, AppError> {
    let url = collection_url(config)?;
    log::debug!("a002: GET {}", url);
    api_utils::get_json(&url).await
}

pub async fn delete_image(config: &AppConfig, id: &RecordId) -> Result<(), AppError> {
    let url = format!(
        "{}/{}",
        collection_url(config)?,
        urlencoding::encode(&id.as_string())
    );
    log::debug!("a002: DELETE {}", url);
    api_utils::delete(&url).await
}
