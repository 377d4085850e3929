use crate::shared::api_utils;
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;
use contracts::domain::a001_project_record::{ProjectCategory, ProjectRecord};
use contracts::domain::common::{AggregateId, RecordId};

/// `{base}/api/{category}`
pub fn collection_url(config: &AppConfig, category: ProjectCategory) -> Result<String, AppError> {
    config.api_url(&format!("/api/{}", category.slug()))
}

pub async fn fetch_records(
    config: &AppConfig,
    category: ProjectCategory,
) -> Result<Vec<ProjectRecord>, AppError> {
    let url = collection_url(config, category)?;
    log::debug!("a001: GET {}", url);
    api_utils::get_json(&url).await
}

pub async fn delete_record(
    config: &AppConfig,
    category: ProjectCategory,
    id: &RecordId,
) -> Result<(), AppError> {
    let url = format!(
        "{}/{}",
        collection_url(config, category)?,
        urlencoding::encode(&id.as_string())
    );
    log::debug!("a001: DELETE {}", url);
    api_utils::delete(&url).await
}
