use crate::domain::common::{AggregateRoot, RecordId};
use serde::{Deserialize, Serialize};

/// Изображение фотогалереи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    #[serde(rename = "_id")]
    pub id: RecordId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image: Option<String>,
}

impl AggregateRoot for GalleryImage {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}
