use crate::domain::common::{AggregateRoot, RecordId};
use crate::shared::filter::Filterable;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Запись проекта (бенефициар / объект программы)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "_id")]
    pub id: RecordId,

    #[serde(rename = "nationalId", default)]
    pub national_id: String,

    #[serde(default)]
    pub name: String,

    /// Метка проекта ("Project 1", ...), по ней работает фильтр типа
    #[serde(default)]
    pub project: String,

    #[serde(rename = "gsDivision", default)]
    pub gs_division: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, deserialize_with = "deserialize_coordinate")]
    pub lat: f64,

    #[serde(default, deserialize_with = "deserialize_coordinate")]
    pub lng: f64,

    #[serde(rename = "beforePhoto", default)]
    pub before_photo: Option<String>,

    #[serde(rename = "afterPhoto", default)]
    pub after_photo: Option<String>,
}

impl ProjectRecord {
    /// Координаты пригодны для маркера на карте
    pub fn has_location(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite() && !(self.lat == 0.0 && self.lng == 0.0)
    }
}

impl AggregateRoot for ProjectRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Filterable for ProjectRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn project(&self) -> &str {
        &self.project
    }

    fn gs_division(&self) -> &str {
        &self.gs_division
    }
}

/// Формы отправляют lat/lng текстом, поэтому бэкенд может вернуть
/// как число, так и строку. Пустое значение и null дают 0.0.
fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Ok(n),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(0.0),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid coordinate '{}': {}", s, e))),
        None => Ok(0.0),
    }
}
