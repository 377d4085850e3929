use serde::{Deserialize, Serialize};
use std::fmt;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId: Clone + PartialEq + Eq + std::hash::Hash + fmt::Debug {
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Непрозрачный идентификатор записи, выданный бэкендом (поле `_id`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for RecordId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Record id must not be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_trims_and_rejects_empty() {
        assert_eq!(
            RecordId::from_string("  65a1f0 ").unwrap(),
            RecordId::new("65a1f0")
        );
        assert!(RecordId::from_string("   ").is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = RecordId::new("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
