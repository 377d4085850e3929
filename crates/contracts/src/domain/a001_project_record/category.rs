use serde::{Deserialize, Serialize};
use std::fmt;

/// Категория проектов; у каждой своя коллекция на бэкенде
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    #[default]
    Cesp,
    Cp,
    Led,
    In,
}

impl ProjectCategory {
    /// Порядок как в селекторе админки
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Cesp,
        ProjectCategory::Cp,
        ProjectCategory::Led,
        ProjectCategory::In,
    ];

    /// Сегмент пути REST API: `/api/{slug}`
    pub fn slug(&self) -> &'static str {
        match self {
            ProjectCategory::Cesp => "cesp",
            ProjectCategory::Cp => "cp",
            ProjectCategory::Led => "led",
            ProjectCategory::In => "in",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Cesp => "CESP",
            ProjectCategory::Cp => "CP",
            ProjectCategory::Led => "LED",
            ProjectCategory::In => "IN",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ProjectCategory::Cesp => "Community Engagement in Sponsorship Plan",
            ProjectCategory::Cp => "Child Protection and Participation",
            ProjectCategory::Led => "Livelihood and Economic Development",
            ProjectCategory::In => "Integrated Nutrition Project",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            ProjectCategory::Cesp => {
                "Families and communities taking part in child sponsorship activities."
            }
            ProjectCategory::Cp => {
                "Safe environments where children are protected and heard."
            }
            ProjectCategory::Led => "Income generation and skills for household resilience.",
            ProjectCategory::In => "Nutrition support for mothers and young children.",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(slug.trim()))
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slug_is_case_insensitive() {
        assert_eq!(ProjectCategory::from_slug("LED"), Some(ProjectCategory::Led));
        assert_eq!(ProjectCategory::from_slug(" in "), Some(ProjectCategory::In));
        assert_eq!(ProjectCategory::from_slug("gallery"), None);
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&ProjectCategory::Cesp).unwrap();
        assert_eq!(json, "\"cesp\"");
        let parsed: ProjectCategory = serde_json::from_str("\"cp\"").unwrap();
        assert_eq!(parsed, ProjectCategory::Cp);
    }
}
