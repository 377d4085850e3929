//! Клиентская фильтрация списка записей проектов.
//!
//! Поиск по подстроке (без учёта регистра) в `name` или `project`,
//! плюс точные фильтры по типу проекта и GS-дивизиону. Порядок
//! входного списка сохраняется, сортировки нет.

use serde::{Deserialize, Serialize};

/// Варианты фильтра типа проекта
pub const PROJECT_TYPES: [&str; 3] = ["Project 1", "Project 2", "Project 3"];

/// GS-дивизионы программы
pub const GS_DIVISIONS: [&str; 15] = [
    "Delvita",
    "Egodamulla",
    "Gallawa",
    "Iriyagolla",
    "Kalugahathanna",
    "Katiyawa",
    "Kithulgolla",
    "Korossa",
    "Kotuhena",
    "Nahalla",
    "Nalaulla",
    "Nithulpitiya",
    "Pallekanda",
    "Udahena",
    "Wadurassa",
];

/// Trait для записей, поддерживающих фильтрацию
pub trait Filterable {
    fn name(&self) -> &str;
    fn project(&self) -> &str;
    fn gs_division(&self) -> &str;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    pub project_type: Option<String>,
    pub gs_division: Option<String>,
}

impl FilterState {
    /// Нет ни одного активного условия
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty()
            && active(&self.project_type).is_none()
            && active(&self.gs_division).is_none()
    }

    /// Сброс очищает все три поля сразу, чтобы поля ввода и список не расходились
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        let query = self.search_text.to_lowercase();
        let matches_search = record.name().to_lowercase().contains(&query)
            || record.project().to_lowercase().contains(&query);

        let matches_type = active(&self.project_type).map_or(true, |t| record.project() == t);
        let matches_division =
            active(&self.gs_division).map_or(true, |d| record.gs_division() == d);

        matches_search && matches_type && matches_division
    }
}

/// Фильтрует записи, сохраняя исходный порядок
pub fn filter_records<T: Filterable + Clone>(records: &[T], state: &FilterState) -> Vec<T> {
    records
        .iter()
        .filter(|record| state.matches(*record))
        .cloned()
        .collect()
}

// Пустая строка в select означает "все"
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        project: &'static str,
        gs_division: &'static str,
    }

    impl Filterable for Row {
        fn name(&self) -> &str {
            self.name
        }
        fn project(&self) -> &str {
            self.project
        }
        fn gs_division(&self) -> &str {
            self.gs_division
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Foo", project: "Project 1", gs_division: "Delvita" },
            Row { id: 2, name: "Bar", project: "Project 2", gs_division: "Gallawa" },
            Row { id: 3, name: "Food bank", project: "Project 2", gs_division: "Delvita" },
            Row { id: 4, name: "Well", project: "Project 1", gs_division: "Gallawa" },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_on_name() {
        let records = vec![rows()[0].clone(), rows()[1].clone()];
        let state = FilterState {
            search_text: "foo".into(),
            ..Default::default()
        };
        let result = filter_records(&records, &state);
        assert_eq!(result, vec![records[0].clone()]);
    }

    #[test]
    fn test_search_matches_project_label() {
        let state = FilterState {
            search_text: "PROJECT 2".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&rows(), &state)), vec![2, 3]);
    }

    #[test]
    fn test_empty_state_is_identity() {
        let state = FilterState {
            search_text: String::new(),
            project_type: Some(String::new()),
            gs_division: Some(String::new()),
        };
        assert!(state.is_empty());
        assert_eq!(filter_records(&rows(), &state), rows());
    }

    #[test]
    fn test_filters_combine_and_keep_order() {
        let state = FilterState {
            search_text: "o".into(),
            project_type: None,
            gs_division: Some("Delvita".into()),
        };
        assert_eq!(ids(&filter_records(&rows(), &state)), vec![1, 3]);

        let state = FilterState {
            search_text: String::new(),
            project_type: Some("Project 1".into()),
            gs_division: Some("Gallawa".into()),
        };
        assert_eq!(ids(&filter_records(&rows(), &state)), vec![4]);
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let all = rows();
        let queries = ["", "o", "bar", "project", "zzz"];
        for q in queries {
            let state = FilterState {
                search_text: q.into(),
                ..Default::default()
            };
            let result = ids(&filter_records(&all, &state));
            let mut positions = result
                .iter()
                .map(|id| all.iter().position(|r| r.id == *id).unwrap());
            let mut last = None;
            for pos in positions.by_ref() {
                if let Some(prev) = last {
                    assert!(pos > prev, "order broken for query {q:?}");
                }
                last = Some(pos);
            }
        }
    }

    #[test]
    fn test_project_type_is_exact_match() {
        let state = FilterState {
            project_type: Some("Project".into()),
            ..Default::default()
        };
        assert!(filter_records(&rows(), &state).is_empty());
    }

    #[test]
    fn test_reset_clears_all_fields() {
        let mut state = FilterState {
            search_text: "foo".into(),
            project_type: Some("Project 1".into()),
            gs_division: Some("Delvita".into()),
        };
        state.reset();
        assert_eq!(state, FilterState::default());
        assert_eq!(filter_records(&rows(), &state), rows());
    }
}
