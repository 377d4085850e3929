//! Выбор карточки и синхронизация с камерой карты.
//!
//! Активной может быть только одна запись. Клик по карточке раскрывает
//! её и наводит камеру; клик по маркеру только раскрывает карточку.

use contracts::domain::common::{AggregateRoot, RecordId};

/// Масштаб при фокусе на выбранной записи
pub const FOCUS_ZOOM: f64 = 18.0;

/// Команда камеры карты. Реализация обязана молча игнорировать вызов,
/// пока карта не инициализирована.
pub trait MapCamera {
    fn pan_zoom_to(&self, lat: f64, lng: f64, zoom: f64);
}

/// Запись с координатами на карте
pub trait Located: AggregateRoot {
    fn position(&self) -> (f64, f64);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    active_id: Option<RecordId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_id(&self) -> Option<&RecordId> {
        self.active_id.as_ref()
    }

    /// Запись ищется в полном наборе, а не в отфильтрованном: скрытая
    /// фильтром запись всё равно разрешается и фокусируется.
    pub fn select_card<T: Located>(&mut self, id: RecordId, all: &[T], camera: &dyn MapCamera) {
        if let Some(record) = all.iter().find(|r| r.id() == &id) {
            let (lat, lng) = record.position();
            camera.pan_zoom_to(lat, lng, FOCUS_ZOOM);
        } else {
            log::warn!("selection: record {} not found, camera unchanged", id);
        }
        self.active_id = Some(id);
    }

    /// Камера уже смотрит на видимый маркер, двигать её не нужно
    pub fn select_marker(&mut self, id: RecordId) {
        self.active_id = Some(id);
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.active_id.as_ref() == Some(id)
    }

    /// Смена категории или обновление списка; камера не трогается
    pub fn clear(&mut self) {
        self.active_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::filter::{filter_records, FilterState, Filterable};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingCamera {
        moves: RefCell<Vec<(f64, f64, f64)>>,
    }

    impl MapCamera for RecordingCamera {
        fn pan_zoom_to(&self, lat: f64, lng: f64, zoom: f64) {
            self.moves.borrow_mut().push((lat, lng, zoom));
        }
    }

    #[derive(Debug, Clone)]
    struct Site {
        id: RecordId,
        name: String,
        lat: f64,
        lng: f64,
    }

    impl AggregateRoot for Site {
        fn id(&self) -> &RecordId {
            &self.id
        }
        fn display_name(&self) -> &str {
            &self.name
        }
    }

    impl Located for Site {
        fn position(&self) -> (f64, f64) {
            (self.lat, self.lng)
        }
    }

    impl Filterable for Site {
        fn name(&self) -> &str {
            &self.name
        }
        fn project(&self) -> &str {
            ""
        }
        fn gs_division(&self) -> &str {
            ""
        }
    }

    fn sites() -> Vec<Site> {
        vec![
            Site {
                id: RecordId::new("1"),
                name: "Foo".into(),
                lat: 7.1,
                lng: 80.1,
            },
            Site {
                id: RecordId::new("2"),
                name: "Bar".into(),
                lat: 7.2,
                lng: 80.2,
            },
        ]
    }

    #[test]
    fn test_card_click_expands_and_moves_camera() {
        let camera = RecordingCamera::default();
        let mut selection = SelectionController::new();
        selection.select_card(RecordId::new("2"), &sites(), &camera);

        assert!(selection.is_expanded(&RecordId::new("2")));
        assert!(!selection.is_expanded(&RecordId::new("1")));
        assert_eq!(*camera.moves.borrow(), vec![(7.2, 80.2, FOCUS_ZOOM)]);
    }

    #[test]
    fn test_marker_click_does_not_move_camera() {
        let mut selection = SelectionController::new();
        selection.select_marker(RecordId::new("1"));
        assert_eq!(selection.active_id(), Some(&RecordId::new("1")));
    }

    #[test]
    fn test_selection_resolves_against_unfiltered_set() {
        let all = sites();
        let state = FilterState {
            search_text: "foo".into(),
            ..Default::default()
        };
        let visible = filter_records(&all, &state);
        assert_eq!(visible.len(), 1);

        let camera = RecordingCamera::default();
        let mut selection = SelectionController::new();
        // "Bar" скрыт фильтром, но выбирается по полному набору
        selection.select_card(RecordId::new("2"), &all, &camera);
        assert_eq!(camera.moves.borrow().len(), 1);

        // после сброса фильтра карточка показывается раскрытой
        let shown = filter_records(&all, &FilterState::default());
        let expanded: Vec<_> = shown
            .iter()
            .filter(|s| selection.is_expanded(&s.id))
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(expanded, vec!["Bar"]);
    }

    #[test]
    fn test_unknown_id_is_selected_without_camera_move() {
        let camera = RecordingCamera::default();
        let mut selection = SelectionController::new();
        selection.select_card(RecordId::new("404"), &sites(), &camera);
        assert!(camera.moves.borrow().is_empty());
        assert!(selection.is_expanded(&RecordId::new("404")));
    }

    #[test]
    fn test_clear_drops_active_card() {
        let camera = RecordingCamera::default();
        let mut selection = SelectionController::new();
        selection.select_card(RecordId::new("1"), &sites(), &camera);
        selection.clear();
        assert!(selection.active_id().is_none());
        assert_eq!(camera.moves.borrow().len(), 1);
    }
}
