use crate::domain::a001_project_record::api;
use crate::shared::config::AppConfig;
use crate::shared::map::{GoogleMapCamera, MapMarker};
use crate::shared::state::remote_list::RemoteList;
use crate::shared::state::selection::SelectionController;
use contracts::domain::a001_project_record::{ProjectCategory, ProjectRecord};
use contracts::domain::common::RecordId;
use contracts::shared::filter::{filter_records, FilterState};
use leptos::prelude::*;

/// Фильтр и выбор одной категории. При смене категории оба сбрасываются,
/// чтобы условия одной коллекции не применялись к другой.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplorerState {
    pub category: ProjectCategory,
    pub filter: FilterState,
    pub selection: SelectionController,
}

impl ExplorerState {
    pub fn new(category: ProjectCategory) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// Returns `true` if the category actually changed
    pub fn switch_category(&mut self, category: ProjectCategory) -> bool {
        let changed = self.category != category;
        self.category = category;
        self.filter.reset();
        self.selection.clear();
        changed
    }

    /// Перечитывание списка снимает выбор, фильтр остаётся
    pub fn on_reload(&mut self) {
        self.selection.clear();
    }
}

/// Маркеры только для записей с координатами
pub fn markers_for(records: &[ProjectRecord]) -> Vec<MapMarker> {
    records
        .iter()
        .filter(|r| r.has_location())
        .map(|r| MapMarker {
            id: r.id.clone(),
            lat: r.lat,
            lng: r.lng,
            title: r.name.clone(),
        })
        .collect()
}

/// Что показывать в списке вместо карточек
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardsPlaceholder {
    Loading,
    Empty,
}

/// Ошибка загрузки выводится отдельно над карточками, поэтому прежний
/// список остаётся видимым; "нет данных" только без ошибки.
pub fn cards_placeholder(is_loading: bool, has_error: bool, visible: usize) -> Option<CardsPlaceholder> {
    match (visible, is_loading, has_error) {
        (0, true, _) => Some(CardsPlaceholder::Loading),
        (0, false, false) => Some(CardsPlaceholder::Empty),
        _ => None,
    }
}

#[derive(Clone, Copy)]
pub struct ExplorerViewModel {
    pub state: RwSignal<ExplorerState>,
    pub list: RemoteList<ProjectCategory, ProjectRecord>,
    pub camera: GoogleMapCamera,
    config: StoredValue<AppConfig>,
}

impl ExplorerViewModel {
    pub fn new(category: ProjectCategory, config: AppConfig) -> Self {
        Self {
            state: RwSignal::new(ExplorerState::new(category)),
            list: RemoteList::new(),
            camera: GoogleMapCamera::new(),
            config: StoredValue::new(config),
        }
    }

    pub fn load(&self) {
        let config = self.config;
        let category = self.state.with_untracked(|s| s.category);
        self.state.update(|s| s.on_reload());
        self.list.load(category, move |category| {
            let config = config.get_value();
            async move { api::fetch_records(&config, category).await }
        });
    }

    pub fn switch_category(&self, category: ProjectCategory) {
        let changed = self
            .state
            .try_update(|s| s.switch_category(category))
            .unwrap_or(false);
        if changed {
            log::debug!("explorer: category switched to {}", category);
            self.load();
        }
    }

    /// Видимые карточки: фильтр поверх полного списка
    pub fn visible(&self) -> Signal<Vec<ProjectRecord>> {
        let list = self.list;
        let state = self.state;
        Signal::derive(move || {
            let filter = state.with(|s| s.filter.clone());
            list.store.with(|store| filter_records(store.items(), &filter))
        })
    }

    /// На карте все записи категории, фильтр на маркеры не действует
    pub fn markers(&self) -> Signal<Vec<MapMarker>> {
        let list = self.list;
        Signal::derive(move || list.store.with(|store| markers_for(store.items())))
    }

    pub fn search_text(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filter.search_text.clone()))
    }

    pub fn project_type(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filter.project_type.clone().unwrap_or_default()))
    }

    pub fn gs_division(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filter.gs_division.clone().unwrap_or_default()))
    }

    pub fn set_search_text(&self, text: String) {
        self.state.update(|s| s.filter.search_text = text);
    }

    pub fn set_project_type(&self, value: String) {
        self.state
            .update(|s| s.filter.project_type = Some(value).filter(|v| !v.is_empty()));
    }

    pub fn set_gs_division(&self, value: String) {
        self.state
            .update(|s| s.filter.gs_division = Some(value).filter(|v| !v.is_empty()));
    }

    pub fn reset_filters(&self) {
        self.state.update(|s| s.filter.reset());
    }

    pub fn select_card(&self, id: RecordId) {
        let camera = self.camera;
        let list = self.list;
        self.state.update(|s| {
            list.store
                .with_untracked(|store| s.selection.select_card(id, store.items(), &camera));
        });
    }

    pub fn select_marker(&self, id: RecordId) {
        self.state.update(|s| s.selection.select_marker(id));
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.state.with(|s| s.selection.is_expanded(id))
    }
}
