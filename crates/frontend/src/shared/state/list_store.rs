//! Хранилище загруженного списка записей.
//!
//! Каждая загрузка получает билет с номером поколения; ответ применяется,
//! только если его поколение всё ещё последнее. Так поздний ответ по
//! старой категории не перезапишет данные новой.

use crate::shared::error::AppError;
use contracts::domain::common::{AggregateRoot, RecordId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    /// Загрузка не удалась; предыдущие записи остаются на экране
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket<K> {
    generation: u64,
    pub key: K,
}

/// Подтверждённый запрос на удаление
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest<K> {
    pub key: K,
    pub id: RecordId,
}

#[derive(Debug, Clone)]
pub struct RecordListStore<K, T> {
    key: Option<K>,
    items: Vec<T>,
    state: LoadState,
    generation: u64,
}

impl<K, T> Default for RecordListStore<K, T> {
    fn default() -> Self {
        Self {
            key: None,
            items: Vec::new(),
            state: LoadState::Idle,
            generation: 0,
        }
    }
}

impl<K, T> RecordListStore<K, T>
where
    K: Clone + PartialEq + std::fmt::Debug,
    T: AggregateRoot,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Успешная загрузка без записей: не ошибка, а пустое состояние
    pub fn is_empty_result(&self) -> bool {
        self.state == LoadState::Loaded && self.items.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn find(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Начать загрузку. При смене ключа старые записи сбрасываются:
    /// они принадлежат другой коллекции.
    pub fn begin_load(&mut self, key: K) -> LoadTicket<K> {
        if self.key.as_ref() != Some(&key) {
            self.items.clear();
        }
        self.generation += 1;
        self.key = Some(key.clone());
        self.state = LoadState::Loading;
        log::debug!("list: load #{} for {:?}", self.generation, key);
        LoadTicket {
            generation: self.generation,
            key,
        }
    }

    /// Применить ответ. Возвращает `false`, если ответ устарел и отброшен.
    pub fn complete(&mut self, ticket: LoadTicket<K>, result: Result<Vec<T>, AppError>) -> bool {
        if ticket.generation != self.generation || self.key.as_ref() != Some(&ticket.key) {
            log::warn!(
                "list: stale response #{} for {:?} discarded (current #{})",
                ticket.generation,
                ticket.key,
                self.generation
            );
            return false;
        }

        match result {
            Ok(items) => {
                log::info!("list: {} records loaded for {:?}", items.len(), ticket.key);
                self.items = items;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                log::error!("list: load for {:?} failed: {}", ticket.key, e);
                self.state = LoadState::Error(e.to_string());
            }
        }
        true
    }

    /// Удаление только после явного подтверждения пользователя
    pub fn request_delete(&self, id: &RecordId, confirmed: bool) -> Option<DeleteRequest<K>> {
        if !confirmed {
            log::debug!("list: delete of {} declined", id);
            return None;
        }
        let key = self.key.clone()?;
        if self.find(id).is_none() {
            log::warn!("list: delete requested for unknown record {}", id);
            return None;
        }
        Some(DeleteRequest {
            key,
            id: id.clone(),
        })
    }

    /// После удаления список перечитывается целиком, а не правится локально.
    /// Если за время запроса список переключили на другой ключ, перечитывать
    /// нечего: `Ok(None)`. При ошибке запись остаётся, состояние не меняется.
    pub fn finish_delete(
        &mut self,
        request: DeleteRequest<K>,
        result: Result<(), AppError>,
    ) -> Result<Option<LoadTicket<K>>, AppError> {
        match result {
            Ok(()) if self.key.as_ref() != Some(&request.key) => {
                log::warn!(
                    "list: record {} deleted from {:?}, reload skipped (current {:?})",
                    request.id,
                    request.key,
                    self.key
                );
                Ok(None)
            }
            Ok(()) => {
                log::info!("list: record {} deleted", request.id);
                Ok(Some(self.begin_load(request.key)))
            }
            Err(e) => {
                log::error!("list: delete of {} failed: {}", request.id, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: RecordId,
        name: String,
    }

    impl AggregateRoot for Item {
        fn id(&self) -> &RecordId {
            &self.id
        }
        fn display_name(&self) -> &str {
            &self.name
        }
    }

    fn item(id: &str) -> Item {
        Item {
            id: RecordId::new(id),
            name: format!("item {id}"),
        }
    }

    fn names(store: &RecordListStore<&'static str, Item>) -> Vec<String> {
        store.items().iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_late_response_for_previous_key_is_discarded() {
        let mut store = RecordListStore::new();
        let cesp = store.begin_load("cesp");
        let cp = store.begin_load("cp");

        assert!(store.complete(cp, Ok(vec![item("cp-1")])));
        assert!(!store.complete(cesp, Ok(vec![item("cesp-1"), item("cesp-2")])));

        assert_eq!(store.key(), Some(&"cp"));
        assert_eq!(names(&store), vec!["item cp-1"]);
        assert_eq!(store.state(), &LoadState::Loaded);
    }

    #[test]
    fn test_delete_finished_after_key_switch_keeps_new_list() {
        let mut store = RecordListStore::new();
        let t = store.begin_load("cesp");
        store.complete(t, Ok(vec![item("1"), item("2")]));
        let request = store.request_delete(&RecordId::new("1"), true).unwrap();

        let t = store.begin_load("cp");
        store.complete(t, Ok(vec![item("cp-1")]));

        assert!(store.finish_delete(request, Ok(())).unwrap().is_none());
        assert_eq!(store.key(), Some(&"cp"));
        assert_eq!(names(&store), vec!["item cp-1"]);
        assert_eq!(store.state(), &LoadState::Loaded);
    }

    #[test]
    fn test_superseded_reload_of_same_key_is_discarded() {
        let mut store = RecordListStore::new();
        let first = store.begin_load("cesp");
        let second = store.begin_load("cesp");
        assert!(store.complete(second, Ok(vec![item("new")])));
        assert!(!store.complete(first, Ok(vec![item("old")])));
        assert_eq!(names(&store), vec!["item new"]);
    }

    #[test]
    fn test_failure_keeps_previous_records() {
        let mut store = RecordListStore::new();
        let t = store.begin_load("in");
        store.complete(t, Ok(vec![item("1"), item("2")]));

        let t = store.begin_load("in");
        store.complete(t, Err(AppError::Server { status: 503 }));

        assert_eq!(store.items().len(), 2);
        assert_eq!(store.error(), Some("Server responded with HTTP 503"));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let mut store: RecordListStore<&str, Item> = RecordListStore::new();
        let t = store.begin_load("led");
        store.complete(t, Ok(Vec::new()));
        assert!(store.is_empty_result());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_declined_delete_issues_no_request() {
        let mut store = RecordListStore::new();
        let t = store.begin_load("cp");
        store.complete(t, Ok(vec![item("1")]));

        assert!(store.request_delete(&RecordId::new("1"), false).is_none());
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.state(), &LoadState::Loaded);
    }

    #[test]
    fn test_confirmed_delete_reloads_instead_of_splicing() {
        let mut store = RecordListStore::new();
        let t = store.begin_load("cp");
        store.complete(t, Ok(vec![item("1"), item("2")]));

        let request = store.request_delete(&RecordId::new("1"), true).unwrap();
        assert_eq!(request.key, "cp");

        let reload = store.finish_delete(request, Ok(())).unwrap().unwrap();
        assert!(store.is_loading());
        // запись всё ещё видна до прихода нового списка
        assert_eq!(store.items().len(), 2);

        store.complete(reload, Ok(vec![item("2")]));
        assert_eq!(names(&store), vec!["item 2"]);
    }

    #[test]
    fn test_failed_delete_leaves_list_intact() {
        let mut store = RecordListStore::new();
        let t = store.begin_load("cp");
        store.complete(t, Ok(vec![item("1")]));

        let request = store.request_delete(&RecordId::new("1"), true).unwrap();
        let err = store
            .finish_delete(request, Err(AppError::Network("offline".into())))
            .unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(store.state(), &LoadState::Loaded);
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn test_delete_of_unknown_record_is_ignored() {
        let mut store = RecordListStore::new();
        let t = store.begin_load("cp");
        store.complete(t, Ok(vec![item("1")]));
        assert!(store.request_delete(&RecordId::new("9"), true).is_none());
    }
}
