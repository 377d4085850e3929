//! Реактивная обёртка над `RecordListStore`: загрузка и удаление
//! через `spawn_local`, результат применяется по билету.

use super::list_store::RecordListStore;
use crate::shared::error::{AppError, Notice};
use contracts::domain::common::{AggregateRoot, RecordId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub const DELETED_MESSAGE: &str = "Item deleted successfully!";

pub struct RemoteList<K: 'static, T: 'static> {
    pub store: RwSignal<RecordListStore<K, T>>,
    pub notice: RwSignal<Option<Notice>>,
}

impl<K: 'static, T: 'static> Clone for RemoteList<K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static, T: 'static> Copy for RemoteList<K, T> {}

impl<K, T> RemoteList<K, T>
where
    K: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static,
    T: AggregateRoot + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(RecordListStore::new()),
            notice: RwSignal::new(None),
        }
    }

    pub fn items(&self) -> Signal<Vec<T>> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.items().to_vec()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.is_loading()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.error().map(str::to_string)))
    }

    pub fn is_empty_result(&self) -> Signal<bool> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.is_empty_result()))
    }

    /// Запросить список для `key`; ответ на устаревший запрос отбрасывается
    pub fn load<F, Fut>(&self, key: K, fetch: F)
    where
        F: FnOnce(K) -> Fut,
        Fut: Future<Output = Result<Vec<T>, AppError>> + 'static,
    {
        let store = self.store;
        let Some(ticket) = store.try_update(|s| s.begin_load(key)) else {
            return;
        };
        let pending = fetch(ticket.key.clone());
        spawn_local(async move {
            let result = pending.await;
            store.update(|s| {
                s.complete(ticket, result);
            });
        });
    }

    /// Удаление с последующей перезагрузкой списка.
    /// Без подтверждения пользователя запрос не отправляется.
    pub fn delete<R, RFut, F, Fut>(
        &self,
        id: &RecordId,
        confirmed: bool,
        remove: R,
        fetch: F,
        on_deleted: Callback<RecordId>,
    ) where
        R: FnOnce(K, RecordId) -> RFut + 'static,
        RFut: Future<Output = Result<(), AppError>> + 'static,
        F: FnOnce(K) -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, AppError>> + 'static,
    {
        let store = self.store;
        let notice = self.notice;
        let Some(request) = store.with_untracked(|s| s.request_delete(id, confirmed)) else {
            return;
        };

        spawn_local(async move {
            let deleted_id = request.id.clone();
            let result = remove(request.key.clone(), request.id.clone()).await;
            match store.try_update(|s| s.finish_delete(request, result)) {
                Some(Ok(reload)) => {
                    notice.set(Some(Notice::success(DELETED_MESSAGE)));
                    on_deleted.run(deleted_id);
                    if let Some(ticket) = reload {
                        let reloaded = fetch(ticket.key.clone()).await;
                        store.update(|s| {
                            s.complete(ticket, reloaded);
                        });
                    }
                }
                Some(Err(e)) => {
                    notice.set(Some(Notice::error(format!("Error deleting item: {e}"))));
                }
                None => {}
            }
        });
    }
}
