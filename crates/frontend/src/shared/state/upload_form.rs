//! Реактивная обёртка над `FormLifecycle` для экранов загрузки.
//!
//! Сам контроллер живёт в локальном сигнале (черновик держит `web_sys::File`),
//! view читает из него производные сигналы и вызывает команды.

use super::form_lifecycle::{FormDraft, FormLifecycle, SubmitOutcome, SubmitRejected};
use crate::shared::api_utils;
use crate::shared::error::Notice;
use contracts::domain::common::{PhotoField, RecordId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

/// Тексты уведомлений конкретного экрана
#[derive(Debug, Clone, Copy)]
pub struct UploadMessages {
    pub created: &'static str,
    pub updated: &'static str,
    pub failed: &'static str,
}

pub struct UploadFormViewModel<D: 'static> {
    pub form: RwSignal<FormLifecycle<D>, LocalStorage>,
    pub notice: RwSignal<Option<Notice>>,
    messages: UploadMessages,
}

impl<D: 'static> Clone for UploadFormViewModel<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: 'static> Copy for UploadFormViewModel<D> {}

impl<D> UploadFormViewModel<D>
where
    D: FormDraft<File = File> + 'static,
{
    pub fn new(collection_url: impl Into<String>, messages: UploadMessages) -> Self {
        Self {
            form: RwSignal::new_local(FormLifecycle::new(collection_url)),
            notice: RwSignal::new(None),
            messages,
        }
    }

    /// Строковое поле черновика как сигнал для input
    pub fn field(&self, getter: fn(&D) -> &String) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| getter(f.draft()).clone()))
    }

    /// URL уже сохранённого фото, если в поле не выбран новый файл
    pub fn existing_photo(&self, getter: fn(&D) -> &PhotoField<File>) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| getter(f.draft()).existing_url().map(str::to_string)))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.is_submitting()))
    }

    pub fn is_editing(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.is_editing()))
    }

    pub fn file_inputs_generation(&self) -> Signal<u32> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.file_inputs_generation()))
    }

    pub fn set_field(&self, name: &'static str, value: String) {
        self.form.update(|f| {
            f.set_field(name, value);
        });
    }

    pub fn set_file(&self, name: &'static str, file: File) {
        self.form.update(|f| {
            f.set_file(name, file);
        });
    }

    /// Выбор записи для редактирования (или `None` для новой)
    /// Уведомление о прошлой отправке остаётся до выбора другой записи.
    pub fn seed(&self, seed: Option<&D::Seed>) {
        let editing = seed.is_some();
        let accepted = self.form.try_update(|f| f.seed(seed)).unwrap_or(false);
        if accepted && editing {
            self.notice.set(None);
        } else if !accepted {
            self.notice.set(Some(Notice::error(
                "Please wait until the current upload finishes.",
            )));
        }
    }

    pub fn cancel(&self) {
        self.form.update(|f| f.cancel());
        self.notice.set(None);
    }

    /// Переключение коллекции сбрасывает форму
    pub fn switch_collection(&self, collection_url: String) {
        self.form.update(|f| {
            f.cancel();
            f.set_collection_url(collection_url);
        });
    }

    /// Запись удалена из таблицы: если она открыта в форме, форма сбрасывается
    pub fn forget(&self, id: &RecordId) {
        let editing = self
            .form
            .with_untracked(|f| f.editing_id() == Some(id) && !f.is_submitting());
        if editing {
            log::debug!("upload: edited record {} was deleted", id);
            self.form.update(|f| f.cancel());
        }
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    /// Отправить форму. `on_saved` вызывается только после успешного ответа.
    pub fn submit(&self, on_saved: Callback<()>) {
        let form = self.form;
        let notice = self.notice;
        let messages = self.messages;

        let ticket = match form.try_update(|f| f.submit()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(SubmitRejected::Invalid(message))) => {
                notice.set(Some(Notice::error(message)));
                return;
            }
            Some(Err(SubmitRejected::InFlight)) => {
                log::warn!("upload: submit ignored, previous one still in flight");
                return;
            }
            None => return,
        };
        notice.set(None);

        spawn_local(async move {
            let result = api_utils::send_multipart(&ticket.payload).await;
            let outcome = form.try_update(|f| f.finish_submit(ticket.id, result)).flatten();
            match outcome {
                Some(SubmitOutcome::Saved { updated }) => {
                    let text = if updated { messages.updated } else { messages.created };
                    log::info!("upload: {}", text);
                    notice.set(Some(Notice::success(text)));
                    on_saved.run(());
                }
                Some(SubmitOutcome::Failed(e)) => {
                    log::error!("upload: {}", e);
                    notice.set(Some(Notice::error(messages.failed)));
                }
                None => {}
            }
        });
    }
}
