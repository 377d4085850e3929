//! Жизненный цикл формы "создать или редактировать" с загрузкой файлов.
//!
//! Общий для всех экранов загрузки (записи проектов, галерея):
//!
//! ```text
//! Blank ──seed(Some)──▶ Editing ──submit──▶ Submitting ──ok──▶ Blank
//!   ▲                      │                    │
//!   └──────seed(None)──────┘                    └──err──▶ previous (draft kept)
//! ```
//!
//! Пока идёт отправка, правки черновика и повторный submit отклоняются.

use crate::shared::error::AppError;
use crate::shared::multipart::{MultipartPayload, SubmitMethod};
use contracts::domain::common::{AggregateId, PhotoField, RecordId};
use thiserror::Error;

/// Черновик формы, связанный со своей записью-источником
pub trait FormDraft: Sized {
    /// Запись, которой заполняется форма при редактировании
    type Seed;
    /// Платформенный дескриптор файла
    type File: Clone;

    fn blank() -> Self;

    fn from_seed(seed: &Self::Seed) -> Self;

    fn seed_id(seed: &Self::Seed) -> RecordId;

    /// Returns `false` for an unknown field name
    fn set_field(&mut self, name: &str, value: String) -> bool;

    /// Returns `false` for an unknown photo field name
    fn set_file(&mut self, name: &str, file: Self::File) -> bool;

    fn validate(&self) -> Result<(), String>;

    /// Все скалярные поля в порядке отправки
    fn scalar_fields(&self) -> Vec<(&'static str, String)>;

    fn photo_fields(&self) -> Vec<(&'static str, &PhotoField<Self::File>)>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Blank,
    Editing { seed_id: RecordId },
    /// `seed_id` определяет и метод запроса, и состояние для возврата при ошибке
    Submitting { seed_id: Option<RecordId> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("A submission is already in progress")]
    InFlight,
    #[error("{0}")]
    Invalid(String),
}

/// Отправка, выданная контроллером; результат сопоставляется по `id`
#[derive(Debug, Clone)]
pub struct SubmitTicket<F> {
    pub id: u64,
    pub payload: MultipartPayload<F>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Форма вернулась в Blank; владелец должен обновить список
    Saved { updated: bool },
    /// Черновик сохранён для повторной попытки
    Failed(AppError),
}

#[derive(Debug, Clone)]
pub struct FormLifecycle<D> {
    state: FormState,
    draft: D,
    collection_url: String,
    submission: u64,
    file_inputs_generation: u32,
}

impl<D: FormDraft> FormLifecycle<D> {
    pub fn new(collection_url: impl Into<String>) -> Self {
        Self {
            state: FormState::Blank,
            draft: D::blank(),
            collection_url: collection_url.into(),
            submission: 0,
            file_inputs_generation: 0,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting { .. })
    }

    pub fn is_editing(&self) -> bool {
        match &self.state {
            FormState::Editing { .. } => true,
            FormState::Submitting { seed_id } => seed_id.is_some(),
            FormState::Blank => false,
        }
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        match &self.state {
            FormState::Editing { seed_id } => Some(seed_id),
            FormState::Submitting { seed_id } => seed_id.as_ref(),
            FormState::Blank => None,
        }
    }

    /// Счётчик для сброса нативных `<input type="file">`: view пересоздаёт
    /// их при каждом изменении, чтобы выбранный файл не "залипал"
    pub fn file_inputs_generation(&self) -> u32 {
        self.file_inputs_generation
    }

    /// Смена коллекции (например, при переключении категории)
    pub fn set_collection_url(&mut self, url: impl Into<String>) {
        self.collection_url = url.into();
    }

    /// Внешняя "выбранная запись": `Some` переводит в Editing, `None` в Blank.
    ///
    /// Returns `false` when a new seed arrives during a submission; clearing
    /// is always allowed and makes the in-flight result stale.
    pub fn seed(&mut self, seed: Option<&D::Seed>) -> bool {
        match seed {
            Some(_) if self.is_submitting() => {
                log::warn!("form: seed ignored while a submission is in flight");
                false
            }
            Some(record) => {
                self.draft = D::from_seed(record);
                self.state = FormState::Editing {
                    seed_id: D::seed_id(record),
                };
                self.file_inputs_generation = self.file_inputs_generation.wrapping_add(1);
                true
            }
            None => {
                self.reset();
                true
            }
        }
    }

    pub fn cancel(&mut self) {
        self.seed(None);
    }

    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        if self.is_submitting() {
            return false;
        }
        let known = self.draft.set_field(name, value);
        if !known {
            log::warn!("form: unknown field '{}'", name);
        }
        known
    }

    /// Новый файл всегда заменяет значение поля на `PendingFile`
    pub fn set_file(&mut self, name: &str, file: D::File) -> bool {
        if self.is_submitting() {
            return false;
        }
        let known = self.draft.set_file(name, file);
        if !known {
            log::warn!("form: unknown photo field '{}'", name);
        }
        known
    }

    pub fn submit(&mut self) -> Result<SubmitTicket<D::File>, SubmitRejected> {
        let seed_id = match &self.state {
            FormState::Submitting { .. } => return Err(SubmitRejected::InFlight),
            FormState::Editing { seed_id } => Some(seed_id.clone()),
            FormState::Blank => None,
        };
        self.draft.validate().map_err(SubmitRejected::Invalid)?;

        let payload = self.build_payload(seed_id.as_ref());
        self.submission += 1;
        self.state = FormState::Submitting { seed_id };

        log::debug!(
            "form: submit #{} {} {}",
            self.submission,
            payload.method.as_str(),
            payload.url
        );
        Ok(SubmitTicket {
            id: self.submission,
            payload,
        })
    }

    /// Применить результат отправки. `None`, если ответ устарел
    /// (форму уже сбросили или отправили заново).
    pub fn finish_submit(
        &mut self,
        ticket_id: u64,
        result: Result<(), AppError>,
    ) -> Option<SubmitOutcome> {
        let seed_id = match &self.state {
            FormState::Submitting { seed_id } if ticket_id == self.submission => seed_id.clone(),
            _ => {
                log::warn!("form: stale submit result #{} discarded", ticket_id);
                return None;
            }
        };

        match result {
            Ok(()) => {
                self.reset();
                Some(SubmitOutcome::Saved {
                    updated: seed_id.is_some(),
                })
            }
            Err(e) => {
                log::error!("form: submit #{} failed: {}", ticket_id, e);
                self.state = match seed_id {
                    Some(seed_id) => FormState::Editing { seed_id },
                    None => FormState::Blank,
                };
                Some(SubmitOutcome::Failed(e))
            }
        }
    }

    fn reset(&mut self) {
        self.draft = D::blank();
        self.state = FormState::Blank;
        self.file_inputs_generation = self.file_inputs_generation.wrapping_add(1);
    }

    fn build_payload(&self, seed_id: Option<&RecordId>) -> MultipartPayload<D::File> {
        let mut payload = match seed_id {
            Some(id) => MultipartPayload::new(
                SubmitMethod::Put,
                format!(
                    "{}/{}",
                    self.collection_url,
                    urlencoding::encode(&id.as_string())
                ),
            ),
            None => MultipartPayload::new(SubmitMethod::Post, self.collection_url.clone()),
        };

        for (name, value) in self.draft.scalar_fields() {
            payload.push_text(name, value);
        }
        // Отсутствие поля означает "оставить как есть" на сервере
        for (name, field) in self.draft.photo_fields() {
            match field {
                PhotoField::PendingFile(file) => payload.push_file(name, file.clone()),
                PhotoField::ExistingUrl(_) | PhotoField::Empty => {}
            }
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: &'static str,
        title: &'static str,
        cover: Option<&'static str>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct NoteDraft {
        title: String,
        cover: PhotoField<&'static str>,
    }

    impl FormDraft for NoteDraft {
        type Seed = Note;
        type File = &'static str;

        fn blank() -> Self {
            Self {
                title: String::new(),
                cover: PhotoField::Empty,
            }
        }

        fn from_seed(seed: &Note) -> Self {
            Self {
                title: seed.title.to_string(),
                cover: PhotoField::from_url(seed.cover),
            }
        }

        fn seed_id(seed: &Note) -> RecordId {
            RecordId::new(seed.id)
        }

        fn set_field(&mut self, name: &str, value: String) -> bool {
            match name {
                "title" => self.title = value,
                _ => return false,
            }
            true
        }

        fn set_file(&mut self, name: &str, file: &'static str) -> bool {
            match name {
                "cover" => self.cover = PhotoField::PendingFile(file),
                _ => return false,
            }
            true
        }

        fn validate(&self) -> Result<(), String> {
            if self.title.trim().is_empty() {
                return Err("Title is required".into());
            }
            Ok(())
        }

        fn scalar_fields(&self) -> Vec<(&'static str, String)> {
            vec![("title", self.title.clone())]
        }

        fn photo_fields(&self) -> Vec<(&'static str, &PhotoField<&'static str>)> {
            vec![("cover", &self.cover)]
        }
    }

    fn note() -> Note {
        Note {
            id: "42",
            title: "Old",
            cover: Some("https://cdn/cover.jpg"),
        }
    }

    fn form() -> FormLifecycle<NoteDraft> {
        FormLifecycle::new("http://api/notes")
    }

    #[test]
    fn test_blank_submit_posts_to_collection() {
        let mut f = form();
        f.set_field("title", "New".into());
        let ticket = f.submit().unwrap();
        assert_eq!(ticket.payload.method, SubmitMethod::Post);
        assert_eq!(ticket.payload.url, "http://api/notes");
        assert_eq!(ticket.payload.text("title"), Some("New"));
        assert!(!ticket.payload.has_part("cover"));
    }

    #[test]
    fn test_seed_copies_fields_and_existing_url() {
        let mut f = form();
        assert!(f.seed(Some(&note())));
        assert_eq!(
            f.state(),
            &FormState::Editing {
                seed_id: RecordId::new("42")
            }
        );
        assert_eq!(f.draft().title, "Old");
        assert_eq!(f.draft().cover.existing_url(), Some("https://cdn/cover.jpg"));
    }

    #[test]
    fn test_unchanged_photo_is_omitted_from_put() {
        let mut f = form();
        f.seed(Some(&note()));
        f.set_field("title", "Renamed".into());

        let ticket = f.submit().unwrap();
        assert_eq!(ticket.payload.method, SubmitMethod::Put);
        assert_eq!(ticket.payload.url, "http://api/notes/42");
        assert_eq!(ticket.payload.text("title"), Some("Renamed"));
        assert!(!ticket.payload.has_part("cover"));
    }

    #[test]
    fn test_pending_file_is_sent() {
        let mut f = form();
        f.seed(Some(&note()));
        f.set_file("cover", "new.jpg");
        let ticket = f.submit().unwrap();
        assert_eq!(ticket.payload.file("cover"), Some(&"new.jpg"));
    }

    #[test]
    fn test_second_submit_is_rejected_while_in_flight() {
        let mut f = form();
        f.set_field("title", "A".into());
        let first = f.submit().unwrap();
        assert!(f.is_submitting());
        assert_eq!(f.submit().unwrap_err(), SubmitRejected::InFlight);
        assert!(f.finish_submit(first.id, Ok(())).is_some());
    }

    #[test]
    fn test_edits_are_rejected_while_submitting() {
        let mut f = form();
        f.set_field("title", "A".into());
        f.submit().unwrap();
        assert!(!f.set_field("title", "B".into()));
        assert!(!f.set_file("cover", "x.jpg"));
        assert!(!f.seed(Some(&note())));
        assert_eq!(f.draft().title, "A");
    }

    #[test]
    fn test_success_resets_to_blank_and_clears_file_inputs() {
        let mut f = form();
        f.seed(Some(&note()));
        f.set_file("cover", "new.jpg");
        let generation = f.file_inputs_generation();
        let ticket = f.submit().unwrap();

        let outcome = f.finish_submit(ticket.id, Ok(()));
        assert_eq!(outcome, Some(SubmitOutcome::Saved { updated: true }));
        assert_eq!(f.state(), &FormState::Blank);
        assert_eq!(f.draft(), &NoteDraft::blank());
        assert_ne!(f.file_inputs_generation(), generation);
    }

    #[test]
    fn test_failure_returns_to_previous_state_and_keeps_draft() {
        let mut f = form();
        f.seed(Some(&note()));
        f.set_field("title", "Typed by hand".into());
        let ticket = f.submit().unwrap();

        let outcome = f.finish_submit(ticket.id, Err(AppError::Server { status: 500 }));
        assert_eq!(
            outcome,
            Some(SubmitOutcome::Failed(AppError::Server { status: 500 }))
        );
        assert_eq!(
            f.state(),
            &FormState::Editing {
                seed_id: RecordId::new("42")
            }
        );
        assert_eq!(f.draft().title, "Typed by hand");

        // повтор без повторного ввода
        let retry = f.submit().unwrap();
        assert_eq!(retry.payload.text("title"), Some("Typed by hand"));
    }

    #[test]
    fn test_failure_on_create_returns_to_blank_state() {
        let mut f = form();
        f.set_field("title", "Draft".into());
        let ticket = f.submit().unwrap();
        f.finish_submit(ticket.id, Err(AppError::Network("offline".into())));
        assert_eq!(f.state(), &FormState::Blank);
        assert_eq!(f.draft().title, "Draft");
    }

    #[test]
    fn test_result_after_cancel_is_stale() {
        let mut f = form();
        f.set_field("title", "A".into());
        let ticket = f.submit().unwrap();
        f.cancel();
        assert_eq!(f.finish_submit(ticket.id, Ok(())), None);
        assert_eq!(f.state(), &FormState::Blank);
    }

    #[test]
    fn test_invalid_draft_is_not_submitted() {
        let mut f = form();
        let err = f.submit().unwrap_err();
        assert_eq!(err, SubmitRejected::Invalid("Title is required".into()));
        assert_eq!(f.state(), &FormState::Blank);
    }

    #[test]
    fn test_unknown_field_is_reported() {
        let mut f = form();
        assert!(!f.set_field("colour", "red".into()));
        assert!(!f.set_file("avatar", "a.png"));
    }

    #[test]
    fn test_put_url_encodes_id() {
        let mut f = form();
        f.seed(Some(&Note {
            id: "a b/c",
            title: "T",
            cover: None,
        }));
        let ticket = f.submit().unwrap();
        assert_eq!(ticket.payload.url, "http://api/notes/a%20b%2Fc");
    }

    #[test]
    fn test_editing_id_follows_seed() {
        let mut f = form();
        assert!(f.editing_id().is_none());
        f.seed(Some(&note()));
        assert_eq!(f.editing_id(), Some(&RecordId::new("42")));
        let _ticket = f.submit().unwrap();
        assert_eq!(f.editing_id(), Some(&RecordId::new("42")));
    }
}
