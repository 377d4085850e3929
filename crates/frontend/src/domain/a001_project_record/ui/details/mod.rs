//! Форма записи проекта (создание и редактирование)
//!
//! - view_model.rs: тексты уведомлений и создание ViewModel
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::ProjectRecordForm;
pub use view_model::{create_view_model, ProjectFormViewModel};
