//! Контактная форма: EmailJS-конфигурация с бэкенда и отправка письма

pub mod api;
pub mod state;
mod view;

pub use view::ContactForm;
