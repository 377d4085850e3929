pub mod form_fields;
pub mod notice_bar;

pub use form_fields::{FileField, SelectField, TextAreaField, TextField};
pub use notice_bar::NoticeBar;
