//! Project Record Domain Module
//!
//! Записи проектов программы: одна коллекция на каждую категорию
//! (CESP, CP, LED, IN). Координаты нужны для карты, фото "до" и "после"
//! хранятся бэкендом и приходят как URL.

pub mod aggregate;
pub mod category;

pub use aggregate::ProjectRecord;
pub use category::ProjectCategory;
