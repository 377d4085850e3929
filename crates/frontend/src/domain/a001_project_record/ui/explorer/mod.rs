//! Публичный обзор категории: карточки, фильтры и карта

mod view;
mod view_model;

pub use view::ProjectExplorer;
pub use view_model::{markers_for, ExplorerState, ExplorerViewModel};
