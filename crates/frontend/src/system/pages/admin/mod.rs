//! Admin Shell: демо-вход, режимы данных и изображений, выбор категории

mod state;
mod view;

pub use state::{AdminShellState, UploadMode};
pub use view::AdminPage;
