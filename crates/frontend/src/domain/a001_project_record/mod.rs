//! Записи проектов по категориям (CESP, CP, LED, IN)

pub mod api;
pub mod draft;
pub mod ui;

use crate::shared::state::selection::Located;
use contracts::domain::a001_project_record::ProjectRecord;

impl Located for ProjectRecord {
    fn position(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}
