use contracts::domain::a001_project_record::ProjectCategory;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadMode {
    #[default]
    Data,
    Image,
}

impl UploadMode {
    pub fn label(&self) -> &'static str {
        match self {
            UploadMode::Data => "Data Upload",
            UploadMode::Image => "Image Upload",
        }
    }
}

/// Состояние админки без выбранных записей (они живут в сигналах view)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminShellState {
    pub mode: UploadMode,
    pub category: ProjectCategory,
    /// Любое изменение перечитывает таблицы
    pub refresh: u32,
}

impl AdminShellState {
    /// Returns `true` if the category changed; the caller drops the edited record
    pub fn select_category(&mut self, category: ProjectCategory) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        self.bump_refresh();
        true
    }

    pub fn select_mode(&mut self, mode: UploadMode) {
        self.mode = mode;
    }

    pub fn bump_refresh(&mut self) {
        self.refresh = self.refresh.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_switch_triggers_refresh() {
        let mut shell = AdminShellState::default();
        assert!(shell.select_category(ProjectCategory::Led));
        assert_eq!(shell.category, ProjectCategory::Led);
        assert_eq!(shell.refresh, 1);
    }

    #[test]
    fn test_same_category_is_noop() {
        let mut shell = AdminShellState::default();
        assert!(!shell.select_category(ProjectCategory::Cesp));
        assert_eq!(shell.refresh, 0);
    }

    #[test]
    fn test_mode_switch_keeps_category() {
        let mut shell = AdminShellState::default();
        shell.select_category(ProjectCategory::In);
        shell.select_mode(UploadMode::Image);
        assert_eq!(shell.mode, UploadMode::Image);
        assert_eq!(shell.category, ProjectCategory::In);
    }
}
