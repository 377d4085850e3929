/// Позиция просмотрщика. Переходы идут по кругу.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    open: Option<usize>,
}

impl Lightbox {
    pub fn current(&self) -> Option<usize> {
        self.open
    }

    /// Открыть изображение `index` из `len`; индекс вне диапазона игнорируется
    pub fn open(&mut self, index: usize, len: usize) {
        if index < len {
            self.open = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn next(&mut self, len: usize) {
        self.open = match (self.open, len) {
            (_, 0) => None,
            (Some(i), len) => Some((i + 1) % len),
            (None, _) => None,
        };
    }

    pub fn prev(&mut self, len: usize) {
        self.open = match (self.open, len) {
            (_, 0) => None,
            (Some(i), len) => Some((i + len - 1) % len),
            (None, _) => None,
        };
    }

    /// После перезагрузки списка индекс может выйти за границы
    pub fn clamp(&mut self, len: usize) {
        if self.open.is_some_and(|i| i >= len) {
            self.open = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps_around() {
        let mut lightbox = Lightbox::default();
        lightbox.open(2, 3);
        lightbox.next(3);
        assert_eq!(lightbox.current(), Some(0));
        lightbox.prev(3);
        assert_eq!(lightbox.current(), Some(2));
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let mut lightbox = Lightbox::default();
        lightbox.open(5, 3);
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn test_navigation_when_closed_stays_closed() {
        let mut lightbox = Lightbox::default();
        lightbox.next(4);
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn test_clamp_after_list_shrinks() {
        let mut lightbox = Lightbox::default();
        lightbox.open(3, 4);
        lightbox.clamp(2);
        assert_eq!(lightbox.current(), None);
    }
}
