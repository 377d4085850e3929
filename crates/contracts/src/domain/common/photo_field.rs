/// Значение поля фотографии в черновике формы.
///
/// `F` is the platform file handle (`web_sys::File` in the browser).
/// Only `PendingFile` ever leaves the client as a binary part; an
/// `ExistingUrl` is kept on the server by omitting the field.
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoField<F> {
    Empty,
    ExistingUrl(String),
    PendingFile(F),
}

impl<F> Default for PhotoField<F> {
    fn default() -> Self {
        PhotoField::Empty
    }
}

impl<F> PhotoField<F> {
    /// Seed value from a stored record: blank URLs count as no photo
    pub fn from_url(url: Option<&str>) -> Self {
        match url.map(str::trim) {
            Some(u) if !u.is_empty() => PhotoField::ExistingUrl(u.to_string()),
            _ => PhotoField::Empty,
        }
    }

    /// URL для превью уже загруженного фото
    pub fn existing_url(&self) -> Option<&str> {
        match self {
            PhotoField::ExistingUrl(url) => Some(url),
            PhotoField::Empty | PhotoField::PendingFile(_) => None,
        }
    }

    pub fn pending_file(&self) -> Option<&F> {
        match self {
            PhotoField::PendingFile(file) => Some(file),
            PhotoField::Empty | PhotoField::ExistingUrl(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_url_treats_blank_as_empty() {
        assert_eq!(PhotoField::<()>::from_url(None), PhotoField::Empty);
        assert_eq!(PhotoField::<()>::from_url(Some("  ")), PhotoField::Empty);
        assert_eq!(
            PhotoField::<()>::from_url(Some("https://cdn/x.jpg")),
            PhotoField::ExistingUrl("https://cdn/x.jpg".to_string())
        );
    }

    #[test]
    fn test_only_pending_exposes_file() {
        let pending = PhotoField::PendingFile("blob");
        assert_eq!(pending.pending_file(), Some(&"blob"));
        assert!(pending.existing_url().is_none());

        let existing: PhotoField<&str> = PhotoField::ExistingUrl("u".into());
        assert!(existing.pending_file().is_none());
        assert_eq!(existing.existing_url(), Some("u"));
    }
}
