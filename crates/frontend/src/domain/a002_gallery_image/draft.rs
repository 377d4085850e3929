use crate::shared::state::form_lifecycle::FormDraft;
use contracts::domain::a002_gallery_image::GalleryImage;
use contracts::domain::common::{PhotoField, RecordId};
use web_sys::File;

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const IMAGE: &str = "image";

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryDraft<F = File> {
    pub title: String,
    pub description: String,
    pub image: PhotoField<F>,
}

impl<F> Default for GalleryDraft<F> {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image: PhotoField::Empty,
        }
    }
}

impl<F: Clone> FormDraft for GalleryDraft<F> {
    type Seed = GalleryImage;
    type File = F;

    fn blank() -> Self {
        Self::default()
    }

    fn from_seed(seed: &GalleryImage) -> Self {
        Self {
            title: seed.title.clone(),
            description: seed.description.clone(),
            image: PhotoField::from_url(seed.image.as_deref()),
        }
    }

    fn seed_id(seed: &GalleryImage) -> RecordId {
        seed.id.clone()
    }

    fn set_field(&mut self, name: &str, value: String) -> bool {
        match name {
            TITLE => self.title = value,
            DESCRIPTION => self.description = value,
            _ => return false,
        }
        true
    }

    fn set_file(&mut self, name: &str, file: F) -> bool {
        if name != IMAGE {
            return false;
        }
        self.image = PhotoField::PendingFile(file);
        true
    }

    /// Изображение обязательно, пока у записи его нет
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required".to_string());
        }
        if matches!(self.image, PhotoField::Empty) {
            return Err("Please choose an image".to_string());
        }
        Ok(())
    }

    fn scalar_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (TITLE, self.title.trim().to_string()),
            (DESCRIPTION, self.description.trim().to_string()),
        ]
    }

    fn photo_fields(&self) -> Vec<(&'static str, &PhotoField<F>)> {
        vec![(IMAGE, &self.image)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::multipart::SubmitMethod;
    use crate::shared::state::form_lifecycle::FormLifecycle;

    type Form = FormLifecycle<GalleryDraft<&'static str>>;

    fn image() -> GalleryImage {
        GalleryImage {
            id: RecordId::new("img-9"),
            title: "Opening".into(),
            description: "Ceremony".into(),
            image: Some("https://cdn/open.jpg".into()),
        }
    }

    #[test]
    fn test_new_image_requires_file() {
        let mut form = Form::new("/gallery");
        form.set_field(TITLE, "Harvest".into());
        form.set_field(DESCRIPTION, "Paddy field".into());
        assert!(form.submit().is_err());

        form.set_file(IMAGE, "harvest.jpg");
        let ticket = form.submit().unwrap();
        assert_eq!(ticket.payload.method, SubmitMethod::Post);
        assert_eq!(ticket.payload.file(IMAGE), Some(&"harvest.jpg"));
    }

    #[test]
    fn test_edit_without_new_file_keeps_existing_image() {
        let mut form = Form::new("/gallery");
        form.seed(Some(&image()));
        form.set_field(TITLE, "Grand opening".into());

        let ticket = form.submit().unwrap();
        assert_eq!(ticket.payload.method, SubmitMethod::Put);
        assert_eq!(ticket.payload.url, "/gallery/img-9");
        assert_eq!(ticket.payload.text(TITLE), Some("Grand opening"));
        assert_eq!(ticket.payload.text(DESCRIPTION), Some("Ceremony"));
        assert!(!ticket.payload.has_part(IMAGE));
    }
}
