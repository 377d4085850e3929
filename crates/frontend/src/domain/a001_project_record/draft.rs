//! Черновик формы записи проекта.
//!
//! Все скалярные поля хранятся строками, как их ввёл пользователь;
//! координаты проверяются только при отправке.

use crate::shared::state::form_lifecycle::FormDraft;
use contracts::domain::a001_project_record::ProjectRecord;
use contracts::domain::common::{PhotoField, RecordId};
use web_sys::File;

pub const NATIONAL_ID: &str = "nationalId";
pub const NAME: &str = "name";
pub const PROJECT: &str = "project";
pub const GS_DIVISION: &str = "gsDivision";
pub const ADDRESS: &str = "address";
pub const DESCRIPTION: &str = "description";
pub const LAT: &str = "lat";
pub const LNG: &str = "lng";
pub const BEFORE_PHOTO: &str = "beforePhoto";
pub const AFTER_PHOTO: &str = "afterPhoto";

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft<F = File> {
    pub national_id: String,
    pub name: String,
    pub project: String,
    pub gs_division: String,
    pub address: String,
    pub description: String,
    pub lat: String,
    pub lng: String,
    pub before_photo: PhotoField<F>,
    pub after_photo: PhotoField<F>,
}

impl<F> Default for ProjectDraft<F> {
    fn default() -> Self {
        Self {
            national_id: String::new(),
            name: String::new(),
            project: String::new(),
            gs_division: String::new(),
            address: String::new(),
            description: String::new(),
            lat: String::new(),
            lng: String::new(),
            before_photo: PhotoField::Empty,
            after_photo: PhotoField::Empty,
        }
    }
}

/// 0.0 приходит, когда координат нет; в форме это пустое поле
fn coordinate_text(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        String::new()
    } else {
        value.to_string()
    }
}

fn parse_coordinate(label: &str, value: &str, limit: f64) -> Result<f64, String> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("{label} must be a number"))?;
    if !parsed.is_finite() || parsed.abs() > limit {
        return Err(format!("{label} must be between -{limit} and {limit}"));
    }
    Ok(parsed)
}

impl<F: Clone> FormDraft for ProjectDraft<F> {
    type Seed = ProjectRecord;
    type File = F;

    fn blank() -> Self {
        Self::default()
    }

    fn from_seed(seed: &ProjectRecord) -> Self {
        Self {
            national_id: seed.national_id.clone(),
            name: seed.name.clone(),
            project: seed.project.clone(),
            gs_division: seed.gs_division.clone(),
            address: seed.address.clone(),
            description: seed.description.clone(),
            lat: coordinate_text(seed.lat),
            lng: coordinate_text(seed.lng),
            before_photo: PhotoField::from_url(seed.before_photo.as_deref()),
            after_photo: PhotoField::from_url(seed.after_photo.as_deref()),
        }
    }

    fn seed_id(seed: &ProjectRecord) -> RecordId {
        seed.id.clone()
    }

    fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            NATIONAL_ID => &mut self.national_id,
            NAME => &mut self.name,
            PROJECT => &mut self.project,
            GS_DIVISION => &mut self.gs_division,
            ADDRESS => &mut self.address,
            DESCRIPTION => &mut self.description,
            LAT => &mut self.lat,
            LNG => &mut self.lng,
            _ => return false,
        };
        *slot = value;
        true
    }

    fn set_file(&mut self, name: &str, file: F) -> bool {
        match name {
            BEFORE_PHOTO => self.before_photo = PhotoField::PendingFile(file),
            AFTER_PHOTO => self.after_photo = PhotoField::PendingFile(file),
            _ => return false,
        }
        true
    }

    fn validate(&self) -> Result<(), String> {
        let required = [
            ("National ID", &self.national_id),
            ("Name", &self.name),
            ("Project", &self.project),
            ("GS Division", &self.gs_division),
            ("Address", &self.address),
            ("Description", &self.description),
            ("Latitude", &self.lat),
            ("Longitude", &self.lng),
        ];
        if let Some((label, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(format!("{label} is required"));
        }
        parse_coordinate("Latitude", &self.lat, 90.0)?;
        parse_coordinate("Longitude", &self.lng, 180.0)?;
        Ok(())
    }

    fn scalar_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (NATIONAL_ID, self.national_id.trim().to_string()),
            (NAME, self.name.trim().to_string()),
            (PROJECT, self.project.clone()),
            (GS_DIVISION, self.gs_division.clone()),
            (ADDRESS, self.address.trim().to_string()),
            (DESCRIPTION, self.description.trim().to_string()),
            (LAT, self.lat.trim().to_string()),
            (LNG, self.lng.trim().to_string()),
        ]
    }

    fn photo_fields(&self) -> Vec<(&'static str, &PhotoField<F>)> {
        vec![
            (BEFORE_PHOTO, &self.before_photo),
            (AFTER_PHOTO, &self.after_photo),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::multipart::SubmitMethod;
    use crate::shared::state::form_lifecycle::{FormLifecycle, FormState, SubmitOutcome};

    type Form = FormLifecycle<ProjectDraft<&'static str>>;

    fn record_42() -> ProjectRecord {
        ProjectRecord {
            id: RecordId::new("42"),
            national_id: "851234567V".into(),
            name: "Nimal Perera".into(),
            project: "Project 1".into(),
            gs_division: "Delvita".into(),
            address: "12 Temple Rd".into(),
            description: "Roof repair".into(),
            lat: 7.2,
            lng: 80.3,
            before_photo: Some("https://cdn/before.jpg".into()),
            after_photo: None,
        }
    }

    fn fill_valid(form: &mut Form) {
        for (name, value) in [
            (NATIONAL_ID, "900000000V"),
            (NAME, "Kamala"),
            (PROJECT, "Project 2"),
            (GS_DIVISION, "Katiyawa"),
            (ADDRESS, "Main St"),
            (DESCRIPTION, "Well"),
            (LAT, "7.5"),
            (LNG, "80.4"),
        ] {
            assert!(form.set_field(name, value.to_string()));
        }
    }

    #[test]
    fn test_seeded_edit_submits_put_with_all_scalars() {
        let mut form = Form::new("https://api.example.org/api/cesp");
        form.seed(Some(&record_42()));
        form.set_field(NAME, "X".to_string());

        let ticket = form.submit().unwrap();
        let payload = &ticket.payload;
        assert_eq!(payload.method, SubmitMethod::Put);
        assert_eq!(payload.url, "https://api.example.org/api/cesp/42");
        assert_eq!(payload.text(NAME), Some("X"));
        assert_eq!(payload.text(NATIONAL_ID), Some("851234567V"));
        assert_eq!(payload.text(LAT), Some("7.2"));
        assert_eq!(payload.text(LNG), Some("80.3"));
        // существующее фото не отправляется
        assert!(!payload.has_part(BEFORE_PHOTO));
        assert!(!payload.has_part(AFTER_PHOTO));
    }

    #[test]
    fn test_new_file_is_sent_as_binary_part() {
        let mut form = Form::new("/api/cp");
        form.seed(Some(&record_42()));
        assert!(form.set_file(AFTER_PHOTO, "after.png"));

        let ticket = form.submit().unwrap();
        assert_eq!(ticket.payload.file(AFTER_PHOTO), Some(&"after.png"));
        assert!(!ticket.payload.has_part(BEFORE_PHOTO));
    }

    #[test]
    fn test_blank_form_posts_to_collection() {
        let mut form = Form::new("/api/led");
        fill_valid(&mut form);
        let ticket = form.submit().unwrap();
        assert_eq!(ticket.payload.method, SubmitMethod::Post);
        assert_eq!(ticket.payload.url, "/api/led");
        assert_eq!(ticket.payload.parts.len(), 8);

        let outcome = form.finish_submit(ticket.id, Ok(()));
        assert_eq!(outcome, Some(SubmitOutcome::Saved { updated: false }));
        assert_eq!(form.state(), &FormState::Blank);
        assert_eq!(form.draft(), &ProjectDraft::default());
    }

    #[test]
    fn test_seed_copies_photos_as_existing_urls() {
        let draft = ProjectDraft::<&str>::from_seed(&record_42());
        assert_eq!(
            draft.before_photo,
            PhotoField::ExistingUrl("https://cdn/before.jpg".into())
        );
        assert_eq!(draft.after_photo, PhotoField::Empty);
    }

    #[test]
    fn test_missing_coordinates_seed_as_empty_text() {
        let mut record = record_42();
        record.lat = 0.0;
        record.lng = 0.0;
        let draft = ProjectDraft::<&str>::from_seed(&record);
        assert!(draft.lat.is_empty());
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_validation_requires_numeric_coordinates() {
        let mut form = Form::new("/api/in");
        fill_valid(&mut form);
        form.set_field(LAT, "north".to_string());
        assert!(form.submit().is_err());
        assert_eq!(form.state(), &FormState::Blank);

        form.set_field(LAT, "95".to_string());
        assert!(form.submit().is_err());

        form.set_field(LAT, " 7.1 ".to_string());
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_validation_requires_every_scalar() {
        let mut draft = ProjectDraft::<&str>::from_seed(&record_42());
        assert!(draft.validate().is_ok());
        draft.address = "   ".into();
        assert_eq!(draft.validate(), Err("Address is required".to_string()));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut draft = ProjectDraft::<&str>::default();
        assert!(!draft.set_field("colour", "red".into()));
        assert!(!draft.set_file("sidePhoto", "x.png"));
    }
}
