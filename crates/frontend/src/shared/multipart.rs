//! Платформонезависимое описание multipart-запроса формы.
//!
//! Контроллер формы собирает `MultipartPayload`, а в `FormData`
//! он превращается только на границе HTTP (см. `api_utils`).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMethod {
    Post,
    Put,
}

impl SubmitMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitMethod::Post => "POST",
            SubmitMethod::Put => "PUT",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartValue<F> {
    Text(String),
    File(F),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Part<F> {
    pub name: &'static str,
    pub value: PartValue<F>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPayload<F> {
    pub method: SubmitMethod,
    pub url: String,
    pub parts: Vec<Part<F>>,
}

impl<F> MultipartPayload<F> {
    pub fn new(method: SubmitMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            parts: Vec::new(),
        }
    }

    pub fn push_text(&mut self, name: &'static str, value: impl Into<String>) {
        self.parts.push(Part {
            name,
            value: PartValue::Text(value.into()),
        });
    }

    pub fn push_file(&mut self, name: &'static str, file: F) {
        self.parts.push(Part {
            name,
            value: PartValue::File(file),
        });
    }

    pub fn has_part(&self, name: &str) -> bool {
        self.parts.iter().any(|p| p.name == name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match &p.value {
            PartValue::Text(v) if p.name == name => Some(v.as_str()),
            _ => None,
        })
    }

    pub fn file(&self, name: &str) -> Option<&F> {
        self.parts.iter().find_map(|p| match &p.value {
            PartValue::File(f) if p.name == name => Some(f),
            _ => None,
        })
    }
}
