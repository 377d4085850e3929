//! Карта проектов на Google Maps.

pub mod google;
pub mod widget;

pub use google::GoogleMapCamera;
pub use widget::{MapMarker, ProjectMap};

/// Центр карты по умолчанию (Kegalle District)
pub const DEFAULT_CENTER: (f64, f64) = (7.54542, 80.489297);
pub const DEFAULT_ZOOM: f64 = 10.0;
