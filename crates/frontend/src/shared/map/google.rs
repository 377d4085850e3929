//! Привязки к Google Maps JavaScript API и загрузчик скрипта SDK.

use crate::shared::error::AppError;
use crate::shared::state::selection::MapCamera;
use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

const SCRIPT_ID: &str = "google-maps-sdk";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    pub type GoogleMap;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Map")]
    pub fn new(element: &web_sys::HtmlElement, options: &JsValue) -> Result<GoogleMap, JsValue>;

    #[wasm_bindgen(method, js_name = panTo)]
    pub fn pan_to(this: &GoogleMap, lat_lng: &JsValue);

    #[wasm_bindgen(method, js_name = setZoom)]
    pub fn set_zoom(this: &GoogleMap, zoom: f64);

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Marker)]
    pub type GoogleMarker;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Marker")]
    pub fn new(options: &JsValue) -> Result<GoogleMarker, JsValue>;

    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &GoogleMarker, map: Option<&GoogleMap>);

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &GoogleMarker, event: &str, handler: &js_sys::Function);
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
    pub map_type_control: bool,
    pub street_view_control: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkerOptions<'a> {
    pub position: LatLng,
    pub title: &'a str,
}

pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, AppError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| AppError::Decode(e.to_string()))
}

fn js_error(e: JsValue) -> AppError {
    AppError::Network(format!("{e:?}"))
}

/// `google.maps` уже есть на странице
pub fn maps_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("google"))
        .ok()
        .filter(|google| !google.is_undefined())
        .and_then(|google| js_sys::Reflect::get(&google, &JsValue::from_str("maps")).ok())
        .is_some_and(|maps| !maps.is_undefined())
}

/// Подключить SDK один раз на страницу и дождаться его загрузки
pub async fn load_maps_api(api_key: &str) -> Result<(), AppError> {
    if maps_available() {
        return Ok(());
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Network("document is not available".to_string()))?;

    let script = match document.get_element_by_id(SCRIPT_ID) {
        Some(existing) => existing,
        None => {
            let script = document.create_element("script").map_err(js_error)?;
            script.set_id(SCRIPT_ID);
            script
                .set_attribute(
                    "src",
                    &format!(
                        "https://maps.googleapis.com/maps/api/js?key={}",
                        urlencoding::encode(api_key)
                    ),
                )
                .map_err(js_error)?;
            script.set_attribute("async", "").map_err(js_error)?;
            let head = document
                .head()
                .ok_or_else(|| AppError::Network("document has no <head>".to_string()))?;
            head.append_child(&script).map_err(js_error)?;
            log::info!("map: Google Maps SDK requested");
            script
        }
    };

    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        let _ = script.add_event_listener_with_callback("load", &resolve);
        let _ = script.add_event_listener_with_callback("error", &reject);
    });
    JsFuture::from(loaded)
        .await
        .map_err(|_| AppError::Network("Google Maps script failed to load".to_string()))?;

    if maps_available() {
        Ok(())
    } else {
        Err(AppError::Decode("google.maps is missing after script load".to_string()))
    }
}

/// Камера поверх `google.maps.Map`. До инициализации карты команды
/// молча отбрасываются.
#[derive(Clone, Copy)]
pub struct GoogleMapCamera {
    map: StoredValue<Option<GoogleMap>, LocalStorage>,
}

impl GoogleMapCamera {
    pub fn new() -> Self {
        Self {
            map: StoredValue::new_local(None),
        }
    }

    pub fn attach(&self, map: GoogleMap) {
        self.map.set_value(Some(map));
    }

    pub fn with_map<R>(&self, f: impl FnOnce(&GoogleMap) -> R) -> Option<R> {
        self.map.with_value(|map| map.as_ref().map(f))
    }
}

impl Default for GoogleMapCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl MapCamera for GoogleMapCamera {
    fn pan_zoom_to(&self, lat: f64, lng: f64, zoom: f64) {
        let moved = self.with_map(|map| match to_js(&LatLng { lat, lng }) {
            Ok(position) => {
                map.pan_to(&position);
                map.set_zoom(zoom);
            }
            Err(e) => log::warn!("map: bad position {lat},{lng}: {e}"),
        });
        if moved.is_none() {
            log::debug!("map: camera command dropped, map is not ready");
        }
    }
}
