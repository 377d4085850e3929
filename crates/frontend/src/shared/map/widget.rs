use super::google::{
    load_maps_api, to_js, GoogleMap, GoogleMapCamera, GoogleMarker, LatLng, MapOptions,
    MarkerOptions,
};
use super::{DEFAULT_CENTER, DEFAULT_ZOOM};
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;
use contracts::domain::common::RecordId;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Маркер записи на карте
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub id: RecordId,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
enum MapStatus {
    Loading,
    Ready,
    Failed(String),
}

type RenderedMarker = (GoogleMarker, Closure<dyn FnMut()>);

#[component]
pub fn ProjectMap(
    #[prop(into)] markers: Signal<Vec<MapMarker>>,
    camera: GoogleMapCamera,
    #[prop(into)] on_marker_click: Callback<RecordId>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let container = NodeRef::<html::Div>::new();
    let status = RwSignal::new(MapStatus::Loading);
    let rendered = StoredValue::new_local(Vec::<RenderedMarker>::new());

    container.on_load(move |element| {
        let api_key = match config.maps_api_key() {
            Ok(key) => key.to_string(),
            Err(e) => {
                log::error!("map: {}", e);
                status.set(MapStatus::Failed(e.to_string()));
                return;
            }
        };
        spawn_local(async move {
            match create_map(&element, &api_key).await {
                Ok(map) => {
                    camera.attach(map);
                    status.set(MapStatus::Ready);
                    log::info!("map: initialized");
                }
                Err(e) => {
                    log::error!("map: initialization failed: {}", e);
                    status.set(MapStatus::Failed(e.to_string()));
                }
            }
        });
    });

    // Маркеры перестраиваются при каждом изменении видимого набора
    Effect::new(move |_| {
        let list = markers.get();
        if status.get() != MapStatus::Ready {
            return;
        }
        camera.with_map(|map| {
            rendered.update_value(|current| {
                for (marker, _) in current.drain(..) {
                    marker.set_map(None);
                }
                for item in &list {
                    match place_marker(map, item, on_marker_click) {
                        Ok(entry) => current.push(entry),
                        Err(e) => log::warn!("map: marker {} skipped: {}", item.id, e),
                    }
                }
            });
        });
    });

    view! {
        <div class="map-wrapper" style="position: relative; width: 100%; height: 400px;">
            <div node_ref=container style="width: 100%; height: 100%;"></div>
            {move || match status.get() {
                MapStatus::Loading => view! {
                    <div class="map-overlay">
                        <Spinner label="Loading map..." />
                    </div>
                }.into_any(),
                MapStatus::Failed(message) => view! {
                    <div class="map-overlay map-overlay--error">
                        "Error loading map: " {message}
                    </div>
                }.into_any(),
                MapStatus::Ready => view! { <></> }.into_any(),
            }}
        </div>
    }
}

async fn create_map(element: &web_sys::HtmlDivElement, api_key: &str) -> Result<GoogleMap, AppError> {
    load_maps_api(api_key).await?;
    let options = to_js(&MapOptions {
        center: LatLng {
            lat: DEFAULT_CENTER.0,
            lng: DEFAULT_CENTER.1,
        },
        zoom: DEFAULT_ZOOM,
        map_type_control: false,
        street_view_control: false,
    })?;
    GoogleMap::new(element, &options).map_err(|e| AppError::Network(format!("{e:?}")))
}

fn place_marker(
    map: &GoogleMap,
    item: &MapMarker,
    on_click: Callback<RecordId>,
) -> Result<RenderedMarker, AppError> {
    let options = to_js(&MarkerOptions {
        position: LatLng {
            lat: item.lat,
            lng: item.lng,
        },
        title: &item.title,
    })?;
    js_sys::Reflect::set(&options, &JsValue::from_str("map"), map.as_ref())
        .map_err(|e| AppError::Network(format!("{e:?}")))?;
    let marker = GoogleMarker::new(&options).map_err(|e| AppError::Network(format!("{e:?}")))?;

    let id = item.id.clone();
    let handler = Closure::<dyn FnMut()>::new(move || on_click.run(id.clone()));
    marker.add_listener("click", handler.as_ref().unchecked_ref());
    Ok((marker, handler))
}
