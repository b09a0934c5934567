//! Interactive map with listing placemarks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The maps script is third-party and heavy, so it is injected only when a
//! map is first mounted. Later mounts reuse the loaded `ymaps` global.
//!
//! TRADE-OFFS
//! ==========
//! Each change of the point set rebuilds the map instead of diffing
//! placemarks. Catalog filters change rarely and the map stays small.

#[cfg(test)]
#[path = "map_view_test.rs"]
mod map_view_test;

use leptos::prelude::*;
use serde_json::{Value, json};

/// Map center when there is nothing to show (central Moscow).
pub const DEFAULT_CENTER: (f64, f64) = (55.751_574, 37.573_856);

#[cfg(feature = "hydrate")]
const SCRIPT_ID: &str = "ymaps-script";
#[cfg(feature = "hydrate")]
const SCRIPT_URL: &str = "https://api-maps.yandex.ru/2.1/?apikey=&lang=ru_RU";

#[derive(Clone, Debug, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub href: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MapStatus {
    Loading,
    Ready,
    Failed,
}

/// Mean of the point coordinates, or the default center.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn center_of(points: &[MapPoint]) -> (f64, f64) {
    if points.is_empty() {
        return DEFAULT_CENTER;
    }
    let n = points.len() as f64;
    let lat = points.iter().map(|p| p.lat).sum::<f64>() / n;
    let lng = points.iter().map(|p| p.lng).sum::<f64>() / n;
    (lat, lng)
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Map constructor state.
#[must_use]
pub fn map_state(points: &[MapPoint], zoom: u8) -> Value {
    let (lat, lng) = center_of(points);
    json!({ "center": [lat, lng], "zoom": zoom, "controls": ["zoomControl", "fullscreenControl"] })
}

/// Balloon and hint for one placemark. Titles are escaped because the
/// balloon renders HTML.
#[must_use]
pub fn placemark_properties(point: &MapPoint) -> Value {
    let title = escape_html(&point.title);
    let body = point
        .href
        .as_deref()
        .map(|href| format!("<a href=\"{}\">Подробнее</a>", escape_html(href)))
        .unwrap_or_default();
    json!({ "hintContent": title, "balloonContentHeader": title, "balloonContentBody": body })
}

#[cfg(feature = "hydrate")]
mod ymaps {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ymaps, js_name = ready)]
        fn ready_thenable() -> JsValue;

        #[wasm_bindgen(js_namespace = ymaps)]
        pub type Map;

        #[wasm_bindgen(constructor, js_namespace = ymaps)]
        pub fn new(container: &web_sys::HtmlElement, state: &JsValue) -> Map;

        #[wasm_bindgen(method)]
        pub fn destroy(this: &Map);

        #[wasm_bindgen(method, getter, js_name = geoObjects)]
        pub fn geo_objects(this: &Map) -> GeoObjects;

        pub type GeoObjects;

        #[wasm_bindgen(method)]
        pub fn add(this: &GeoObjects, object: &Placemark);

        #[wasm_bindgen(js_namespace = ymaps)]
        pub type Placemark;

        #[wasm_bindgen(constructor, js_namespace = ymaps)]
        pub fn new(coordinates: &JsValue, properties: &JsValue) -> Placemark;
    }

    fn global_loaded() -> bool {
        js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("ymaps")).unwrap_or(false)
    }

    fn inject_script() -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        if document.get_element_by_id(super::SCRIPT_ID).is_some() {
            return Ok(());
        }
        let script: web_sys::HtmlScriptElement = document.create_element("script")?.dyn_into()?;
        script.set_id(super::SCRIPT_ID);
        script.set_src(super::SCRIPT_URL);
        script.set_async(true);
        let head = document.head().ok_or_else(|| JsValue::from_str("no head"))?;
        head.append_child(&script)?;
        Ok(())
    }

    /// Load the maps script once and wait for the API to be usable.
    pub async fn load() -> Result<(), JsValue> {
        if !global_loaded() {
            inject_script()?;
            let mut waited = 0;
            while !global_loaded() {
                if waited >= 100 {
                    return Err(JsValue::from_str("maps script did not load"));
                }
                gloo_timers::future::sleep(std::time::Duration::from_millis(100)).await;
                waited += 1;
            }
        }
        let ready = js_sys::Promise::resolve(&ready_thenable());
        wasm_bindgen_futures::JsFuture::from(ready).await?;
        Ok(())
    }

    pub fn json(value: &serde_json::Value) -> Result<JsValue, JsValue> {
        js_sys::JSON::parse(&value.to_string())
    }
}

#[component]
pub fn MapView(#[prop(into)] points: Signal<Vec<MapPoint>>, #[prop(default = 11)] zoom: u8) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let status = RwSignal::new(MapStatus::Loading);

    #[cfg(feature = "hydrate")]
    {
        let map = StoredValue::new_local(None::<ymaps::Map>);
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_effect = alive.clone();

        Effect::new(move || {
            let points = points.get();
            let Some(element) = container.get() else {
                return;
            };
            let alive = alive_effect.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = ymaps::load().await {
                    log::warn!("map unavailable: {e:?}");
                    status.set(MapStatus::Failed);
                    return;
                }
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                let built = (|| -> Result<ymaps::Map, wasm_bindgen::JsValue> {
                    let instance = ymaps::Map::new(&element, &ymaps::json(&map_state(&points, zoom))?);
                    for point in &points {
                        let coordinates = ymaps::json(&json!([point.lat, point.lng]))?;
                        let placemark = ymaps::Placemark::new(&coordinates, &ymaps::json(&placemark_properties(point))?);
                        instance.geo_objects().add(&placemark);
                    }
                    Ok(instance)
                })();
                match built {
                    Ok(instance) => {
                        map.update_value(|slot| {
                            if let Some(old) = slot.replace(instance) {
                                old.destroy();
                            }
                        });
                        status.set(MapStatus::Ready);
                    }
                    Err(e) => {
                        log::warn!("map build failed: {e:?}");
                        status.set(MapStatus::Failed);
                    }
                }
            });
        });

        on_cleanup(move || {
            alive.store(false, std::sync::atomic::Ordering::Relaxed);
            map.try_update_value(|slot| {
                if let Some(instance) = slot.take() {
                    instance.destroy();
                }
            });
        });
    }

    view! {
        <div class="map-view">
            <div class="map-view__canvas" node_ref=container></div>
            {move || match status.get() {
                MapStatus::Loading => Some(view! { <div class="map-view__overlay">"Загрузка карты..."</div> }),
                MapStatus::Failed => Some(view! { <div class="map-view__overlay">"Не удалось загрузить карту"</div> }),
                MapStatus::Ready => None,
            }}
        </div>
    }
}
