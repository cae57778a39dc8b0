//! Map View Component
//!
//! Wraps the AMap JS SDK. Renders one marker per geo-located activity,
//! keeps exactly one marker highlighted in sync with the timeline selection,
//! and opens at most one info window at a time.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::model::{mappable, same_activity, Activity};

/// Alternate icon used for the highlighted marker
const HIGHLIGHT_ICON_URL: &str = "https://webapi.amap.com/theme/v1.3/markers/n/mark_r.png";

/// Camera center before any activity is focused (Tokyo)
const DEFAULT_CENTER: (f64, f64) = (35.6895, 139.6917);
const DEFAULT_ZOOM: f64 = 10.0;

/// Zoom used when centering on a single activity
const FOCUS_ZOOM: f64 = 15.0;

/// Map widget synchronized with the itinerary timeline.
///
/// Activities without usable coordinates are excluded silently. The activity
/// list tears down and rebuilds all markers on change; trips carry tens of
/// activities, so no diffing is needed.
#[component]
pub fn MapView(
    #[prop(into)] activities: Signal<Vec<Activity>>,
    #[prop(into)] highlighted: Signal<Option<Activity>>,
    #[prop(into)] on_select: Callback<Activity>,
) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let (load_failed, set_load_failed) = create_signal(false);

    let scene: Rc<RefCell<Option<MapScene>>> = Rc::new(RefCell::new(None));

    // Load the SDK and create the map once the container exists.
    {
        let scene = Rc::clone(&scene);
        create_effect(move |_| {
            let Some(div) = container.get() else { return };
            if scene.borrow().is_some() {
                return;
            }

            let scene = Rc::clone(&scene);
            spawn_local(async move {
                match sdk::load(&api::get_map_key()).await {
                    Ok(()) => {
                        let map = sdk::SdkMap::new(
                            &div,
                            &js_object(&[
                                ("zoom", DEFAULT_ZOOM.into()),
                                ("center", lng_lat(DEFAULT_CENTER.0, DEFAULT_CENTER.1).into()),
                            ]),
                        );
                        *scene.borrow_mut() = Some(MapScene {
                            map,
                            markers: Vec::new(),
                            windows: Vec::new(),
                            activities: Vec::new(),
                            handlers: Vec::new(),
                        });

                        // Pick up whatever the page has already fetched.
                        rebuild(
                            &scene,
                            &activities.get_untracked(),
                            highlighted.get_untracked().as_ref(),
                            on_select,
                        );
                    }
                    Err(e) => {
                        log::error!("map SDK failed to load: {}", e);
                        set_load_failed.set(true);
                    }
                }
            });
        });
    }

    // Full rebuild whenever the activity list changes.
    {
        let scene = Rc::clone(&scene);
        create_effect(move |_| {
            let current = activities.get();
            rebuild(&scene, &current, highlighted.get_untracked().as_ref(), on_select);
        });
    }

    // Icon and info-window synchronization on highlight changes.
    {
        let scene = Rc::clone(&scene);
        create_effect(move |_| {
            let current = highlighted.get();
            apply_highlight(&scene, current.as_ref());
        });
    }

    view! {
        <div class="relative">
            <div node_ref=container class="w-full rounded-lg" style="min-height: 500px;" />

            {move || {
                load_failed.get().then(|| view! {
                    <div class="absolute inset-0 flex items-center justify-center bg-gray-100 rounded-lg">
                        <div class="text-center">
                            <p class="text-red-500 font-semibold">"Map failed to load"</p>
                            <p class="text-gray-500 mt-2">
                                "The itinerary and expenses are still available."
                            </p>
                        </div>
                    </div>
                })
            }}
        </div>
    }
}

/// Live map objects for the current activity list. Markers, info windows,
/// click handlers, and activities are kept index-aligned.
struct MapScene {
    map: sdk::SdkMap,
    markers: Vec<sdk::Marker>,
    windows: Vec<sdk::InfoWindow>,
    activities: Vec<Activity>,
    handlers: Vec<Closure<dyn FnMut()>>,
}

/// Tear down every marker and info window, then rebuild from the activity
/// list. At most one marker ends up highlighted, with its info window open.
fn rebuild(
    scene_rc: &Rc<RefCell<Option<MapScene>>>,
    activities: &[Activity],
    highlighted: Option<&Activity>,
    on_select: Callback<Activity>,
) {
    let on_map = mappable(activities);

    let mut guard = scene_rc.borrow_mut();
    let Some(scene) = guard.as_mut() else { return };

    for marker in &scene.markers {
        scene.map.remove(marker);
    }
    for window in &scene.windows {
        window.close();
    }
    scene.markers.clear();
    scene.windows.clear();
    scene.handlers.clear();
    scene.activities = on_map.clone();

    if on_map.is_empty() {
        return;
    }

    let matched = highlighted.and_then(|h| on_map.iter().position(|a| same_activity(a, h)));
    match matched {
        Some(index) => focus_camera(&scene.map, &on_map[index]),
        None => fit_camera(&scene.map, &on_map),
    }

    for (index, activity) in on_map.iter().enumerate() {
        let Some((lat, lng)) = activity.coordinate() else { continue };

        let marker = sdk::Marker::new(&marker_options(activity, lat, lng, index, matched == Some(index)));
        let window = sdk::InfoWindow::new(&window_options(activity));

        let scene_for_click = Rc::clone(scene_rc);
        let clicked = activity.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            {
                let guard = scene_for_click.borrow();
                if let Some(scene) = guard.as_ref() {
                    for w in &scene.windows {
                        w.close();
                    }
                    if let (Some(m), Some(w)) = (scene.markers.get(index), scene.windows.get(index)) {
                        w.open(&scene.map, &m.get_position());
                    }
                }
            }
            // Borrow released before notifying the parent: the resulting
            // highlight effect re-enters the scene.
            on_select.call(clicked.clone());
        });
        marker.on("click", handler.as_ref().unchecked_ref());

        scene.map.add(&marker);
        scene.markers.push(marker);
        scene.windows.push(window);
        scene.handlers.push(handler);
    }

    if let Some(index) = matched {
        if let (Some(m), Some(w)) = (scene.markers.get(index), scene.windows.get(index)) {
            w.open(&scene.map, &m.get_position());
        }
    }
}

/// Swap icons and info windows for a highlight change without rebuilding.
///
/// An unmatched highlight, for example one left over from a previous fetch,
/// behaves the same as no highlight.
fn apply_highlight(scene_rc: &Rc<RefCell<Option<MapScene>>>, highlighted: Option<&Activity>) {
    let guard = scene_rc.borrow();
    let Some(scene) = guard.as_ref() else { return };

    let matched = highlighted.and_then(|h| scene.activities.iter().position(|a| same_activity(a, h)));

    match matched {
        Some(index) => {
            focus_camera(&scene.map, &scene.activities[index]);

            for (i, marker) in scene.markers.iter().enumerate() {
                if i == index {
                    marker.set_icon(&highlight_icon());
                } else {
                    marker.set_icon(&JsValue::UNDEFINED);
                }
            }

            for window in &scene.windows {
                window.close();
            }
            if let (Some(m), Some(w)) = (scene.markers.get(index), scene.windows.get(index)) {
                w.open(&scene.map, &m.get_position());
            }
        }
        None => {
            for marker in &scene.markers {
                marker.set_icon(&JsValue::UNDEFINED);
            }
            for window in &scene.windows {
                window.close();
            }
            fit_camera(&scene.map, &scene.activities);
        }
    }
}

/// Center and zoom on one activity
fn focus_camera(map: &sdk::SdkMap, activity: &Activity) {
    let Some((lat, lng)) = activity.coordinate() else { return };
    map.set_center(&lng_lat(lat, lng));
    map.set_zoom(FOCUS_ZOOM);
}

/// Show every activity: fixed zoom for a single marker, bounds otherwise
fn fit_camera(map: &sdk::SdkMap, activities: &[Activity]) {
    let coordinates: Vec<(f64, f64)> = activities.iter().filter_map(|a| a.coordinate()).collect();

    match coordinates.as_slice() {
        [] => {}
        [(lat, lng)] => {
            map.set_center(&lng_lat(*lat, *lng));
            map.set_zoom(FOCUS_ZOOM);
        }
        many => {
            let bounds = sdk::Bounds::new();
            for (lat, lng) in many {
                bounds.extend(&lng_lat(*lat, *lng));
            }
            map.set_bounds(&bounds);
        }
    }
}

fn marker_options(activity: &Activity, lat: f64, lng: f64, index: usize, highlighted: bool) -> JsValue {
    let mut entries = vec![
        ("position", JsValue::from(lng_lat(lat, lng))),
        ("title", JsValue::from_str(&activity.location_name)),
        (
            "label",
            js_object(&[
                ("content", JsValue::from_str(&format!("{}", index + 1))),
                ("direction", JsValue::from_str("right")),
            ]),
        ),
    ];
    if highlighted {
        entries.push(("icon", highlight_icon()));
    }
    js_object(&entries)
}

fn window_options(activity: &Activity) -> JsValue {
    let description = activity
        .description
        .as_deref()
        .map(|d| format!(r#"<p style="margin: 5px 0 0 0; color: #666; font-size: 12px;">{}</p>"#, d))
        .unwrap_or_default();

    let content = format!(
        r#"<div style="padding: 10px; min-width: 200px;">
            <h3 style="margin: 0 0 5px 0; font-size: 16px; font-weight: bold;">{}</h3>
            <p style="margin: 0; color: #666; font-size: 14px;">📍 {}</p>
            <p style="margin: 5px 0 0 0; color: #999; font-size: 12px;">🕐 {}</p>
            {}
        </div>"#,
        activity.name, activity.location_name, activity.time, description,
    );

    js_object(&[
        ("content", JsValue::from_str(&content)),
        ("offset", JsValue::from(sdk::Pixel::new(0.0, -30.0))),
    ])
}

fn highlight_icon() -> JsValue {
    sdk::Icon::new(&js_object(&[
        ("size", JsValue::from(sdk::Size::new(40.0, 40.0))),
        ("image", JsValue::from_str(HIGHLIGHT_ICON_URL)),
    ]))
    .into()
}

/// AMap positions are [lng, lat]
fn lng_lat(lat: f64, lng: f64) -> js_sys::Array {
    js_sys::Array::of2(&JsValue::from_f64(lng), &JsValue::from_f64(lat))
}

fn js_object(entries: &[(&str, JsValue)]) -> JsValue {
    let object = js_sys::Object::new();
    for (key, value) in entries {
        let _ = js_sys::Reflect::set(&object, &JsValue::from_str(key), value);
    }
    object.into()
}

/// Minimal bindings for the AMap primitives the widget consumes.
mod sdk {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = AMap, js_name = Map)]
        pub type SdkMap;

        #[wasm_bindgen(constructor, js_namespace = AMap, js_class = "Map")]
        pub fn new(container: &web_sys::HtmlDivElement, options: &JsValue) -> SdkMap;

        #[wasm_bindgen(method, js_name = setCenter)]
        pub fn set_center(this: &SdkMap, center: &js_sys::Array);

        #[wasm_bindgen(method, js_name = setZoom)]
        pub fn set_zoom(this: &SdkMap, zoom: f64);

        #[wasm_bindgen(method, js_name = setBounds)]
        pub fn set_bounds(this: &SdkMap, bounds: &Bounds);

        #[wasm_bindgen(method)]
        pub fn add(this: &SdkMap, marker: &Marker);

        #[wasm_bindgen(method)]
        pub fn remove(this: &SdkMap, marker: &Marker);

        #[wasm_bindgen(js_namespace = AMap)]
        pub type Marker;

        #[wasm_bindgen(constructor, js_namespace = AMap, js_class = "Marker")]
        pub fn new(options: &JsValue) -> Marker;

        #[wasm_bindgen(method)]
        pub fn on(this: &Marker, event: &str, handler: &js_sys::Function);

        #[wasm_bindgen(method, js_name = setIcon)]
        pub fn set_icon(this: &Marker, icon: &JsValue);

        #[wasm_bindgen(method, js_name = getPosition)]
        pub fn get_position(this: &Marker) -> JsValue;

        #[wasm_bindgen(js_namespace = AMap)]
        pub type InfoWindow;

        #[wasm_bindgen(constructor, js_namespace = AMap, js_class = "InfoWindow")]
        pub fn new(options: &JsValue) -> InfoWindow;

        #[wasm_bindgen(method)]
        pub fn open(this: &InfoWindow, map: &SdkMap, position: &JsValue);

        #[wasm_bindgen(method)]
        pub fn close(this: &InfoWindow);

        #[wasm_bindgen(js_namespace = AMap)]
        pub type Bounds;

        #[wasm_bindgen(constructor, js_namespace = AMap, js_class = "Bounds")]
        pub fn new() -> Bounds;

        #[wasm_bindgen(method)]
        pub fn extend(this: &Bounds, position: &js_sys::Array);

        #[wasm_bindgen(js_namespace = AMap)]
        pub type Icon;

        #[wasm_bindgen(constructor, js_namespace = AMap, js_class = "Icon")]
        pub fn new(options: &JsValue) -> Icon;

        #[wasm_bindgen(js_namespace = AMap)]
        pub type Size;

        #[wasm_bindgen(constructor, js_namespace = AMap, js_class = "Size")]
        pub fn new(width: f64, height: f64) -> Size;

        #[wasm_bindgen(js_namespace = AMap)]
        pub type Pixel;

        #[wasm_bindgen(constructor, js_namespace = AMap, js_class = "Pixel")]
        pub fn new(x: f64, y: f64) -> Pixel;
    }

    /// Inject the SDK script tag and wait for it. Loaded once per page
    /// lifetime; a second call resolves immediately once `AMap` exists.
    pub async fn load(key: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        if js_sys::Reflect::has(&window, &JsValue::from_str("AMap")).unwrap_or(false) {
            return Ok(());
        }

        let document = window.document().ok_or("no document")?;
        let script: web_sys::HtmlScriptElement = document
            .create_element("script")
            .map_err(|_| "failed to create script element")?
            .dyn_into()
            .map_err(|_| "failed to create script element")?;
        script.set_src(&format!(
            "https://webapi.amap.com/maps?v=2.0&key={}&plugin=AMap.Marker,AMap.InfoWindow",
            key
        ));

        let loaded = js_sys::Promise::new(&mut |resolve, reject| {
            script.set_onload(Some(&resolve));
            script.set_onerror(Some(&reject));
        });

        document
            .head()
            .ok_or("no document head")?
            .append_child(&script)
            .map_err(|_| "failed to attach script element")?;

        JsFuture::from(loaded)
            .await
            .map_err(|_| "script failed to load".to_string())?;
        Ok(())
    }
}
