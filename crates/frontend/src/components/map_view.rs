use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use pubg_maps_shared::models;
use pubg_maps_shared::viewport::{self, Viewport, ZoomConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

const MAP_CONTAINER_ID: &str = "map-viewer-container";
const MAP_IMAGE_ID: &str = "map-viewer-image";

const ZOOM: ZoomConfig = ZoomConfig {
    min_scale: 0.5,
    max_scale: 3.0,
    scale_step: 0.25,
};

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Get the bounding client rect of the viewer container element.
fn container_rect() -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(MAP_CONTAINER_ID)?;
    Some(element.get_bounding_client_rect())
}

/// Get the map image element, if it is in the DOM.
fn image_element() -> Option<web_sys::HtmlImageElement> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(MAP_IMAGE_ID)?;
    element.dyn_into::<web_sys::HtmlImageElement>().ok()
}

// ---------------------------------------------------------------------------
// Coordinate / input helpers (pure where possible, like the zoom math)
// ---------------------------------------------------------------------------

/// Convert container-relative coordinates to container-center-relative
/// coordinates — the convention the anchored zoom math uses, because the
/// image wrapper is centered in the container and scales about its center.
fn to_center_relative(x: f64, y: f64, container_w: f64, container_h: f64) -> (f64, f64) {
    (x - container_w / 2.0, y - container_h / 2.0)
}

/// Client coordinates → center-relative container coordinates.
fn client_to_center_relative(client_x: f64, client_y: f64, rect: &web_sys::DomRect) -> (f64, f64) {
    to_center_relative(
        client_x - rect.left(),
        client_y - rect.top(),
        rect.width(),
        rect.height(),
    )
}

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Recompute the fit-to-container base scale from the live DOM and reset the
/// user transform. Skipped (no-op) until the container is measured and the
/// image has loaded with real natural dimensions.
fn refit(mut base_scale: Signal<f64>, mut view: Signal<Viewport>) {
    let Some(rect) = container_rect() else { return };
    let Some(image) = image_element() else { return };
    if !image.complete() || image.natural_width() == 0 {
        return;
    }
    let Some(fit) = viewport::fit_scale(
        rect.width(),
        rect.height(),
        f64::from(image.natural_width()),
        f64::from(image.natural_height()),
    ) else {
        return;
    };
    base_scale.set(fit);
    view.set(Viewport::default());
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[component]
pub fn MapView(map_id: Signal<String>) -> Element {
    let map = models::find_map(&map_id.read());

    // Fit-to-container scale; user transform on top of it
    let base_scale = use_signal(|| 1.0_f64);
    let mut view = use_signal(Viewport::default);

    // Map switch: reset the transform immediately, then refit (refit also
    // runs from the image onload once the new image has dimensions).
    use_effect(move || {
        // Read the Signal inside the effect so Dioxus tracks it as a dependency
        let _id = map_id.read();
        view.set(Viewport::default());
        refit(base_scale, view);
    });

    // Window resize: refit and reset. Registered once for the app lifetime.
    use_effect(move || {
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            refit(base_scale, view);
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
        on_resize.forget();
    });

    let current = *view.read();
    let effective_scale = *base_scale.read() * current.scale;

    let wrapper_style = format!(
        "transform: translate({}px, {}px) scale({}); cursor: {};",
        current.position.0,
        current.position.1,
        effective_scale,
        if current.is_dragging() { "grabbing" } else { "grab" },
    );

    rsx! {
        div { class: "map-viewer",
            div {
                id: MAP_CONTAINER_ID,
                class: "map-viewer__container",

                onwheel: move |evt: Event<WheelData>| {
                    evt.prevent_default();

                    let Some(rect) = container_rect() else { return };
                    let zoom_in = wheel_delta_y(evt.data().delta()) < 0.0;
                    let client = evt.data().client_coordinates();
                    let cursor = client_to_center_relative(client.x, client.y, &rect);
                    let base = *base_scale.read();
                    // Write back only on change so a clamped zoom is a true
                    // no-op (no re-render)
                    let mut next = *view.read();
                    if next.wheel_zoom(&ZOOM, base, zoom_in, cursor) {
                        view.set(next);
                    }
                },

                onmousedown: move |evt: Event<MouseData>| {
                    evt.prevent_default();
                    if evt.trigger_button() != Some(MouseButton::Primary) {
                        return;
                    }
                    let client = evt.client_coordinates();
                    view.write().begin_drag((client.x, client.y));
                },

                onmousemove: move |evt: Event<MouseData>| {
                    if !view.read().is_dragging() {
                        return;
                    }
                    let client = evt.client_coordinates();
                    view.write().drag_to((client.x, client.y));
                },

                onmouseup: move |_| {
                    view.write().end_drag();
                },

                onmouseleave: move |_| {
                    // Leaving the container mid-drag must not leave the
                    // state stuck in "dragging"
                    view.write().end_drag();
                },

                ontouchstart: move |evt: Event<TouchData>| {
                    evt.prevent_default();
                    let touches = evt.data().touches();
                    if touches.len() == 1 {
                        let t = &touches[0];
                        let c = t.client_coordinates();
                        view.write().begin_drag((c.x, c.y));
                    } else if touches.len() >= 2 {
                        let c0 = touches[0].client_coordinates();
                        let c1 = touches[1].client_coordinates();
                        let d = viewport::point_distance((c0.x, c0.y), (c1.x, c1.y));
                        view.write().begin_pinch(d);
                    }
                },

                ontouchmove: move |evt: Event<TouchData>| {
                    evt.prevent_default();
                    let touches = evt.data().touches();

                    if touches.len() >= 2 {
                        let Some(rect) = container_rect() else { return };
                        let c0 = touches[0].client_coordinates();
                        let c1 = touches[1].client_coordinates();
                        let d = viewport::point_distance((c0.x, c0.y), (c1.x, c1.y));
                        let mid = viewport::midpoint((c0.x, c0.y), (c1.x, c1.y));
                        let center = client_to_center_relative(mid.0, mid.1, &rect);
                        let base = *base_scale.read();
                        view.write().pinch_to(&ZOOM, base, d, center);
                    } else if touches.len() == 1 {
                        if !view.read().is_dragging() {
                            return;
                        }
                        let c = touches[0].client_coordinates();
                        view.write().drag_to((c.x, c.y));
                    }
                },

                ontouchend: move |_| {
                    view.write().end_gesture();
                },

                ontouchcancel: move |_| {
                    view.write().end_gesture();
                },

                div {
                    class: "map-viewer__image-wrapper",
                    style: "{wrapper_style}",
                    img {
                        id: MAP_IMAGE_ID,
                        class: "map-viewer__image",
                        src: "{map.image}",
                        alt: "{map.name_en}",
                        draggable: "false",
                        onload: move |_| refit(base_scale, view),
                    }
                }
            }

            // Controls bar: step zoom, percentage readout, reset, hints
            div { class: "map-viewer__controls",
                div { class: "map-viewer__info",
                    button {
                        class: "map-viewer__zoom-btn",
                        title: "Zoom out",
                        disabled: current.at_min(&ZOOM),
                        onclick: move |_| view.write().step_zoom(&ZOOM, -1),
                        "−"
                    }
                    span { class: "map-viewer__zoom-level", "{current.zoom_percent()}%" }
                    button {
                        class: "map-viewer__zoom-btn",
                        title: "Zoom in",
                        disabled: current.at_max(&ZOOM),
                        onclick: move |_| view.write().step_zoom(&ZOOM, 1),
                        "+"
                    }
                    button {
                        class: "map-viewer__reset-btn",
                        title: "Reset view",
                        onclick: move |_| view.write().reset(),
                        "Reset"
                    }
                }
                div { class: "map-viewer__hint",
                    span { class: "map-viewer__hint-desktop", "🖱️ Scroll to zoom • drag to pan" }
                    span { class: "map-viewer__hint-mobile", "📱 Pinch to zoom • one finger to pan" }
                }
            }
        }
    }
}
