use crate::core::{ItemGeometry, ScrollState, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

pub fn scroll_state(window: &web::Window, document: &web::Document) -> ScrollState {
    let viewport = viewport(window);
    let document_height = document
        .body()
        .map(|b| b.scroll_height() as f32)
        .unwrap_or(viewport.height);
    ScrollState {
        scroll_y: window.scroll_y().unwrap_or(0.0) as f32,
        viewport_height: viewport.height,
        document_height,
    }
}

pub fn item_geometry(id: &'static str, element: &web::Element) -> ItemGeometry {
    let rect = element.get_bounding_client_rect();
    ItemGeometry {
        id,
        top: rect.top() as f32,
        height: rect.height() as f32,
    }
}

/// Size the canvas to the viewport in CSS pixels and its backing store to
/// the device resolution.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
    let w_px = (viewport.width as f64 * dpr) as u32;
    let h_px = (viewport.height as f64 * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let container = document
        .get_element_by_id(crate::constants::RENDER_CONTAINER_ID)
        .ok_or_else(|| {
            anyhow::anyhow!("missing #{}", crate::constants::RENDER_CONTAINER_ID)
        })?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(crate::constants::CANVAS_ID);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

#[inline]
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
