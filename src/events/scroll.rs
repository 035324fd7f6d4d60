use crate::core::{ItemGeometry, SceneSink, SceneState};
use crate::dom;
use crate::page::PageSink;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Run one scroll update against the live page: read the scroll metrics and
/// card positions, advance the scene state and publish the result.
pub fn apply_scroll(scene: &Rc<RefCell<SceneState>>, sink: &Rc<RefCell<PageSink>>) {
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return;
    };
    let scroll = dom::scroll_state(&window, &document);
    let items: Vec<ItemGeometry> = sink
        .borrow()
        .cards
        .iter()
        .map(|c| dom::item_geometry(c.id, &c.element))
        .collect();

    let state = scene.borrow().clone();
    let (next, update) = state.on_scroll(&scroll, &items);
    *scene.borrow_mut() = next;
    log::debug!(
        "[scroll] fraction={:.3} visible={}/{} accumulating={}",
        update.fraction,
        update.items.iter().filter(|(_, v)| v.is_visible()).count(),
        update.items.len(),
        update.object.is_some_and(|o| o.rotation.is_accumulating())
    );
    update.publish(&mut *sink.borrow_mut());
}

pub fn wire_scroll(scene: Rc<RefCell<SceneState>>, sink: Rc<RefCell<PageSink>>) {
    dom::add_window_listener("scroll", move || apply_scroll(&scene, &sink));
}

/// Give the scene its object once the model is available.
pub fn attach_object(scene: &Rc<RefCell<SceneState>>, sink: &Rc<RefCell<PageSink>>) {
    let state = scene.borrow().clone().with_object();
    if let Some(object) = &state.object {
        log::info!(
            "[scene] object attached (scale {:.2}, rotation {:.2})",
            object.scale,
            object.rotation_y()
        );
        sink.borrow_mut().set_object_transform(object);
    }
    *scene.borrow_mut() = state;
}
