use crate::core::SceneState;
use crate::dom;
use crate::page::PageSink;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn apply_resize(scene: &Rc<RefCell<SceneState>>, sink: &Rc<RefCell<PageSink>>) {
    let Some(window) = web::window() else {
        return;
    };
    let viewport = dom::viewport(&window);
    let state = scene.borrow().clone();
    let (next, update) = state.on_resize(viewport);
    *scene.borrow_mut() = next;
    update.publish(&mut *sink.borrow_mut());
}

pub fn wire_resize(scene: Rc<RefCell<SceneState>>, sink: Rc<RefCell<PageSink>>) {
    dom::add_window_listener("resize", move || apply_resize(&scene, &sink));
}
