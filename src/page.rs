use crate::core::{CameraPose, ItemVisibility, ObjectTransform, SceneSink, Viewport};
use crate::dom;
use crate::frame::RenderInputs;
use crate::portfolio::{apply_visibility, PortfolioCard};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Applies scene updates to the live page: card styles go to the DOM, camera
/// and object state go to the inputs the frame loop renders from.
pub struct PageSink {
    pub cards: Rc<Vec<PortfolioCard>>,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub inputs: Rc<RefCell<RenderInputs>>,
}

impl SceneSink for PageSink {
    fn set_camera_pose(&mut self, pose: &CameraPose) {
        self.inputs.borrow_mut().camera = *pose;
    }

    fn set_object_transform(&mut self, transform: &ObjectTransform) {
        self.inputs.borrow_mut().object = Some(*transform);
    }

    fn set_item_visibility(&mut self, id: &str, visibility: ItemVisibility) {
        if let Some(card) = self.cards.iter().find(|c| c.id == id) {
            apply_visibility(&card.element, visibility);
        }
    }

    fn set_viewport(&mut self, viewport: Viewport, aspect: f32) {
        if let Some(canvas) = &self.canvas {
            dom::size_canvas(canvas, viewport);
        }
        self.inputs.borrow_mut().aspect = aspect;
    }
}
