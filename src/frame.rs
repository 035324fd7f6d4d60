use crate::core::model::{DecodedImage, ModelData};
use crate::core::{Camera, CameraPose, ObjectTransform, Viewport};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Latest camera and object state published by the scroll/resize handlers.
#[derive(Clone, Debug)]
pub struct RenderInputs {
    pub camera: CameraPose,
    pub aspect: f32,
    pub object: Option<ObjectTransform>,
}

impl RenderInputs {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            camera: CameraPose::initial(),
            aspect: viewport.aspect(),
            object: None,
        }
    }
}

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub inputs: Rc<RefCell<RenderInputs>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let Some(g) = &mut self.gpu else {
            return;
        };
        let inputs = self.inputs.borrow().clone();
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        let camera = Camera::from_pose(&inputs.camera, inputs.aspect);
        if let Err(e) = g.render(&camera, inputs.object.as_ref()) {
            log::error!("render error: {:?}", e);
        }
    }

    /// Upload a loaded model. Returns false when there is no GPU to draw it.
    pub fn attach_model(&mut self, data: &ModelData, images: &[Option<DecodedImage>]) -> bool {
        match &mut self.gpu {
            Some(g) => {
                g.set_model(data, images);
                true
            }
            None => false,
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
