#![cfg(target_arch = "wasm32")]
use crate::constants::MODEL_URL;
use crate::core::{SceneState, PORTFOLIO_ITEMS};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod page;
mod portfolio;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-portfolio starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Portfolio cards are independent of the 3D view; either may be missing
    let cards = match portfolio::build_cards(&document, PORTFOLIO_ITEMS) {
        Ok(c) => c,
        Err(e) => {
            log::error!("[portfolio] {:?}", e);
            Vec::new()
        }
    };

    let viewport = dom::viewport(&window);
    let canvas = match dom::create_canvas(&document) {
        Ok(c) => {
            dom::size_canvas(&c, viewport);
            Some(c)
        }
        Err(e) => {
            log::error!("[scene] {:?}", e);
            None
        }
    };
    let gpu = match &canvas {
        Some(c) => frame::init_gpu(c).await,
        None => None,
    };

    let inputs = Rc::new(RefCell::new(frame::RenderInputs::new(viewport)));
    let scene = Rc::new(RefCell::new(SceneState::new(viewport)));
    let sink = Rc::new(RefCell::new(page::PageSink {
        cards: Rc::new(cards),
        canvas: canvas.clone(),
        inputs: inputs.clone(),
    }));

    // Sync camera and cards with wherever the page opened
    events::apply_scroll(&scene, &sink);
    events::wire_scroll(scene.clone(), sink.clone());
    events::wire_resize(scene.clone(), sink.clone());

    let frame_ctx = canvas.map(|canvas| {
        Rc::new(RefCell::new(frame::FrameContext {
            canvas,
            gpu,
            inputs: inputs.clone(),
        }))
    });
    if let Some(ctx) = &frame_ctx {
        frame::start_loop(ctx.clone());
    }

    let started = Instant::now();
    match assets::load_model(MODEL_URL).await {
        Ok(model) => {
            log::info!(
                "[model] {} loaded: {} primitives, {} triangles in {} ms",
                MODEL_URL,
                model.data.primitives.len(),
                model.data.triangle_count(),
                started.elapsed().as_millis()
            );
            let uploaded = frame_ctx
                .as_ref()
                .map(|ctx| ctx.borrow_mut().attach_model(&model.data, &model.images))
                .unwrap_or(false);
            if !uploaded {
                log::warn!("[model] no GPU surface, model will not be drawn");
            }
            events::attach_object(&scene, &sink);
            events::apply_scroll(&scene, &sink);
        }
        Err(e) => {
            log::error!("[model] failed to load {}: {:?}", MODEL_URL, e);
        }
    }

    Ok(())
}
