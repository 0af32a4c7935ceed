#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ELEMENT_ID, OVERLAY_CLOSE_ID, OVERLAY_OK_ID};
use instant::Instant;
use piano_core::{build_piano_scene, KeyboardState, PowerIndicator, TweenSet};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod dispatch;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_overlay_buttons(audio_ctx: &web::AudioContext) {
    // Dismissing the overlay is the user gesture that lets audio start.
    if let Some(doc) = dom::window_document() {
        for id in [OVERLAY_OK_ID, OVERLAY_CLOSE_ID] {
            let audio = audio_ctx.clone();
            dom::add_click_listener(&doc, id, move || {
                let _ = audio.resume();
                if let Some(d) = dom::window_document() {
                    overlay::hide(&d);
                }
            });
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("piano-web starting");

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

    let canvas_el = document
        .get_element_by_id(CANVAS_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ELEMENT_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let _ = audio_ctx.resume();
    let master_bus = match audio::build_master_bus(&audio_ctx) {
        Ok(b) => b,
        Err(()) => return Err(anyhow::anyhow!("audio graph init failed")),
    };
    wire_overlay_buttons(&audio_ctx);

    // Scene + interaction state
    let scene = Rc::new(RefCell::new(build_piano_scene()));
    let keyboard = {
        let s = scene.borrow();
        Rc::new(RefCell::new(KeyboardState::new(&s)))
    };
    let tweens = Rc::new(RefCell::new(TweenSet::new()));
    let voices = Rc::new(RefCell::new(audio::ActiveVoices::new()));
    let indicator = Rc::new(RefCell::new(PowerIndicator::Off));
    log::info!("[scene] {} nodes", scene.borrow().len());

    // Pointer handlers (down/up/cancel)
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        keyboard: keyboard.clone(),
        tweens: tweens.clone(),
        voices: voices.clone(),
        indicator: indicator.clone(),
        audio_ctx: audio_ctx.clone(),
        master_gain: master_bus.master_gain.clone(),
    });

    // Renderer; audio-only degradation when WebGPU is unavailable
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        keyboard,
        tweens,
        voices,
        indicator,
        canvas,
        audio_ctx,
        master_gain: master_bus.master_gain,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
