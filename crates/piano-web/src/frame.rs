use crate::audio::ActiveVoices;
use crate::camera;
use crate::dispatch;
use crate::render;
use instant::Instant;
use piano_core::{
    KeyboardState, PowerIndicator, Scene, TweenSet, INDICATOR_OFF_COLOR, INDICATOR_ON_COLOR,
    POWER_INDICATOR_NODE,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub keyboard: Rc<RefCell<KeyboardState>>,
    pub tweens: Rc<RefCell<TweenSet>>,
    pub voices: Rc<RefCell<ActiveVoices>>,
    pub indicator: Rc<RefCell<PowerIndicator>>,

    pub canvas: web::HtmlCanvasElement,
    pub audio_ctx: web::AudioContext,
    pub master_gain: web::GainNode,

    pub gpu: Option<render::GpuState<'static>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Advance animations; route completion tags back into the state
        // manager so its debounce logic can emit follow-up commands.
        let mut completed = Vec::new();
        self.tweens
            .borrow_mut()
            .step(dt_sec, &mut self.scene.borrow_mut(), &mut completed);
        if !completed.is_empty() {
            let mut commands = Vec::new();
            {
                let mut kb = self.keyboard.borrow_mut();
                for tag in completed.drain(..) {
                    kb.handle_tween_complete(tag, &mut commands);
                }
            }
            dispatch::apply_commands(
                &commands,
                &mut self.scene.borrow_mut(),
                &mut self.tweens.borrow_mut(),
                &mut self.voices.borrow_mut(),
                &self.audio_ctx,
                &self.master_gain,
                &mut self.indicator.borrow_mut(),
            );
        }

        if let Some(g) = &mut self.gpu {
            let instances = build_instances(&self.scene.borrow(), *self.indicator.borrow());
            let width = self.canvas.width();
            let height = self.canvas.height();
            g.resize_if_needed(width, height);
            let view_proj = camera::view_proj(width.max(1) as f32 / height.max(1) as f32);
            if let Err(e) = g.render(&instances, view_proj) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

fn build_instances(scene: &Scene, indicator: PowerIndicator) -> Vec<render::Instance> {
    scene
        .iter()
        .map(|(_, node)| {
            let color = if node.name == POWER_INDICATOR_NODE {
                match indicator {
                    PowerIndicator::On => INDICATOR_ON_COLOR,
                    PowerIndicator::Off => INDICATOR_OFF_COLOR,
                }
            } else {
                node.color
            };
            render::Instance {
                translate: [node.position.x, node.position.y, node.position.z, 0.0],
                scale: [
                    node.half_extents.x,
                    node.half_extents.y,
                    node.half_extents.z,
                    0.0,
                ],
                color: [color[0], color[1], color[2], 1.0],
            }
        })
        .collect()
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

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
