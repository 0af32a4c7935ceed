use crate::audio::ActiveVoices;
use crate::camera;
use crate::dispatch;
use glam::Vec2;
use piano_core::{pick_node, Command, KeyboardState, PowerIndicator, Scene, TweenSet};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the pointer handlers need, cloned into each closure.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub keyboard: Rc<RefCell<KeyboardState>>,
    pub tweens: Rc<RefCell<TweenSet>>,
    pub voices: Rc<RefCell<ActiveVoices>>,
    pub indicator: Rc<RefCell<PowerIndicator>>,
    pub audio_ctx: web::AudioContext,
    pub master_gain: web::GainNode,
}

#[inline]
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

fn run_commands(w: &InputWiring, commands: &[Command]) {
    if commands.is_empty() {
        return;
    }
    dispatch::apply_commands(
        commands,
        &mut w.scene.borrow_mut(),
        &mut w.tweens.borrow_mut(),
        &mut w.voices.borrow_mut(),
        &w.audio_ctx,
        &w.master_gain,
        &mut w.indicator.borrow_mut(),
    );
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointerup(&w, "pointerup");
    // a cancelled touch gesture must still lift the keys
    wire_pointerup(&w, "pointercancel");
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let (ro, rd) = camera::screen_to_world_ray(&w.canvas, pos.x, pos.y);
        let picked = pick_node(&w.scene.borrow(), ro, rd);
        if let Some(id) = picked {
            let mut commands = Vec::new();
            {
                let scene = w.scene.borrow();
                w.keyboard
                    .borrow_mut()
                    .handle_intersected_object(&scene, id, &mut commands);
            }
            run_commands(&w, &commands);
        }
        let _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring, event_name: &str) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut commands = Vec::new();
        w.keyboard
            .borrow_mut()
            .release_all_pressed_keys(&mut commands);
        run_commands(&w, &commands);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let _ = wnd.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
