//! Canvas client for the duel
//!
//! Owns everything the browser provides: the 2D context, sprite images,
//! keyboard events and the animation-frame callback. All game rules live in
//! `game_core`.
//!
//! Note: only built for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod input;
mod logger;
mod renderer;
mod scheduler;

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, Game};
use renderer::{CanvasTarget, Sprites};
use scheduler::{AnimationFrameScheduler, FrameCallback};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Start a match on `canvas`
///
/// `config_json` may override any subset of the tuning values; `None` plays
/// with the defaults.
#[wasm_bindgen]
pub fn start_game(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let config = match config_json {
        Some(json) => Config::from_json(&json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?,
        None => Config::new(),
    };

    canvas.set_width(config.canvas_width as u32);
    canvas.set_height(config.canvas_height as u32);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let game = Game::new(config).map_err(|e| JsValue::from_str(&format!("Failed to start game: {}", e)))?;
    let game = Rc::new(RefCell::new(game));

    input::attach_keyboard(&window, game.clone())?;

    let mut target = CanvasTarget::new(&canvas, Sprites::load()?)?;
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let mut scheduler = AnimationFrameScheduler::new(window.clone(), callback.clone());
    let mut last_timestamp: Option<f64> = None;

    *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        // First callback only sets the clock
        let dt = last_timestamp.map_or(0.0, |last| ((timestamp - last) / 1000.0) as f32);
        last_timestamp = Some(timestamp);

        if let Err(err) = game.borrow_mut().run_frame(dt, &mut target, &mut scheduler) {
            log::error!("frame loop stopped: {}", err);
        }
    }));

    let first_frame = callback.borrow();
    let closure = first_frame
        .as_ref()
        .ok_or_else(|| JsValue::from_str("Frame callback missing"))?;
    window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    Ok(())
}
