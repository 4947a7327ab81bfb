//! `requestAnimationFrame` implementation of the core's frame scheduler

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{FrameScheduler, GameError};
use wasm_bindgen::prelude::*;
use web_sys::Window;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct AnimationFrameScheduler {
    window: Window,
    callback: FrameCallback,
}

impl AnimationFrameScheduler {
    /// `callback` is filled in once the frame closure exists
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_next_frame(&mut self) -> Result<(), GameError> {
        let callback = self.callback.borrow();
        let Some(closure) = callback.as_ref() else {
            return Err(GameError::Schedule("frame callback not installed".to_owned()));
        };
        self.window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map(|_handle| ())
            .map_err(|err| GameError::Schedule(format!("{:?}", err)))
    }
}
