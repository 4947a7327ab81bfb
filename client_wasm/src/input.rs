//! Keyboard input handling

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{is_bound_key, Game};
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, Window};

/// Forward window key events into the game's input maps
///
/// Bound keys have their default action suppressed so arrows and space do not
/// scroll the page and `/` does not open quick find.
pub fn attach_keyboard(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let down_game = game.clone();
    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let key = event.key();
        if is_bound_key(&key) {
            event.prevent_default();
        }
        down_game.borrow_mut().key_down(&key);
    });

    let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let key = event.key();
        if is_bound_key(&key) {
            event.prevent_default();
        }
        game.borrow_mut().key_up(&key);
    });

    window.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;

    // Listeners live for the lifetime of the page
    on_key_down.forget();
    on_key_up.forget();
    Ok(())
}
