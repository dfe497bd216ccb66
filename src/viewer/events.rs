//! Pointer, submit and resize handlers for `GlyphGrid`.
//!
//! The `handle_*` methods on `SharedState` hold the logic and run natively.
//! The wasm32 `internal_*` helpers borrow the shared state, call them, and
//! request a repaint once the borrow is released.

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use super::SharedState;
#[cfg(target_arch = "wasm32")]
use super::{container_size, GlyphGrid};
use crate::types::Point;

impl SharedState {
    pub(crate) fn handle_mouse_down(&mut self, p: Point, ctrl: bool, meta: bool) {
        let modifier = self.config.multi_select.is_held(ctrl, meta);
        if self.gesture.pointer_down(&mut self.session, p, modifier) {
            self.needs_render = true;
        }
    }

    pub(crate) fn handle_mouse_move(&mut self, p: Point) {
        if self.gesture.pointer_move(&mut self.session, p) {
            self.needs_render = true;
        }
    }

    pub(crate) fn handle_mouse_up(&mut self, p: Point) {
        let layout = *self.session.layout();
        if self.gesture.pointer_up(&mut self.session, p, &layout) {
            self.needs_render = true;
        }
    }

    pub(crate) fn handle_cancel(&mut self) {
        if self.gesture.reset(&mut self.session) {
            self.needs_render = true;
        }
    }

    pub(crate) fn handle_resize(&mut self, width: f32, height: f32) {
        self.gesture.reset(&mut self.session);
        self.session.rebuild(width, height);
        self.needs_render = true;
    }

    /// Replace the grid text, dropping any gesture in progress. Returns the
    /// number of characters placed.
    pub(crate) fn handle_submit(&mut self, text: &str) -> usize {
        self.gesture.reset(&mut self.session);
        self.needs_render = true;
        self.session.place_text(text)
    }
}

#[cfg(target_arch = "wasm32")]
impl GlyphGrid {
    pub(crate) fn internal_mouse_down(
        state: &Rc<RefCell<SharedState>>,
        p: Point,
        ctrl: bool,
        meta: bool,
    ) {
        Self::after_event(state, |s| s.handle_mouse_down(p, ctrl, meta));
    }

    pub(crate) fn internal_mouse_move(state: &Rc<RefCell<SharedState>>, p: Point) {
        Self::after_event(state, |s| s.handle_mouse_move(p));
    }

    pub(crate) fn internal_mouse_up(state: &Rc<RefCell<SharedState>>, p: Point) {
        Self::after_event(state, |s| s.handle_mouse_up(p));
    }

    pub(crate) fn internal_cancel(state: &Rc<RefCell<SharedState>>) {
        Self::after_event(state, SharedState::handle_cancel);
    }

    pub(crate) fn internal_submit(state: &Rc<RefCell<SharedState>>, text: &str) {
        Self::after_event(state, |s| {
            s.handle_submit(text);
        });
    }

    pub(crate) fn internal_resize(state: &Rc<RefCell<SharedState>>) {
        Self::after_event(state, |s| {
            let (width, height) = container_size(&s.container);
            let dpr = s.dpr;
            s.renderer.resize(width, height, dpr);
            s.handle_resize(width, height);
        });
    }

    /// Run a handler, then paint (or ask JS to) if it changed anything.
    fn after_event(state: &Rc<RefCell<SharedState>>, handler: impl FnOnce(&mut SharedState)) {
        let callback = {
            let Ok(mut s) = state.try_borrow_mut() else {
                log::warn!("event dropped: editor state busy");
                return;
            };
            handler(&mut *s);
            if !s.needs_render {
                return;
            }
            match s.render_callback.clone() {
                Some(callback) => Some(callback),
                None => {
                    if let Err(e) = Self::render_state(&mut s) {
                        log::error!("render failed: {e}");
                    }
                    None
                }
            }
        };
        Self::invoke_render_callback(callback);
    }

    pub(crate) fn render_state(s: &mut SharedState) -> crate::error::Result<()> {
        if !s.needs_render {
            return Ok(());
        }
        let frame = s.frame();
        s.renderer.render(&frame, &s.config.font, &s.config.colors)?;
        s.needs_render = false;
        Ok(())
    }

    pub(crate) fn invoke_render_callback(callback: Option<Function>) {
        if let Some(callback) = callback {
            let _ = callback.call0(&JsValue::NULL);
        }
    }
}
