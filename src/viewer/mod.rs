//! Main GlyphGrid struct - the entry point for the browser editor.
//!
//! This module provides the WASM-exported `GlyphGrid` struct that handles:
//! - Sizing the grid to its container and rebuilding on window resize
//! - Placing the text field's contents when the submit button is pressed
//! - Pointer input (click, drag and drop, marquee) on the canvas
//! - Painting frames with Canvas 2D
//!
//! Event handlers are registered when the editor is created - no manual
//! JavaScript wiring required.

mod events;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent};

use crate::config::GridConfig;
use crate::editor::EditorSession;
use crate::gesture::GestureState;
use crate::render::FrameData;
use crate::snapshot::GridSnapshot;

#[cfg(target_arch = "wasm32")]
use crate::error::GlyphGridError;
#[cfg(target_arch = "wasm32")]
use crate::render::CanvasRenderer;

/// State shared by every event handler.
pub(crate) struct SharedState {
    pub(crate) session: EditorSession,
    pub(crate) gesture: GestureState,
    pub(crate) config: GridConfig,
    pub(crate) needs_render: bool,
    #[cfg(target_arch = "wasm32")]
    pub(crate) render_callback: Option<Function>,
    #[cfg(target_arch = "wasm32")]
    pub(crate) renderer: CanvasRenderer,
    #[cfg(target_arch = "wasm32")]
    pub(crate) container: HtmlElement,
    #[cfg(target_arch = "wasm32")]
    pub(crate) dpr: f32,
}

impl SharedState {
    pub(crate) fn frame(&self) -> FrameData {
        FrameData::build(&self.session, &self.gesture)
    }

    pub(crate) fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::from_grid(self.session.grid())
    }
}

/// The main editor struct exported to JavaScript
#[wasm_bindgen]
pub struct GlyphGrid {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    mouse_closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    event_closures: Vec<Closure<dyn FnMut(web_sys::Event)>>,

    // Non-wasm32 fields
    #[cfg(not(target_arch = "wasm32"))]
    state: SharedState,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| GlyphGridError::Dom("no document".into()).into())
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::cast_possible_truncation)]
fn device_pixel_ratio() -> f32 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio() as f32)
        .unwrap_or(1.0)
}

/// Logical size of the container element.
#[cfg(target_arch = "wasm32")]
fn container_size(container: &HtmlElement) -> (f32, f32) {
    (
        container.client_width().max(0) as f32,
        container.client_height().max(0) as f32,
    )
}

/// Pointer position relative to the canvas.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::cast_possible_truncation)]
fn event_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> crate::types::Point {
    let rect = canvas.get_bounding_client_rect();
    crate::types::Point::new(
        event.client_x() as f32 - rect.left() as f32,
        event.client_y() as f32 - rect.top() as f32,
    )
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GlyphGrid {
    /// Create an editor inside the element with id `container_id`.
    ///
    /// A canvas is appended to the container and sized to it. `config` is an
    /// optional object matching `GridConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, config: JsValue) -> Result<GlyphGrid, JsValue> {
        console_error_panic_hook::set_once();
        let config = GridConfig::from_js(config)?;
        crate::logging::init(config.log_level_filter());

        let document = document()?;
        let container = document
            .get_element_by_id(container_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| GlyphGridError::MissingElement(container_id.to_string()))?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GlyphGridError::Dom("created element is not a canvas".into()))?;
        {
            let style = canvas.style();
            let _ = style.set_property("position", "absolute");
            let _ = style.set_property("left", "0");
            let _ = style.set_property("top", "0");
            let _ = style.set_property("user-select", "none");
        }
        container.append_child(&canvas)?;

        let dpr = device_pixel_ratio();
        let (width, height) = container_size(&container);
        let mut renderer = CanvasRenderer::new(canvas.clone())?;
        renderer.resize(width, height, dpr);

        let session = EditorSession::with_container(width, height, config.cell_size);
        let gesture = GestureState::new(config.drag_threshold);

        let text_input = document
            .get_element_by_id(&config.text_input_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let submit_button = document
            .get_element_by_id(&config.submit_button_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let state = Rc::new(RefCell::new(SharedState {
            session,
            gesture,
            config,
            needs_render: true,
            render_callback: None,
            renderer,
            container,
            dpr,
        }));

        let mut mouse_closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();
        let mut event_closures: Vec<Closure<dyn FnMut(web_sys::Event)>> = Vec::new();

        // Mouse down on the canvas starts every gesture
        {
            let state = state.clone();
            let canvas_ref = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                event.prevent_default();
                let p = event_point(&canvas_ref, &event);
                Self::internal_mouse_down(&state, p, event.ctrl_key(), event.meta_key());
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
                .ok();
            mouse_closures.push(closure);
        }

        // Move and release are tracked on the document so gestures survive
        // the pointer leaving the canvas.
        {
            let state = state.clone();
            let canvas_ref = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let p = event_point(&canvas_ref, &event);
                Self::internal_mouse_move(&state, p);
            }) as Box<dyn FnMut(MouseEvent)>);
            document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
                .ok();
            mouse_closures.push(closure);
        }
        {
            let state = state.clone();
            let canvas_ref = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let p = event_point(&canvas_ref, &event);
                Self::internal_mouse_up(&state, p);
            }) as Box<dyn FnMut(MouseEvent)>);
            document
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())
                .ok();
            mouse_closures.push(closure);
        }

        // Submit button places the text field's value
        match (text_input, submit_button) {
            (Some(input), Some(button)) => {
                let state = state.clone();
                let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                    event.prevent_default();
                    Self::internal_submit(&state, &input.value());
                }) as Box<dyn FnMut(MouseEvent)>);
                button
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                    .ok();
                mouse_closures.push(closure);
            }
            _ => log::warn!("text input or submit button not found; use place_text() instead"),
        }

        if let Some(window) = web_sys::window() {
            // Resize rebuilds the grid (no debounce)
            {
                let state = state.clone();
                let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                    Self::internal_resize(&state);
                }) as Box<dyn FnMut(web_sys::Event)>);
                window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                    .ok();
                event_closures.push(closure);
            }
            // Losing focus mid-gesture means the release will never arrive
            {
                let state = state.clone();
                let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                    Self::internal_cancel(&state);
                }) as Box<dyn FnMut(web_sys::Event)>);
                window
                    .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())
                    .ok();
                event_closures.push(closure);
            }
        }

        let grid = GlyphGrid {
            state,
            mouse_closures,
            event_closures,
        };
        grid.render()?;
        Ok(grid)
    }

    /// Replace the grid contents with `text`, one character per cell.
    ///
    /// Returns the number of characters placed.
    #[wasm_bindgen]
    pub fn place_text(&mut self, text: &str) -> Result<usize, JsValue> {
        let placed = self.state.borrow_mut().handle_submit(text);
        self.render()?;
        Ok(placed)
    }

    /// Re-measure the container and rebuild the grid (clears all characters).
    #[wasm_bindgen]
    pub fn rebuild(&mut self) {
        Self::internal_resize(&self.state);
    }

    /// Clear every selection.
    #[wasm_bindgen]
    pub fn clear_selection(&mut self) -> Result<(), JsValue> {
        {
            let mut s = self.state.borrow_mut();
            s.session.clear_selection();
            s.needs_render = true;
        }
        self.render()
    }

    /// Paint the current state if anything changed.
    #[wasm_bindgen]
    pub fn render(&self) -> Result<(), JsValue> {
        let mut s = self.state.borrow_mut();
        Self::render_state(&mut s)?;
        Ok(())
    }

    /// Grid contents as a JS object (`GridSnapshot`).
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.state.borrow().snapshot();
        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Grid contents as a JSON string.
    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        Ok(self.state.borrow().snapshot().to_json()?)
    }

    /// Indices of selected cells in row-major order.
    #[wasm_bindgen]
    pub fn selected_indices(&self) -> Vec<u32> {
        self.state
            .borrow()
            .session
            .selected_indices()
            .into_iter()
            .filter_map(|i| u32::try_from(i).ok())
            .collect()
    }

    #[wasm_bindgen]
    pub fn columns(&self) -> u32 {
        self.state.borrow().session.layout().columns
    }

    #[wasm_bindgen]
    pub fn rows(&self) -> u32 {
        self.state.borrow().session.layout().rows
    }

    /// Register a JS callback to request a render on the next animation frame.
    ///
    /// Without a callback every state change is painted immediately.
    #[wasm_bindgen]
    pub fn set_render_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().render_callback = callback;
    }
}

// ============================================================================
// Non-WASM32 Implementation (for tests)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl GlyphGrid {
    /// Create an editor for a container of the given logical size.
    #[must_use]
    pub fn new_test(width: f32, height: f32, config: GridConfig) -> Self {
        let config = config.normalized();
        let session = EditorSession::with_container(width, height, config.cell_size);
        let gesture = GestureState::new(config.drag_threshold);
        GlyphGrid {
            state: SharedState {
                session,
                gesture,
                config,
                needs_render: true,
            },
        }
    }

    pub fn place_text(&mut self, text: &str) -> usize {
        self.state.handle_submit(text)
    }

    /// Container resized to `width` x `height`.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.handle_resize(width, height);
    }

    pub fn mouse_down(&mut self, x: f32, y: f32, ctrl: bool, meta: bool) {
        self.state.handle_mouse_down(crate::types::Point::new(x, y), ctrl, meta);
    }

    pub fn mouse_move(&mut self, x: f32, y: f32) {
        self.state.handle_mouse_move(crate::types::Point::new(x, y));
    }

    pub fn mouse_up(&mut self, x: f32, y: f32) {
        self.state.handle_mouse_up(crate::types::Point::new(x, y));
    }

    /// Abandon the gesture in progress (focus lost).
    pub fn cancel(&mut self) {
        self.state.handle_cancel();
    }

    pub fn session(&self) -> &EditorSession {
        &self.state.session
    }

    pub fn snapshot(&self) -> GridSnapshot {
        self.state.snapshot()
    }

    pub fn frame(&self) -> FrameData {
        self.state.frame()
    }

    /// Whether a repaint is pending; clears the flag.
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.state.needs_render)
    }
}
