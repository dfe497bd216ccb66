use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::GridColors;
use crate::error::{GlyphGridError, Result};
use crate::render::colors::fade;
use crate::render::frame::{CellRenderData, FrameData};
use crate::types::Rect;

/// Opacity of a glyph left behind in its cell while it is dragged.
const DRAG_SOURCE_ALPHA: f64 = 0.35;
/// Opacity of the ghost following the pointer.
const GHOST_ALPHA: f64 = 0.8;

/// Canvas 2D renderer for the glyph grid.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Logical size
    width: f32,
    height: f32,
    dpr: f32,
}

impl CanvasRenderer {
    /// Create a new Canvas renderer from an HtmlCanvasElement
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| GlyphGridError::Dom("Failed to get 2d context".into()))?
            .ok_or_else(|| GlyphGridError::Dom("No 2d context available".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GlyphGridError::Dom("Failed to cast to CanvasRenderingContext2d".into()))?;

        Ok(Self {
            canvas,
            ctx,
            width: 0.0,
            height: 0.0,
            dpr: 1.0,
        })
    }

    /// Size the backing store for `dpr` and the CSS box to the logical size.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.canvas.set_width((self.width * self.dpr).round().max(1.0) as u32);
        self.canvas.set_height((self.height * self.dpr).round().max(1.0) as u32);
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", self.width));
        let _ = style.set_property("height", &format!("{}px", self.height));
    }

    /// Helper to get crisp pixel position for 1px lines
    fn crisp(x: f64) -> f64 {
        x.floor() + 0.5
    }

    fn fill_rect(&self, rect: &Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            f64::from(rect.left),
            f64::from(rect.top),
            f64::from(rect.width()),
            f64::from(rect.height()),
        );
    }

    fn draw_char(&self, rect: &Rect, ch: char, color: &str) -> Result<()> {
        let mut buf = [0u8; 4];
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_text(
                ch.encode_utf8(&mut buf),
                f64::from((rect.left + rect.right) / 2.0),
                f64::from((rect.top + rect.bottom) / 2.0),
            )
            .map_err(|_| GlyphGridError::Dom("fill_text failed".into()))
    }

    /// Paint one frame.
    pub fn render(&mut self, frame: &FrameData, font: &str, colors: &GridColors) -> Result<()> {
        let ctx = &self.ctx;
        ctx.reset_transform()
            .map_err(|_| GlyphGridError::Dom("reset_transform failed".into()))?;
        ctx.scale(f64::from(self.dpr), f64::from(self.dpr))
            .map_err(|_| GlyphGridError::Dom("scale failed".into()))?;
        ctx.clear_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        self.fill_rect(
            &Rect::new(0.0, 0.0, self.width, self.height),
            &colors.background,
        );

        for cell in &frame.cells {
            self.render_cell_background(cell, colors);
        }
        self.render_grid_lines(frame, colors);

        ctx.set_font(font);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        for cell in &frame.cells {
            let Some(ch) = cell.ch else {
                continue;
            };
            let color = if cell.selected {
                &colors.selected_glyph
            } else {
                &colors.glyph
            };
            if cell.dragging {
                ctx.set_global_alpha(DRAG_SOURCE_ALPHA);
            }
            self.draw_char(&cell.rect, ch, color)?;
            ctx.set_global_alpha(1.0);
        }

        if !frame.ghosts.is_empty() {
            let ghost_color = fade(&colors.selected_glyph, GHOST_ALPHA)
                .unwrap_or_else(|| colors.selected_glyph.clone());
            for ghost in &frame.ghosts {
                self.draw_char(&ghost.rect, ghost.ch, &ghost_color)?;
            }
        }

        if let Some(marquee) = &frame.marquee {
            self.render_marquee(marquee, colors);
        }
        Ok(())
    }

    fn render_cell_background(&self, cell: &CellRenderData, colors: &GridColors) {
        if cell.drop_target {
            self.fill_rect(&cell.rect, &colors.drop_target);
        } else if cell.selected {
            self.fill_rect(&cell.rect, &colors.selected_fill);
        }
    }

    fn render_grid_lines(&self, frame: &FrameData, colors: &GridColors) {
        let ctx = &self.ctx;
        let cell = f64::from(frame.cell_size);
        if cell <= 0.0 {
            return;
        }
        let width = f64::from(frame.width);
        let height = f64::from(frame.height);
        ctx.set_stroke_style_str(&colors.grid_line);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        let mut x = 0.0;
        while x <= width {
            ctx.move_to(Self::crisp(x), 0.0);
            ctx.line_to(Self::crisp(x), height);
            x += cell;
        }
        let mut y = 0.0;
        while y <= height {
            ctx.move_to(0.0, Self::crisp(y));
            ctx.line_to(width, Self::crisp(y));
            y += cell;
        }
        ctx.stroke();
    }

    fn render_marquee(&self, rect: &Rect, colors: &GridColors) {
        self.fill_rect(rect, &colors.marquee_fill);
        self.ctx.set_stroke_style_str(&colors.marquee_stroke);
        self.ctx.set_line_width(1.0);
        self.ctx.stroke_rect(
            Self::crisp(f64::from(rect.left)),
            Self::crisp(f64::from(rect.top)),
            f64::from(rect.width()),
            f64::from(rect.height()),
        );
    }
}
