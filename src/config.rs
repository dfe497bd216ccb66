//! Editor configuration.
//!
//! Every field has a default, so `{}` (or `undefined` from JavaScript) is a
//! valid config. Out-of-range values are repaired by [`GridConfig::normalized`]
//! rather than rejected.

use serde::{Deserialize, Serialize};

use crate::error::{GlyphGridError, Result};
use crate::gesture::DEFAULT_DRAG_THRESHOLD;
use crate::layout::DEFAULT_CELL_SIZE;
use crate::render::colors::{palette, parse_color};

/// Which key turns a click into a multi-select toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiSelectKey {
    #[default]
    Ctrl,
    Meta,
    CtrlOrMeta,
}

impl MultiSelectKey {
    pub fn is_held(self, ctrl: bool, meta: bool) -> bool {
        match self {
            Self::Ctrl => ctrl,
            Self::Meta => meta,
            Self::CtrlOrMeta => ctrl || meta,
        }
    }
}

/// Colors used when painting the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridColors {
    pub background: String,
    pub grid_line: String,
    pub glyph: String,
    pub selected_fill: String,
    pub selected_glyph: String,
    pub drop_target: String,
    pub marquee_stroke: String,
    pub marquee_fill: String,
}

impl Default for GridColors {
    fn default() -> Self {
        Self {
            background: palette::WHITE.to_string(),
            grid_line: palette::GRID_LINE.to_string(),
            glyph: palette::GLYPH.to_string(),
            selected_fill: palette::SELECTED_FILL.to_string(),
            selected_glyph: palette::SELECTED_GLYPH.to_string(),
            drop_target: palette::DROP_TARGET.to_string(),
            marquee_stroke: palette::MARQUEE_STROKE.to_string(),
            marquee_fill: palette::MARQUEE_FILL.to_string(),
        }
    }
}

impl GridColors {
    /// Replace unparseable colors with their defaults.
    fn normalized(self) -> Self {
        let defaults = Self::default();
        let fix = |value: String, fallback: String| parse_color(&value).unwrap_or(fallback);
        Self {
            background: fix(self.background, defaults.background),
            grid_line: fix(self.grid_line, defaults.grid_line),
            glyph: fix(self.glyph, defaults.glyph),
            selected_fill: fix(self.selected_fill, defaults.selected_fill),
            selected_glyph: fix(self.selected_glyph, defaults.selected_glyph),
            drop_target: fix(self.drop_target, defaults.drop_target),
            marquee_stroke: fix(self.marquee_stroke, defaults.marquee_stroke),
            marquee_fill: fix(self.marquee_fill, defaults.marquee_fill),
        }
    }
}

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cell edge length in logical pixels (40)
    pub cell_size: f32,
    /// Modifier for toggling selection (`ctrl`)
    pub multi_select: MultiSelectKey,
    /// Pointer travel before a press becomes a drag, in logical pixels
    pub drag_threshold: f32,
    /// Canvas font for glyphs
    pub font: String,
    pub colors: GridColors,
    /// Id of the text field whose value is placed on submit
    pub text_input_id: String,
    /// Id of the button that triggers placement
    pub submit_button_id: String,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            multi_select: MultiSelectKey::default(),
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            font: "20px monospace".to_string(),
            colors: GridColors::default(),
            text_input_id: "text-input".to_string(),
            submit_button_id: "submit-button".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl GridConfig {
    /// Decode from JSON and normalize.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GlyphGridError::Config(e.to_string()))?;
        Ok(config.normalized())
    }

    /// Decode from a JavaScript object; `undefined`/`null` give the defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn from_js(value: wasm_bindgen::JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| GlyphGridError::Config(e.to_string()))?;
        Ok(config.normalized())
    }

    /// Repair out-of-range values.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            log::warn!("cell_size {} is invalid, using {DEFAULT_CELL_SIZE}", self.cell_size);
            self.cell_size = DEFAULT_CELL_SIZE;
        }
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0.0 {
            self.drag_threshold = DEFAULT_DRAG_THRESHOLD;
        }
        if self.font.trim().is_empty() {
            self.font = Self::default().font;
        }
        self.colors = self.colors.normalized();
        self
    }

    /// Parsed `log_level`, `Info` when unrecognized.
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
