//! In-memory surface implementation

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Indicator, Panel, ScrollTarget, Surface};
use crate::field::FieldId;

/// Everything a [`MemorySurface`] would display, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSnapshot {
    pub values: [String; FieldId::COUNT],
    pub terms: bool,
    pub errors: [Option<String>; FieldId::COUNT],
    pub indicators: [Indicator; FieldId::COUNT],
    pub terms_error: Option<String>,
    pub form_visible: bool,
    pub success_visible: bool,
    /// Scroll requests, oldest first.
    pub scrolls: Vec<ScrollTarget>,
}

impl Default for SurfaceSnapshot {
    fn default() -> Self {
        Self {
            values: Default::default(),
            terms: false,
            errors: Default::default(),
            indicators: Default::default(),
            terms_error: None,
            form_visible: true,
            success_visible: false,
            scrolls: Vec::new(),
        }
    }
}

impl SurfaceSnapshot {
    pub fn value(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors[field.index()].as_deref()
    }

    pub fn indicator(&self, field: FieldId) -> Indicator {
        self.indicators[field.index()]
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        match panel {
            Panel::Form => self.form_visible,
            Panel::Success => self.success_visible,
        }
    }
}

/// A headless surface that keeps all page state in memory.
///
/// Starts with empty fields, the terms unchecked, the form shown and the
/// success panel hidden.
///
/// # Example
///
/// ```
/// use formcheck::FieldId;
/// use formcheck::surface::{MemorySurface, Surface};
///
/// let surface = MemorySurface::new();
/// surface.set_value(FieldId::Email, "a@b.co");
/// assert_eq!(surface.read_value(FieldId::Email), "a@b.co");
/// ```
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: RwLock<SurfaceSnapshot>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, SurfaceSnapshot> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SurfaceSnapshot> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Simulate typing into a field.
    pub fn set_value(&self, field: FieldId, value: impl Into<String>) {
        self.write().values[field.index()] = value.into();
    }

    /// Simulate ticking or clearing the terms checkbox.
    pub fn set_terms(&self, accepted: bool) {
        self.write().terms = accepted;
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.read().clone()
    }

    pub fn error(&self, field: FieldId) -> Option<String> {
        self.read().errors[field.index()].clone()
    }

    pub fn indicator(&self, field: FieldId) -> Indicator {
        self.read().indicator(field)
    }

    pub fn terms_error(&self) -> Option<String> {
        self.read().terms_error.clone()
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.read().is_visible(panel)
    }

    /// Most recent scroll request.
    pub fn last_scroll(&self) -> Option<ScrollTarget> {
        self.read().scrolls.last().copied()
    }

    /// Forget recorded scroll requests.
    pub fn clear_scrolls(&self) {
        self.write().scrolls.clear();
    }
}

impl Surface for MemorySurface {
    fn read_value(&self, field: FieldId) -> String {
        self.read().values[field.index()].clone()
    }

    fn terms_accepted(&self) -> bool {
        self.read().terms
    }

    fn set_error(&self, field: FieldId, message: Option<&str>) {
        self.write().errors[field.index()] = message.map(str::to_string);
    }

    fn set_indicator(&self, field: FieldId, indicator: Indicator) {
        self.write().indicators[field.index()] = indicator;
    }

    fn set_terms_error(&self, message: Option<&str>) {
        self.write().terms_error = message.map(str::to_string);
    }

    fn show_panel(&self, panel: Panel) {
        let mut state = self.write();
        match panel {
            Panel::Form => state.form_visible = true,
            Panel::Success => state.success_visible = true,
        }
    }

    fn hide_panel(&self, panel: Panel) {
        let mut state = self.write();
        match panel {
            Panel::Form => state.form_visible = false,
            Panel::Success => state.success_visible = false,
        }
    }

    fn scroll_into_view(&self, target: ScrollTarget) {
        self.write().scrolls.push(target);
    }

    fn reset_inputs(&self) {
        let mut state = self.write();
        state.values = Default::default();
        state.terms = false;
    }
}
