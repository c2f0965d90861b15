use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::board::BoardState;
use crate::history::History;
use crate::hit;
use crate::input::DragState;
use crate::render;
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The scene changed; the host should schedule a redraw.
    RenderNeeded,
    /// The host should set the given CSS cursor on the canvas.
    SetCursor(&'static str),
}

/// Core board engine, all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
pub struct BoardCore {
    pub board: BoardState,
    pub history: History,
    pub drag: DragState,
    pub viewport: Viewport,
}

impl Default for BoardCore {
    fn default() -> Self {
        let board = BoardState::initial();
        let history = History::new(&board);
        Self {
            board,
            history,
            drag: DragState::default(),
            viewport: Viewport::default(),
        }
    }
}

impl BoardCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Viewport ---

    /// Record the current physical surface size.
    ///
    /// Dimensions are clamped to at least 1 px. Stored token positions are
    /// unaffected; only their projection changes, so resizes may interleave
    /// freely with an active drag.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    // --- Pointer events ---

    /// Pointer pressed at a physical surface coordinate.
    ///
    /// Starts a drag if a token is under the pointer; otherwise stays idle.
    pub fn on_pointer_down(&mut self, physical: Point) -> Vec<Action> {
        let Some(id) = hit::hit_test(physical, &self.board, &self.viewport) else {
            return Vec::new();
        };
        let Some(pos) = self.board.position(id) else {
            return Vec::new();
        };
        let center = self.viewport.to_physical(pos);
        self.drag = DragState::Dragging {
            id,
            grab: Point::new(physical.x - center.x, physical.y - center.y),
        };
        log::debug!("drag start: {id:?}");
        vec![Action::SetCursor("grabbing")]
    }

    /// Pointer moved. Ignored unless a drag is in progress.
    pub fn on_pointer_move(&mut self, physical: Point) -> Vec<Action> {
        let DragState::Dragging { id, grab } = self.drag else {
            return Vec::new();
        };
        let logical = self
            .viewport
            .to_logical(Point::new(physical.x - grab.x, physical.y - grab.y));
        if self.board.set_position(id, logical) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Pointer released: commit the layout as a new snapshot and go idle.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if !matches!(self.drag, DragState::Dragging { .. }) {
            return Vec::new();
        }
        self.drag = DragState::Idle;
        self.history.commit(&self.board);
        log::debug!("drag committed; undo depth {}", self.history.undo_depth());
        vec![Action::SetCursor("default")]
    }

    /// Pointer contact lost (left the window, touch interrupted). Ends the
    /// gesture exactly like a release.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    // --- History controls ---

    /// Restore the previous committed layout. Silent no-op at the initial
    /// state.
    pub fn undo(&mut self) -> Vec<Action> {
        let Some(state) = self.history.undo() else {
            return Vec::new();
        };
        self.board = state;
        log::debug!("undo; depth {}", self.history.undo_depth());
        vec![Action::RenderNeeded]
    }

    /// Re-apply the most recently undone layout. Silent no-op when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> Vec<Action> {
        let Some(state) = self.history.redo() else {
            return Vec::new();
        };
        self.board = state;
        log::debug!("redo; depth {}", self.history.undo_depth());
        vec![Action::RenderNeeded]
    }

    /// Restore the fixed starting layout and drop all history.
    pub fn reset(&mut self) -> Vec<Action> {
        self.board = BoardState::initial();
        self.history.reset(&self.board);
        self.drag = DragState::Idle;
        log::debug!("board reset");
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// Whether an undo step is available, for the host's button state.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

/// The full canvas engine. Wraps [`BoardCore`] and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: BoardCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: BoardCore::new() }
    }

    /// Resize the canvas backing store and the core viewport.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width.max(1));
        self.canvas.set_height(height.max(1));
        self.core.set_viewport(f64::from(width), f64::from(height));
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, physical: Point) -> Vec<Action> {
        self.core.on_pointer_down(physical)
    }

    pub fn on_pointer_move(&mut self, physical: Point) -> Vec<Action> {
        self.core.on_pointer_move(physical)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_pointer_cancel()
    }

    // --- Delegated history controls ---

    pub fn undo(&mut self) -> Vec<Action> {
        self.core.undo()
    }

    pub fn redo(&mut self) -> Vec<Action> {
        self.core.redo()
    }

    pub fn reset(&mut self) -> Vec<Action> {
        self.core.reset()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.core.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.core.can_redo()
    }

    // --- Render ---

    /// Draw the current board to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or any `Canvas2D` call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, &self.core.board, &self.core.viewport)
    }
}
