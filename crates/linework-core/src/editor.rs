//! Pointer-driven editing state machine.
//!
//! All mutation happens synchronously inside the pointer handlers; the GUI
//! collaborator feeds events in and repaints whenever a handler reports a
//! visible change.

use crate::canvas::Document;
use crate::shapes::{Circle, Color, ColorParseError, Line, LineEnd, Point, Rect, Shape, ShapeId};
use crate::storage::{Storage, StorageResult};
use crate::surface::Surface;
use serde::{Deserialize, Serialize};

/// How close (in canvas units) a click must land to a shape's anchor point
/// to select it. A convenience heuristic inherited from the reference
/// behavior, overridable per editor.
pub const DEFAULT_HIT_RADIUS: f64 = 40.0;

/// What pointer input currently does to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Dragging creates new shapes.
    #[default]
    Draw,
    /// Dragging moves existing shapes or line endpoints.
    Edit,
}

/// The shape variant the draw tool produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Line,
    Rect,
    Circle,
}

/// Pointer button identifiers, as delivered by the GUI collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// The main button: draws, selects, drags.
    Primary,
    /// The alternate button: deletes the shape under the pointer.
    Secondary,
}

/// State of the in-flight pointer interaction.
#[derive(Debug, Clone, Copy, Default)]
enum DragState {
    /// Nothing in flight; drags are no-ops.
    #[default]
    Idle,
    /// Draw mode: the anchor is set, each drag rebuilds the pending shape.
    Drawing { anchor: Point },
    /// Edit mode: dragging translates the shape by successive deltas.
    MovingShape { id: ShapeId, last: Point },
    /// Edit mode: dragging pins a line endpoint to the pointer.
    DraggingEndpoint { id: ShapeId, end: LineEnd },
}

/// The editor: canvas state plus the interaction state machine.
///
/// Owns the committed document, the single in-progress shape, and the
/// current mode/tool/color the GUI's controls mutate through commands.
#[derive(Debug)]
pub struct Editor {
    /// The committed shapes.
    pub document: Document,
    /// The shape currently being drawn, not yet committed.
    in_progress: Option<Shape>,
    drag: DragState,
    mode: Mode,
    tool: ToolKind,
    color: Color,
    hit_radius: f64,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            document: Document::new(),
            in_progress: None,
            drag: DragState::Idle,
            mode: Mode::default(),
            tool: ToolKind::default(),
            color: Color::default(),
            hit_radius: DEFAULT_HIT_RADIUS,
        }
    }
}

impl Editor {
    /// Create an editor with an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the hit-test radius.
    pub fn with_hit_radius(mut self, radius: f64) -> Self {
        self.hit_radius = radius;
        self
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current draw tool.
    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Current drawing color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The uncommitted shape being drawn, if any.
    pub fn in_progress(&self) -> Option<&Shape> {
        self.in_progress.as_ref()
    }

    /// Switch between Draw and Edit. Cancels any in-flight interaction.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.cancel_interaction();
    }

    /// Select the shape variant to draw. Cancels any in-flight interaction.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.cancel_interaction();
    }

    /// Set the drawing color directly.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Set the drawing color from the three text fields of a color input.
    /// On a parse failure the previous color is retained.
    pub fn set_color_components(
        &mut self,
        r: &str,
        g: &str,
        b: &str,
    ) -> Result<(), ColorParseError> {
        self.color = Color::from_components(r, g, b)?;
        Ok(())
    }

    /// Handle a pointer-down event. Returns true if a repaint is needed.
    pub fn pointer_pressed(&mut self, position: Point, button: PointerButton) -> bool {
        match button {
            // Delete-under-pointer works in any mode.
            PointerButton::Secondary => {
                let had_preview = self.in_progress.is_some();
                self.cancel_interaction();
                let removed = match self.document.hit_test(position, self.hit_radius) {
                    Some(id) => self.document.remove(id).is_some(),
                    None => false,
                };
                // Dropping a visible preview needs a repaint even on a miss.
                had_preview || removed
            }
            PointerButton::Primary => match self.mode {
                Mode::Draw => {
                    self.drag = DragState::Drawing { anchor: position };
                    false
                }
                Mode::Edit => {
                    self.drag = match self.document.hit_test(position, self.hit_radius) {
                        Some(id) => match self.grabbed_endpoint(id, position) {
                            Some(end) => DragState::DraggingEndpoint { id, end },
                            None => DragState::MovingShape {
                                id,
                                last: position,
                            },
                        },
                        None => DragState::Idle,
                    };
                    false
                }
            },
        }
    }

    /// Handle a pointer-drag event. Returns true if a repaint is needed.
    pub fn pointer_dragged(&mut self, position: Point) -> bool {
        match self.drag {
            DragState::Idle => false,
            DragState::Drawing { anchor } => {
                // Each drag replaces the pending shape wholesale; commit only
                // happens on release.
                self.in_progress = Some(self.build_shape(anchor, position));
                true
            }
            DragState::MovingShape { id, last } => {
                if let Some(shape) = self.document.get_mut(id) {
                    shape.translate(position.x - last.x, position.y - last.y);
                }
                self.drag = DragState::MovingShape { id, last: position };
                true
            }
            DragState::DraggingEndpoint { id, end } => {
                if let Some(Shape::Line(line)) = self.document.get_mut(id) {
                    line.set_endpoint(end, position);
                }
                true
            }
        }
    }

    /// Handle a pointer-up event. Returns true if a repaint is needed.
    pub fn pointer_released(&mut self, _position: Point) -> bool {
        match self.drag {
            DragState::Idle => false,
            DragState::Drawing { .. } => {
                self.drag = DragState::Idle;
                match self.in_progress.take() {
                    Some(shape) => {
                        self.document.add(shape);
                        true
                    }
                    // Click without drag: nothing was built, nothing commits.
                    None => false,
                }
            }
            DragState::MovingShape { .. } | DragState::DraggingEndpoint { .. } => {
                // The shape stays where the drag left it; only the grab ends.
                self.drag = DragState::Idle;
                true
            }
        }
    }

    /// Drop everything: committed shapes, pending shape, and any grab.
    pub fn clear(&mut self) {
        self.document.clear();
        self.cancel_interaction();
    }

    /// Render the canvas: committed shapes in draw order, then the
    /// in-progress shape on top.
    pub fn render(&self, surface: &mut dyn Surface) {
        for shape in self.document.iter() {
            shape.draw(surface);
        }
        if let Some(shape) = &self.in_progress {
            shape.draw(surface);
        }
    }

    /// Persist the committed shapes.
    pub fn save_to(&self, storage: &dyn Storage) -> StorageResult<()> {
        storage.save(&self.document)?;
        log::info!("saved {} shapes", self.document.len());
        Ok(())
    }

    /// Replace the committed shapes with the stored ones.
    ///
    /// On failure the current document is left untouched.
    pub fn load_from(&mut self, storage: &dyn Storage) -> StorageResult<()> {
        let document = storage.load()?;
        log::info!("loaded {} shapes", document.len());
        self.document = document;
        self.cancel_interaction();
        Ok(())
    }

    fn cancel_interaction(&mut self) {
        self.drag = DragState::Idle;
        self.in_progress = None;
    }

    /// If the hit shape is a line and the click landed near one of its
    /// endpoints, that endpoint is what the drag grabs.
    fn grabbed_endpoint(&self, id: ShapeId, position: Point) -> Option<LineEnd> {
        match self.document.get(id) {
            Some(Shape::Line(line)) => line.endpoint_near(position, self.hit_radius),
            _ => None,
        }
    }

    fn build_shape(&self, anchor: Point, current: Point) -> Shape {
        match self.tool {
            ToolKind::Line => Shape::Line(Line::new(anchor, current, self.color)),
            ToolKind::Rect => Shape::Rect(Rect::from_corners(anchor, current, self.color)),
            ToolKind::Circle => {
                Shape::Circle(Circle::from_center_and_edge(anchor, current, self.color))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError};

    fn draw(editor: &mut Editor, from: Point, to: Point) {
        editor.pointer_pressed(from, PointerButton::Primary);
        editor.pointer_dragged(to);
        editor.pointer_released(to);
    }

    #[test]
    fn test_draw_line_commits_on_release() {
        let mut editor = Editor::new();
        editor.set_color(Color::new(255, 0, 0));

        editor.pointer_pressed(Point::new(10, 10), PointerButton::Primary);
        assert!(editor.in_progress().is_none());

        assert!(editor.pointer_dragged(Point::new(30, 30)));
        assert!(editor.in_progress().is_some());
        assert!(editor.document.is_empty());

        assert!(editor.pointer_released(Point::new(50, 50)));
        assert!(editor.in_progress().is_none());
        assert_eq!(editor.document.len(), 1);

        let shape = editor.document.iter().next().unwrap();
        assert_eq!(shape.to_record(), "LINE 10 10 30 30 255 0 0");
    }

    #[test]
    fn test_drag_replaces_pending_shape() {
        let mut editor = Editor::new();
        editor.pointer_pressed(Point::new(0, 0), PointerButton::Primary);
        editor.pointer_dragged(Point::new(10, 10));
        editor.pointer_dragged(Point::new(40, 20));

        let pending = editor.in_progress().unwrap();
        assert_eq!(pending.to_record(), "LINE 0 0 40 20 0 0 0");
        editor.pointer_released(Point::new(40, 20));
        assert_eq!(editor.document.len(), 1);
    }

    #[test]
    fn test_click_without_drag_commits_nothing() {
        let mut editor = Editor::new();
        editor.pointer_pressed(Point::new(10, 10), PointerButton::Primary);
        assert!(!editor.pointer_released(Point::new(10, 10)));
        assert!(editor.document.is_empty());
    }

    #[test]
    fn test_draw_rect_normalizes_drag_direction() {
        let mut editor = Editor::new();
        editor.set_tool(ToolKind::Rect);
        draw(&mut editor, Point::new(80, 20), Point::new(20, 70));

        let shape = editor.document.iter().next().unwrap();
        assert_eq!(shape.to_record(), "RECTANGLE 20 20 60 50 0 0 0");
    }

    #[test]
    fn test_draw_circle_from_center_and_edge() {
        let mut editor = Editor::new();
        editor.set_tool(ToolKind::Circle);
        draw(&mut editor, Point::new(100, 100), Point::new(103, 104));

        let shape = editor.document.iter().next().unwrap();
        assert_eq!(shape.to_record(), "CIRCLE 100 100 5 0 0 0");
    }

    #[test]
    fn test_edit_move_uses_incremental_deltas() {
        let mut editor = Editor::new();
        editor.set_tool(ToolKind::Circle);
        draw(&mut editor, Point::new(100, 100), Point::new(110, 100));

        editor.set_mode(Mode::Edit);
        editor.pointer_pressed(Point::new(105, 100), PointerButton::Primary);
        editor.pointer_dragged(Point::new(115, 110));
        editor.pointer_dragged(Point::new(125, 120));
        editor.pointer_released(Point::new(125, 120));

        // Net translation equals pointer travel, applied step by step.
        let shape = editor.document.iter().next().unwrap();
        assert_eq!(shape.center(), Point::new(120, 120));
    }

    #[test]
    fn test_edit_endpoint_drag_is_absolute() {
        let mut editor = Editor::new();
        draw(&mut editor, Point::new(0, 0), Point::new(100, 0));

        editor.set_mode(Mode::Edit);
        // Grab the end endpoint, not the body.
        editor.pointer_pressed(Point::new(98, 2), PointerButton::Primary);
        editor.pointer_dragged(Point::new(200, 50));
        editor.pointer_released(Point::new(200, 50));

        let shape = editor.document.iter().next().unwrap();
        match shape {
            Shape::Line(line) => {
                assert_eq!(line.start, Point::new(0, 0));
                assert_eq!(line.end, Point::new(200, 50));
                assert_eq!(line.center(), Point::new(100, 25));
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_press_on_empty_canvas_is_noop_drag() {
        let mut editor = Editor::new();
        editor.set_mode(Mode::Edit);
        assert!(!editor.pointer_pressed(Point::new(10, 10), PointerButton::Primary));
        assert!(!editor.pointer_dragged(Point::new(50, 50)));
        assert!(!editor.pointer_released(Point::new(50, 50)));
    }

    #[test]
    fn test_secondary_click_deletes_only_the_hit_shape() {
        let mut editor = Editor::new();
        editor.set_tool(ToolKind::Circle);
        draw(&mut editor, Point::new(100, 100), Point::new(110, 100));
        draw(&mut editor, Point::new(300, 300), Point::new(310, 300));
        assert_eq!(editor.document.len(), 2);

        editor.set_mode(Mode::Edit);
        assert!(editor.pointer_pressed(Point::new(110, 110), PointerButton::Secondary));
        assert_eq!(editor.document.len(), 1);
        assert_eq!(
            editor.document.iter().next().unwrap().center(),
            Point::new(300, 300)
        );
    }

    #[test]
    fn test_secondary_click_works_in_draw_mode_too() {
        let mut editor = Editor::new();
        editor.set_tool(ToolKind::Circle);
        draw(&mut editor, Point::new(100, 100), Point::new(110, 100));

        assert_eq!(editor.mode(), Mode::Draw);
        assert!(editor.pointer_pressed(Point::new(100, 100), PointerButton::Secondary));
        assert!(editor.document.is_empty());
    }

    #[test]
    fn test_secondary_click_on_nothing_is_noop() {
        let mut editor = Editor::new();
        assert!(!editor.pointer_pressed(Point::new(5, 5), PointerButton::Secondary));
    }

    #[test]
    fn test_secondary_click_miss_still_clears_pending_preview() {
        let mut editor = Editor::new();
        editor.pointer_pressed(Point::new(0, 0), PointerButton::Primary);
        editor.pointer_dragged(Point::new(10, 10));
        assert!(editor.in_progress().is_some());

        // Hits no shape, but the dropped preview must trigger a repaint.
        assert!(editor.pointer_pressed(Point::new(500, 500), PointerButton::Secondary));
        assert!(editor.in_progress().is_none());
        assert!(editor.document.is_empty());
    }

    #[test]
    fn test_invalid_color_keeps_previous() {
        let mut editor = Editor::new();
        editor.set_color(Color::new(1, 2, 3));
        assert!(editor.set_color_components("999", "0", "0").is_err());
        assert_eq!(editor.color(), Color::new(1, 2, 3));

        editor.set_color_components("10", "20", "30").unwrap();
        assert_eq!(editor.color(), Color::new(10, 20, 30));
    }

    #[test]
    fn test_mode_switch_cancels_pending_shape() {
        let mut editor = Editor::new();
        editor.pointer_pressed(Point::new(0, 0), PointerButton::Primary);
        editor.pointer_dragged(Point::new(10, 10));
        assert!(editor.in_progress().is_some());

        editor.set_mode(Mode::Edit);
        assert!(editor.in_progress().is_none());
        assert!(editor.document.is_empty());
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut editor = Editor::new();
        draw(&mut editor, Point::new(0, 0), Point::new(10, 10));
        editor.pointer_pressed(Point::new(50, 50), PointerButton::Primary);
        editor.pointer_dragged(Point::new(60, 60));

        editor.clear();
        assert!(editor.document.is_empty());
        assert!(editor.in_progress().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let storage = MemoryStorage::new();
        let mut editor = Editor::new();
        editor.set_color(Color::new(255, 0, 0));
        draw(&mut editor, Point::new(10, 10), Point::new(50, 50));
        editor.save_to(&storage).unwrap();

        let mut other = Editor::new();
        other.load_from(&storage).unwrap();
        assert_eq!(other.document.to_text(), "LINE 10 10 50 50 255 0 0\n");
    }

    #[test]
    fn test_failed_load_leaves_document_untouched() {
        let mut editor = Editor::new();
        draw(&mut editor, Point::new(0, 0), Point::new(10, 10));

        let empty = MemoryStorage::new();
        let result = editor.load_from(&empty);
        assert!(matches!(result, Err(StorageError::NotFound(_))));
        assert_eq!(editor.document.len(), 1);
    }

    #[test]
    fn test_custom_hit_radius() {
        let mut editor = Editor::new().with_hit_radius(5.0);
        editor.set_tool(ToolKind::Circle);
        draw(&mut editor, Point::new(100, 100), Point::new(110, 100));

        // 20 units away: inside the default radius, outside the custom one.
        assert!(!editor.pointer_pressed(Point::new(120, 100), PointerButton::Secondary));
        assert_eq!(editor.document.len(), 1);
    }
}
