//! Block template palette and the canvas drop protocol.

use crate::block::{BlockId, BlockKind};
use crate::layout::Layout;
use kurbo::{Point, Rect};

/// An entry in the template sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockTemplate {
    pub kind: BlockKind,
    pub label: &'static str,
    pub description: &'static str,
}

/// The fixed set of templates teachers can drag onto the canvas.
pub const BLOCK_TEMPLATES: [BlockTemplate; 3] = [
    BlockTemplate {
        kind: BlockKind::Text,
        label: "Text Block",
        description: "Add formatted text with LaTeX support",
    },
    BlockTemplate {
        kind: BlockKind::Answer,
        label: "Answer Box",
        description: "Add an answer input area",
    },
    BlockTemplate {
        kind: BlockKind::Image,
        label: "Image Block",
        description: "Upload and display an image",
    },
];

/// Payload carried by a drag gesture over the canvas.
///
/// A template drag identifies only a block kind — no block exists yet.
/// Dragging an existing block carries its id and never creates one; the
/// drop handler disambiguates the two protocols with
/// [`is_template`](Self::is_template).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPayload {
    Template(BlockKind),
    Block(BlockId),
}

impl DragPayload {
    /// Check if this payload would create a new block on drop.
    pub fn is_template(&self) -> bool {
        matches!(self, DragPayload::Template(_))
    }
}

/// What a drop on the canvas resulted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// A template drop created this block.
    Inserted(BlockId),
    /// An existing block was dropped. Its position changes go through
    /// the drag controller, so the drop itself mutates nothing.
    MoveExisting(BlockId),
    /// The drop landed outside the canvas and was ignored.
    Ignored,
}

/// Handle a drop at `drop_point`, given the canvas rectangle in the same
/// coordinate space. Points inside the canvas are translated to
/// canvas-local coordinates before insertion.
pub fn drop_on_canvas(
    layout: &mut Layout,
    payload: DragPayload,
    drop_point: Point,
    canvas: Rect,
) -> DropOutcome {
    if !canvas.contains(drop_point) {
        return DropOutcome::Ignored;
    }
    match payload {
        DragPayload::Template(kind) => {
            let local = Point::new(drop_point.x - canvas.x0, drop_point.y - canvas.y0);
            DropOutcome::Inserted(layout.add_block(kind, local).id)
        }
        DragPayload::Block(id) => DropOutcome::MoveExisting(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Rect = Rect::new(260.0, 120.0, 1460.0, 920.0);

    #[test]
    fn test_templates_cover_all_kinds() {
        let kinds: Vec<BlockKind> = BLOCK_TEMPLATES.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![BlockKind::Text, BlockKind::Answer, BlockKind::Image]);
    }

    #[test]
    fn test_is_template() {
        assert!(DragPayload::Template(BlockKind::Text).is_template());
        assert!(!DragPayload::Block(uuid::Uuid::new_v4()).is_template());
    }

    #[test]
    fn test_template_drop_inserts_at_local_coordinates() {
        let mut layout = Layout::new();
        let outcome = drop_on_canvas(
            &mut layout,
            DragPayload::Template(BlockKind::Answer),
            Point::new(367.0, 293.0),
            CANVAS,
        );

        let DropOutcome::Inserted(id) = outcome else {
            panic!("expected an inserted block, got {outcome:?}");
        };
        let block = layout.get(id).unwrap();
        assert_eq!(block.kind, BlockKind::Answer);
        // (367-260, 293-120) = (107, 173), snapped to the grid.
        assert_eq!(block.position, Point::new(100.0, 180.0));
    }

    #[test]
    fn test_drop_outside_canvas_is_ignored() {
        let mut layout = Layout::new();
        let outcome = drop_on_canvas(
            &mut layout,
            DragPayload::Template(BlockKind::Text),
            Point::new(100.0, 300.0),
            CANVAS,
        );
        assert_eq!(outcome, DropOutcome::Ignored);
        assert!(layout.is_empty());
    }

    #[test]
    fn test_existing_block_drop_creates_nothing() {
        let mut layout = Layout::new();
        let id = layout.add_block(BlockKind::Text, Point::ZERO).id;

        let outcome = drop_on_canvas(
            &mut layout,
            DragPayload::Block(id),
            Point::new(400.0, 400.0),
            CANVAS,
        );
        assert_eq!(outcome, DropOutcome::MoveExisting(id));
        assert_eq!(layout.len(), 1);
    }
}
