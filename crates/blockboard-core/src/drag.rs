//! Pointer-session controller for moving and resizing blocks.

use crate::block::BlockId;
use crate::layout::{Layout, LayoutError, LayoutResult};
use kurbo::{Point, Size};

/// Which gesture an active session is performing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Move,
    Resize,
}

/// State of the pointer session.
///
/// A session starts on pointer-down over a block's header strip (move)
/// or corner grip (resize), and ends on pointer-up. Anchors record where
/// the gesture started so each pointer event yields a candidate
/// position or size relative to committed state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Moving {
        id: BlockId,
        pointer_anchor: Point,
        position_anchor: Point,
    },
    Resizing {
        id: BlockId,
        pointer_anchor: Point,
        size_anchor: Size,
    },
}

/// Turns pointer movement into proposed layout mutations.
///
/// One session runs at a time. Rejected proposals leave the block at its
/// last committed geometry, so the view never shows a partial or ghost
/// state.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Check if a session is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// The block owning the active session, if any.
    pub fn active_block(&self) -> Option<BlockId> {
        match self.state {
            DragState::Idle => None,
            DragState::Moving { id, .. } | DragState::Resizing { id, .. } => Some(id),
        }
    }

    /// The kind of the active session, if any.
    pub fn session_kind(&self) -> Option<SessionKind> {
        match self.state {
            DragState::Idle => None,
            DragState::Moving { .. } => Some(SessionKind::Move),
            DragState::Resizing { .. } => Some(SessionKind::Resize),
        }
    }

    /// Start a move session from a pointer-down on the block's header
    /// strip. Returns `Ok(false)` if another session is already active;
    /// that event is not a defined input and is dropped.
    pub fn begin_move(
        &mut self,
        layout: &Layout,
        id: BlockId,
        pointer: Point,
    ) -> LayoutResult<bool> {
        if self.is_active() {
            return Ok(false);
        }
        let block = layout.get(id).ok_or(LayoutError::NotFound(id))?;
        self.state = DragState::Moving {
            id,
            pointer_anchor: pointer,
            position_anchor: block.position,
        };
        Ok(true)
    }

    /// Start a resize session from a pointer-down on the block's corner
    /// grip. Same contract as [`begin_move`](Self::begin_move).
    pub fn begin_resize(
        &mut self,
        layout: &Layout,
        id: BlockId,
        pointer: Point,
    ) -> LayoutResult<bool> {
        if self.is_active() {
            return Ok(false);
        }
        let block = layout.get(id).ok_or(LayoutError::NotFound(id))?;
        self.state = DragState::Resizing {
            id,
            pointer_anchor: pointer,
            size_anchor: block.size,
        };
        Ok(true)
    }

    /// Feed a pointer-move event to the active session.
    ///
    /// Moving: the candidate is the anchored position plus the pointer
    /// delta, clamped non-negative on both axes. Resizing: the candidate
    /// is the anchored size plus the delta; on an accepted resize the
    /// anchors re-base onto the committed state so further deltas stay
    /// incremental. Returns whether a change was committed.
    pub fn pointer_moved(&mut self, layout: &mut Layout, pointer: Point) -> bool {
        match self.state {
            DragState::Idle => false,
            DragState::Moving {
                id,
                pointer_anchor,
                position_anchor,
            } => {
                let delta = pointer - pointer_anchor;
                let candidate = Point::new(
                    (position_anchor.x + delta.x).max(0.0),
                    (position_anchor.y + delta.y).max(0.0),
                );
                match layout.propose_move(id, candidate) {
                    Ok(accepted) => accepted,
                    Err(_) => {
                        // Block was deleted mid-session.
                        self.state = DragState::Idle;
                        false
                    }
                }
            }
            DragState::Resizing {
                id,
                pointer_anchor,
                size_anchor,
            } => {
                let delta = pointer - pointer_anchor;
                let candidate = Size::new(size_anchor.width + delta.x, size_anchor.height + delta.y);
                match layout.propose_resize(id, candidate) {
                    Ok(true) => {
                        let committed = layout.get(id).map(|b| b.size).unwrap_or(size_anchor);
                        self.state = DragState::Resizing {
                            id,
                            pointer_anchor: pointer,
                            size_anchor: committed,
                        };
                        true
                    }
                    Ok(false) => false,
                    Err(_) => {
                        self.state = DragState::Idle;
                        false
                    }
                }
            }
        }
    }

    /// End the session on pointer-up. Returns the block whose session
    /// ended, if one was active.
    pub fn end(&mut self) -> Option<BlockId> {
        let id = self.active_block();
        self.state = DragState::Idle;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, BlockKind};

    fn layout_with_one_block() -> (Layout, BlockId) {
        let mut layout = Layout::new();
        let id = layout.add_block(BlockKind::Text, Point::ZERO).id;
        (layout, id)
    }

    #[test]
    fn test_session_lifecycle() {
        let (layout, id) = layout_with_one_block();
        let mut controller = DragController::new();

        assert!(!controller.is_active());
        assert!(controller.begin_move(&layout, id, Point::new(10.0, 10.0)).unwrap());
        assert!(controller.is_active());
        assert_eq!(controller.active_block(), Some(id));
        assert_eq!(controller.session_kind(), Some(SessionKind::Move));

        assert_eq!(controller.end(), Some(id));
        assert!(!controller.is_active());
        assert_eq!(controller.end(), None);
    }

    #[test]
    fn test_begin_while_active_is_dropped() {
        let mut layout = Layout::new();
        let a = layout.add_block(BlockKind::Text, Point::ZERO).id;
        let b = layout.add_block(BlockKind::Text, Point::new(0.0, 200.0)).id;
        let mut controller = DragController::new();

        assert!(controller.begin_move(&layout, a, Point::ZERO).unwrap());
        assert!(!controller.begin_move(&layout, b, Point::ZERO).unwrap());
        assert!(!controller.begin_resize(&layout, b, Point::ZERO).unwrap());
        assert_eq!(controller.active_block(), Some(a));
    }

    #[test]
    fn test_begin_unknown_block() {
        let (layout, _) = layout_with_one_block();
        let mut controller = DragController::new();
        let missing = uuid::Uuid::new_v4();

        assert_eq!(
            controller.begin_move(&layout, missing, Point::ZERO),
            Err(LayoutError::NotFound(missing))
        );
        assert!(!controller.is_active());
    }

    #[test]
    fn test_move_commits_snapped_positions() {
        let (mut layout, id) = layout_with_one_block();
        let mut controller = DragController::new();

        controller.begin_move(&layout, id, Point::new(300.0, 100.0)).unwrap();
        assert!(controller.pointer_moved(&mut layout, Point::new(347.0, 158.0)));
        // Delta (47, 58) from a block at the origin snaps to (40, 60).
        assert_eq!(layout.get(id).unwrap().position, Point::new(40.0, 60.0));
    }

    #[test]
    fn test_move_clamps_non_negative() {
        let (mut layout, id) = layout_with_one_block();
        let mut controller = DragController::new();

        controller.begin_move(&layout, id, Point::new(500.0, 500.0)).unwrap();
        controller.pointer_moved(&mut layout, Point::new(100.0, 100.0));
        assert_eq!(layout.get(id).unwrap().position, Point::ZERO);
    }

    #[test]
    fn test_move_keeps_anchor_across_events() {
        let (mut layout, id) = layout_with_one_block();
        let mut controller = DragController::new();

        controller.begin_move(&layout, id, Point::ZERO).unwrap();
        controller.pointer_moved(&mut layout, Point::new(40.0, 0.0));
        controller.pointer_moved(&mut layout, Point::new(100.0, 0.0));
        // Deltas are absolute against the session anchors, not cumulative.
        assert_eq!(layout.get(id).unwrap().position, Point::new(100.0, 0.0));
    }

    #[test]
    fn test_move_rejection_keeps_session_and_position() {
        let mut layout = Layout::new();
        let a = layout.add_block(BlockKind::Text, Point::ZERO).id;
        layout.add_block(BlockKind::Text, Point::new(600.0, 0.0));
        let mut controller = DragController::new();

        controller.begin_move(&layout, a, Point::ZERO).unwrap();
        assert!(!controller.pointer_moved(&mut layout, Point::new(600.0, 0.0)));
        assert_eq!(layout.get(a).unwrap().position, Point::ZERO);
        assert!(controller.is_active());

        // The session recovers once the pointer leaves the occupied area.
        assert!(controller.pointer_moved(&mut layout, Point::new(0.0, 300.0)));
        assert_eq!(layout.get(a).unwrap().position, Point::new(0.0, 300.0));
    }

    #[test]
    fn test_resize_rebases_anchors_on_accept() {
        let (mut layout, id) = layout_with_one_block();
        let mut controller = DragController::new();

        controller.begin_resize(&layout, id, Point::new(600.0, 200.0)).unwrap();
        assert!(controller.pointer_moved(&mut layout, Point::new(640.0, 220.0)));
        assert_eq!(layout.get(id).unwrap().size, Size::new(640.0, 220.0));

        // The next event is measured from the committed size, so the
        // two steps accumulate.
        assert!(controller.pointer_moved(&mut layout, Point::new(680.0, 240.0)));
        assert_eq!(layout.get(id).unwrap().size, Size::new(680.0, 240.0));
    }

    #[test]
    fn test_resize_rejection_keeps_anchors() {
        let mut layout = Layout::new();
        let a = layout.add_block(BlockKind::Text, Point::ZERO).id;
        layout.add_block(BlockKind::Text, Point::new(620.0, 0.0));
        let mut controller = DragController::new();

        controller.begin_resize(&layout, a, Point::new(600.0, 200.0)).unwrap();
        assert!(!controller.pointer_moved(&mut layout, Point::new(660.0, 200.0)));
        assert_eq!(layout.get(a).unwrap().size, Block::DEFAULT_SIZE);
        assert!(controller.is_active());

        // Shrinking still works from the original anchors.
        assert!(controller.pointer_moved(&mut layout, Point::new(400.0, 200.0)));
        assert_eq!(layout.get(a).unwrap().size, Size::new(400.0, 200.0));
    }

    #[test]
    fn test_deleted_block_ends_session() {
        let (mut layout, id) = layout_with_one_block();
        let mut controller = DragController::new();

        controller.begin_move(&layout, id, Point::ZERO).unwrap();
        layout.delete_block(id).unwrap();

        assert!(!controller.pointer_moved(&mut layout, Point::new(40.0, 0.0)));
        assert!(!controller.is_active());
    }
}
