//! Editing session wiring the layout, drag controller, and UI state.

use crate::assignment::AssignmentDocument;
use crate::block::{Block, BlockId, BlockKind};
use crate::drag::DragController;
use crate::layout::{Layout, LayoutResult};
use crate::palette::{DragPayload, DropOutcome, drop_on_canvas};
use crate::view::{SlideshowCursor, ViewModel, WorkspaceMode, render};
use crate::widget::{BlockStates, BlockUiState};
use kurbo::{Point, Rect};

/// One assignment-editing session: the document being edited plus the
/// interactive state around it.
///
/// Every mutation runs synchronously inside the input-event handler
/// that triggered it; the session is the layout's only writer.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// The document being edited.
    pub assignment: AssignmentDocument,
    /// Active pointer session, if any.
    pub drag: DragController,
    /// Selection and editing focus.
    pub states: BlockStates,
}

impl Workspace {
    /// Create a workspace with an empty untitled draft.
    pub fn new() -> Self {
        Self::with_assignment(AssignmentDocument::new("Untitled"))
    }

    /// Create a workspace around an existing document.
    pub fn with_assignment(assignment: AssignmentDocument) -> Self {
        Self {
            assignment,
            drag: DragController::new(),
            states: BlockStates::new(),
        }
    }

    /// The layout being edited.
    pub fn layout(&self) -> &Layout {
        &self.assignment.blocks
    }

    /// UI state of a block.
    pub fn block_state(&self, id: BlockId) -> BlockUiState {
        self.states.state(id)
    }

    /// Select a block. Returns false if the id is unknown.
    pub fn select(&mut self, id: BlockId) -> bool {
        if self.assignment.blocks.get(id).is_none() {
            return false;
        }
        self.states.select(id);
        true
    }

    /// Clear selection and close any open editor.
    pub fn clear_selection(&mut self) {
        self.states.clear_selection();
    }

    /// Insert a block of `kind` near `position` and select it.
    pub fn add_block(&mut self, kind: BlockKind, position: Point) -> BlockId {
        let id = self.assignment.blocks.add_block(kind, position).id;
        self.states.select(id);
        id
    }

    /// Pointer-down on a block's header strip.
    pub fn begin_move(&mut self, id: BlockId, pointer: Point) -> LayoutResult<bool> {
        let started = self.drag.begin_move(&self.assignment.blocks, id, pointer)?;
        if started {
            self.states.select(id);
        }
        Ok(started)
    }

    /// Pointer-down on a block's corner grip.
    pub fn begin_resize(&mut self, id: BlockId, pointer: Point) -> LayoutResult<bool> {
        let started = self.drag.begin_resize(&self.assignment.blocks, id, pointer)?;
        if started {
            self.states.select(id);
        }
        Ok(started)
    }

    /// Pointer movement during an active session.
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        self.drag.pointer_moved(&mut self.assignment.blocks, pointer)
    }

    /// Pointer-up: ends the session. The block stays logically selected
    /// for editing.
    pub fn release(&mut self) -> Option<BlockId> {
        self.drag.end()
    }

    /// Route a drop from the template palette or an in-flight block
    /// drag. Template drops insert and select the new block; an existing
    /// block's position was already committed through the move path.
    pub fn drop_payload(
        &mut self,
        payload: DragPayload,
        drop_point: Point,
        canvas: Rect,
    ) -> DropOutcome {
        let outcome = drop_on_canvas(&mut self.assignment.blocks, payload, drop_point, canvas);
        match outcome {
            DropOutcome::Inserted(id) | DropOutcome::MoveExisting(id) => {
                self.states.select(id);
            }
            DropOutcome::Ignored => {}
        }
        outcome
    }

    /// Replace a block's content.
    pub fn update_content(&mut self, id: BlockId, content: impl Into<String>) -> LayoutResult<()> {
        self.assignment.blocks.update_content(id, content)
    }

    /// Open the content editor for a block. Returns false if the id is
    /// unknown.
    pub fn begin_editing(&mut self, id: BlockId) -> bool {
        if self.assignment.blocks.get(id).is_none() {
            return false;
        }
        self.states.begin_editing(id);
        true
    }

    /// Close the content editor; the block stays selected.
    pub fn end_editing(&mut self) {
        self.states.end_editing();
    }

    /// Delete the selected block, if any.
    pub fn delete_selected(&mut self) -> Option<Block> {
        let id = self.states.selected()?;
        if self.drag.active_block() == Some(id) {
            self.drag.end();
        }
        let removed = self.assignment.blocks.delete_block(id).ok()?;
        self.states.remove(id);
        Some(removed)
    }

    /// Reorder blocks by index.
    pub fn move_order(&mut self, from: usize, to: usize) -> LayoutResult<()> {
        self.assignment.blocks.move_order(from, to)
    }

    /// Read-only rendering for preview and the student-facing view.
    pub fn view(&self, mode: WorkspaceMode, cursor: SlideshowCursor) -> ViewModel<'_> {
        render(&self.assignment.blocks, mode, cursor)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
