//! Per-block UI state: selection and content-editing focus.

use crate::block::BlockId;

/// UI state of a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockUiState {
    /// Plain display, no chrome.
    #[default]
    Normal,
    /// Selected: the header strip and corner grip are shown.
    Selected,
    /// The kind-specific content editor is open.
    Editing,
}

impl BlockUiState {
    /// Check if the block is selected (editing implies selected).
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected | Self::Editing)
    }
}

/// Tracks which block is selected and which is being edited.
///
/// The workspace edits one block at a time, so selection is single.
/// Drag activity is a separate concern and lives in the drag controller.
#[derive(Debug, Clone, Default)]
pub struct BlockStates {
    selected: Option<BlockId>,
    editing: Option<BlockId>,
}

impl BlockStates {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// UI state of a block.
    pub fn state(&self, id: BlockId) -> BlockUiState {
        if self.editing == Some(id) {
            BlockUiState::Editing
        } else if self.selected == Some(id) {
            BlockUiState::Selected
        } else {
            BlockUiState::Normal
        }
    }

    /// The selected block, if any.
    pub fn selected(&self) -> Option<BlockId> {
        self.selected
    }

    /// Check if a block is selected.
    pub fn is_selected(&self, id: BlockId) -> bool {
        self.selected == Some(id)
    }

    /// The block whose content editor is open, if any.
    pub fn editing(&self) -> Option<BlockId> {
        self.editing
    }

    /// Select a block, replacing any previous selection. Selecting away
    /// from a block closes its editor.
    pub fn select(&mut self, id: BlockId) {
        if self.editing != Some(id) {
            self.editing = None;
        }
        self.selected = Some(id);
    }

    /// Clear selection and close any open editor.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.editing = None;
    }

    /// Open the content editor for a block, selecting it first.
    pub fn begin_editing(&mut self, id: BlockId) {
        self.selected = Some(id);
        self.editing = Some(id);
    }

    /// Close the content editor; the block stays selected.
    pub fn end_editing(&mut self) {
        self.editing = None;
    }

    /// Forget a deleted block.
    pub fn remove(&mut self, id: BlockId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
    }
}
