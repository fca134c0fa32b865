//! Ordered block collection with invariant-checked mutations.

use crate::block::{Block, BlockId, BlockKind};
use crate::snap::{GRID_SIZE, rects_overlap, snap_point, snap_size};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

/// Errors from layout operations that reference blocks or indexes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("block not found: {0}")]
    NotFound(BlockId),
    #[error("index {index} out of range for {len} block(s)")]
    OutOfRange { index: usize, len: usize },
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// An ordered collection of blocks forming one assignment canvas.
///
/// Mutations validate before they commit: a rejected move or resize
/// leaves every block exactly as it was, so readers between input events
/// never observe a colliding or off-grid state.
///
/// Serializes transparently as the block array, matching the persisted
/// `blocks` column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    blocks: Vec<Block>,
}

impl Layout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a layout from persisted blocks, restoring invariants.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let mut layout = Self { blocks };
        layout.normalize();
        layout
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the layout has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks in order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Get a block by id.
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Position of a block in the ordering.
    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    fn require_index(&self, id: BlockId) -> LayoutResult<usize> {
        self.index_of(id).ok_or(LayoutError::NotFound(id))
    }

    /// True if `candidate` overlaps any block other than `exclude`.
    fn occupied(&self, candidate: Rect, exclude: Option<BlockId>) -> bool {
        self.blocks
            .iter()
            .filter(|b| Some(b.id) != exclude)
            .any(|b| rects_overlap(candidate, b.rect()))
    }

    /// Find a free cell for a block of `size`, starting at the snapped
    /// `proposed` position and probing downward one grid row at a time.
    /// Always terminates: the canvas is unbounded below the occupied
    /// region.
    fn resolve_insert_position(&self, proposed: Point, size: Size) -> Point {
        let mut position = snap_point(proposed, GRID_SIZE);
        while self.occupied(Rect::from_origin_size(position, size), None) {
            position.y += GRID_SIZE;
        }
        position
    }

    /// Create a block of `kind` near `proposed`, keeping the canvas
    /// collision-free. If the snapped cell is occupied the block lands
    /// in the first free cell below it.
    pub fn add_block(&mut self, kind: BlockKind, proposed: Point) -> &Block {
        let position = self.resolve_insert_position(proposed, Block::DEFAULT_SIZE);
        let block = Block::new(kind, position, self.blocks.len());
        log::debug!(
            "add {:?} block {} at ({}, {})",
            kind,
            block.id,
            position.x,
            position.y
        );
        let index = self.blocks.len();
        self.blocks.push(block);
        &self.blocks[index]
    }

    /// Replace a block's content verbatim. No geometry validation.
    pub fn update_content(&mut self, id: BlockId, content: impl Into<String>) -> LayoutResult<()> {
        let index = self.require_index(id)?;
        let block = &mut self.blocks[index];
        block.content = content.into();
        block.touch();
        Ok(())
    }

    /// Propose a new position for a block. The position is snapped to
    /// the grid and commits only if the block would not overlap any
    /// other block; otherwise the layout is left unchanged. Returns
    /// whether the move was accepted.
    pub fn propose_move(&mut self, id: BlockId, position: Point) -> LayoutResult<bool> {
        let index = self.require_index(id)?;
        let snapped = snap_point(position, GRID_SIZE);
        let candidate = Rect::from_origin_size(snapped, self.blocks[index].size);
        if self.occupied(candidate, Some(id)) {
            log::trace!("move of {} to ({}, {}) rejected", id, snapped.x, snapped.y);
            return Ok(false);
        }
        let block = &mut self.blocks[index];
        block.position = snapped;
        block.touch();
        Ok(true)
    }

    /// Propose a new size for a block. Each dimension is clamped to the
    /// minimum extent and snapped to the grid, then checked against the
    /// block's current position. Commit-or-reject as for
    /// [`propose_move`](Self::propose_move).
    pub fn propose_resize(&mut self, id: BlockId, size: Size) -> LayoutResult<bool> {
        let index = self.require_index(id)?;
        let snapped = snap_size(Block::clamp_size(size), GRID_SIZE);
        let candidate = Rect::from_origin_size(self.blocks[index].position, snapped);
        if self.occupied(candidate, Some(id)) {
            log::trace!(
                "resize of {} to {}x{} rejected",
                id,
                snapped.width,
                snapped.height
            );
            return Ok(false);
        }
        let block = &mut self.blocks[index];
        block.size = snapped;
        block.touch();
        Ok(true)
    }

    /// Remove a block and renumber the remainder densely.
    pub fn delete_block(&mut self, id: BlockId) -> LayoutResult<Block> {
        let index = self.require_index(id)?;
        let removed = self.blocks.remove(index);
        self.renumber();
        log::debug!("deleted block {}", removed.id);
        Ok(removed)
    }

    /// Move the block at `from` so it sits at `to`, shifting the blocks
    /// in between and renumbering.
    pub fn move_order(&mut self, from: usize, to: usize) -> LayoutResult<()> {
        let len = self.blocks.len();
        for index in [from, to] {
            if index >= len {
                return Err(LayoutError::OutOfRange { index, len });
            }
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        self.renumber();
        Ok(())
    }

    fn renumber(&mut self) {
        for (index, block) in self.blocks.iter_mut().enumerate() {
            block.order_index = index;
        }
    }

    /// Restore invariants on a layout loaded from storage.
    ///
    /// Blocks are ordered by their stored index and renumbered densely,
    /// duplicate ids get fresh ones, geometry is clamped and snapped,
    /// and overlaps are resolved front to back with the same downward
    /// probe used on insert — so earlier blocks keep their cells.
    pub fn normalize(&mut self) {
        self.blocks.sort_by_key(|b| b.order_index);
        self.renumber();

        let mut seen = HashSet::new();
        for block in &mut self.blocks {
            if !seen.insert(block.id) {
                let fresh = Uuid::new_v4();
                log::warn!("duplicate block id {} on load, reassigned {}", block.id, fresh);
                block.id = fresh;
                seen.insert(fresh);
            }
            block.size = snap_size(Block::clamp_size(block.size), GRID_SIZE);
            let clamped = Point::new(block.position.x.max(0.0), block.position.y.max(0.0));
            block.position = snap_point(clamped, GRID_SIZE);
        }

        for index in 0..self.blocks.len() {
            let size = self.blocks[index].size;
            let mut position = self.blocks[index].position;
            loop {
                let candidate = Rect::from_origin_size(position, size);
                let collides = self.blocks[..index]
                    .iter()
                    .any(|other| rects_overlap(candidate, other.rect()));
                if !collides {
                    break;
                }
                position.y += GRID_SIZE;
            }
            self.blocks[index].position = position;
        }
    }
}
