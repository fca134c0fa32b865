//! Blockboard Core Library
//!
//! Layout engine and data model for the Blockboard assignment builder:
//! grid-snapped block placement with collision avoidance, pointer-driven
//! move/resize sessions, palette drop handling, and read-only
//! presentation of a finished canvas.

pub mod assignment;
pub mod block;
pub mod drag;
pub mod layout;
pub mod palette;
pub mod snap;
pub mod storage;
pub mod view;
pub mod widget;
pub mod workspace;

pub use assignment::{AssignmentDocument, AssignmentRubric, AssignmentStatus};
pub use block::{Block, BlockId, BlockKind, BlockSettings};
pub use drag::{DragController, DragState, SessionKind};
pub use layout::{Layout, LayoutError, LayoutResult};
pub use palette::{BLOCK_TEMPLATES, BlockTemplate, DragPayload, DropOutcome, drop_on_canvas};
pub use snap::{GRID_SIZE, rects_overlap, snap, snap_point, snap_size};
pub use view::{SlideshowCursor, ViewModel, WorkspaceMode, render};
pub use widget::{BlockStates, BlockUiState};
pub use workspace::Workspace;
