//! Read-only presentation of a layout: single canvas, slideshow, and
//! infinite scroll.

use crate::block::Block;
use crate::layout::Layout;
use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Minimum height of a rendered surface, in canvas pixels.
pub const MIN_SURFACE_HEIGHT: f64 = 600.0;

/// How a layout is presented to a viewer.
///
/// This is an input to rendering, not engine state; the same layout can
/// be rendered in every mode within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceMode {
    /// Every block at its absolute position on one fixed surface.
    #[default]
    Single,
    /// One block at a time, stepped with a cursor.
    Slideshow,
    /// Every block at its absolute position on a vertically scrolling
    /// surface.
    Infinite,
}

/// Scroll behavior of the hosting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Content is clipped to the surface extent.
    Clip,
    /// The surface scrolls vertically without bound.
    Scroll,
}

/// The surface blocks are placed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub extent: Size,
    pub overflow: Overflow,
}

/// Slideshow position, owned by the caller for the session's lifetime.
///
/// The cursor is never reset automatically when the layout changes;
/// rendering clamps a stale cursor to the last block instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideshowCursor {
    index: usize,
}

impl SlideshowCursor {
    /// Cursor at the first slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based slide index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance one slide, clamped to the last block.
    pub fn next(&mut self, block_count: usize) {
        if self.index + 1 < block_count {
            self.index += 1;
        }
    }

    /// Step back one slide, clamped to the first block.
    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }
}

/// Slide indicator for slideshow navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePosition {
    /// Zero-based index of the displayed slide.
    pub index: usize,
    /// Total number of slides.
    pub count: usize,
}

/// A rendered, read-only view of a layout.
///
/// Holds references only; the layout cannot be mutated through it, which
/// is what makes preview and the student-facing display safe to build
/// from the live editing state.
#[derive(Debug, Clone)]
pub struct ViewModel<'a> {
    pub mode: WorkspaceMode,
    /// Blocks to draw, in order, at their absolute positions.
    pub blocks: Vec<&'a Block>,
    pub surface: Surface,
    /// Present in slideshow mode only.
    pub slide: Option<SlidePosition>,
}

/// Render `layout` for the given mode. Pure: the same layout, mode, and
/// cursor always produce the same view.
pub fn render(layout: &Layout, mode: WorkspaceMode, cursor: SlideshowCursor) -> ViewModel<'_> {
    match mode {
        WorkspaceMode::Single => ViewModel {
            mode,
            blocks: layout.blocks().iter().collect(),
            surface: Surface {
                extent: content_extent(layout),
                overflow: Overflow::Clip,
            },
            slide: None,
        },
        WorkspaceMode::Infinite => ViewModel {
            mode,
            blocks: layout.blocks().iter().collect(),
            surface: Surface {
                extent: content_extent(layout),
                overflow: Overflow::Scroll,
            },
            slide: None,
        },
        WorkspaceMode::Slideshow => {
            let count = layout.len();
            if count == 0 {
                return ViewModel {
                    mode,
                    blocks: Vec::new(),
                    surface: Surface {
                        extent: Size::new(0.0, MIN_SURFACE_HEIGHT),
                        overflow: Overflow::Clip,
                    },
                    slide: None,
                };
            }
            let index = cursor.index().min(count - 1);
            let block = &layout.blocks()[index];
            let rect = block.rect();
            ViewModel {
                mode,
                blocks: vec![block],
                surface: Surface {
                    extent: Size::new(rect.x1, rect.y1.max(MIN_SURFACE_HEIGHT)),
                    overflow: Overflow::Clip,
                },
                slide: Some(SlidePosition { index, count }),
            }
        }
    }
}

fn content_extent(layout: &Layout) -> Size {
    let mut width: f64 = 0.0;
    let mut height: f64 = 0.0;
    for block in layout.blocks() {
        let rect = block.rect();
        width = width.max(rect.x1);
        height = height.max(rect.y1);
    }
    Size::new(width, height.max(MIN_SURFACE_HEIGHT))
}
