//! Assignment block data model.

use chrono::{DateTime, Utc};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Unique identifier for blocks.
pub type BlockId = Uuid;

/// The closed set of block kinds a teacher can place on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Formatted prose, possibly carrying LaTeX-derived markup.
    Text,
    /// Student answer input area.
    Answer,
    /// Uploaded image; the content holds a data URI.
    Image,
}

impl BlockKind {
    /// Human-readable label used by palettes and dialogs.
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Text => "Text Block",
            BlockKind::Answer => "Answer Box",
            BlockKind::Image => "Image Block",
        }
    }
}

/// Input style for answer blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    Text,
    MultipleChoice,
}

/// Kind-specific editor settings, stored verbatim for the block content
/// editors. The layout engine never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_type: Option<AnswerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_types: Option<Vec<String>>,
}

impl BlockSettings {
    /// True if no setting has been set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A rectangular block on the assignment canvas.
///
/// Geometry is grid-aligned at all times; `position` and `size` change
/// only through the layout's accept path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Opaque payload owned by the kind-specific editor (rendered HTML,
    /// LaTeX markup, or an image data URI). Stored verbatim.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// Position in the layout's ordering; dense, zero-based.
    pub order_index: usize,
    /// Top-left corner in canvas coordinates.
    #[serde(default)]
    pub position: Point,
    #[serde(default = "default_size")]
    pub size: Size,
    #[serde(default, skip_serializing_if = "BlockSettings::is_empty")]
    pub settings: BlockSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Block {
    /// Default extent for newly created blocks.
    pub const DEFAULT_SIZE: Size = Size::new(600.0, 200.0);
    /// Minimum width a block can be resized down to.
    pub const MIN_WIDTH: f64 = 200.0;
    /// Minimum height a block can be resized down to.
    pub const MIN_HEIGHT: f64 = 100.0;

    /// Create a block of `kind` at `position` with the default extent
    /// and empty content.
    pub fn new(kind: BlockKind, position: Point, order_index: usize) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            content: String::new(),
            order_index,
            position,
            size: Self::DEFAULT_SIZE,
            settings: BlockSettings::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Bounding rectangle in canvas coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Clamp a candidate size to the minimum extent.
    pub fn clamp_size(size: Size) -> Size {
        Size::new(
            size.width.max(Self::MIN_WIDTH),
            size.height.max(Self::MIN_HEIGHT),
        )
    }

    /// Refresh the modification timestamp after a committed change.
    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn default_size() -> Size {
    Block::DEFAULT_SIZE
}

/// Legacy rows store absent content as an explicit `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
