//! Assignment document: the persisted unit that owns a block layout.

use crate::layout::Layout;
use crate::view::WorkspaceMode;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// One grading criterion in a rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricCriterion {
    pub name: String,
    pub points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Grading rubric. Also carries the presentation mode chosen for the
/// student-facing view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentRubric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_mode: Option<WorkspaceMode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub criteria: Vec<RubricCriterion>,
}

/// An assignment under construction or review.
///
/// Field names are the wire contract with the hosted database rows;
/// surrounding code serializes them exactly as written here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDocument {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub max_points: u32,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: AssignmentStatus,
    #[serde(default)]
    pub blocks: Layout,
    #[serde(default)]
    pub rubric: Option<AssignmentRubric>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssignmentDocument {
    /// Create an empty draft.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: String::new(),
            max_points: 100,
            due_date: None,
            status: AssignmentStatus::Draft,
            blocks: Layout::new(),
            rubric: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Presentation mode for the student-facing view, taken from the
    /// rubric and defaulting to a single canvas.
    pub fn workspace_mode(&self) -> WorkspaceMode {
        self.rubric
            .as_ref()
            .and_then(|r| r.workspace_mode)
            .unwrap_or_default()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a document, restoring layout invariants for rows written
    /// before the canvas layout existed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut document: Self = serde_json::from_str(json)?;
        document.blocks.normalize();
        Ok(document)
    }
}
