//! Timeline row and task models consumed by Gantt-style renderers.
//!
//! All timestamps are epoch seconds. Renderers working in milliseconds
//! multiply on their side.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::GroupBy;

/// Kind-specific key/value bag attached to a task. Opaque to the core.
pub type TaskMeta = BTreeMap<String, serde_json::Value>;

/// A renderable bar on the timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineTask {
    /// Task identifier, unique within one timeline
    pub id: String,

    /// ID of the row the task is drawn on. Filled in by
    /// [`crate::flatten::flatten`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,

    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,

    /// Task start (epoch seconds)
    pub start: i64,

    /// Task end (epoch seconds); `None` means ongoing
    pub end: Option<i64>,

    #[serde(default)]
    pub enable_dragging: bool,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: TaskMeta,

    /// Ordered style tags
    #[serde(default)]
    pub classes: Vec<String>,
}

/// A node of the timeline row tree.
///
/// Group rows carry `children`; leaf rows carry `tasks`. Each row owns its
/// children outright.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineRow {
    pub id: String,

    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default)]
    pub expanded: bool,

    #[serde(default)]
    pub enable_dragging: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TimelineRow>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TimelineTask>,
}

impl TimelineRow {
    /// Creates a collapsed, non-draggable row with no children or tasks.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            link: None,
            expanded: false,
            enable_dragging: false,
            classes: Vec::new(),
            children: Vec::new(),
            tasks: Vec::new(),
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }

    /// Number of tasks in this row and all of its descendants.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
            + self
                .children
                .iter()
                .map(TimelineRow::task_count)
                .sum::<usize>()
    }
}

/// A row without its children and tasks, as listed by the flattener.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlatRow {
    pub id: String,

    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default)]
    pub expanded: bool,

    #[serde(default)]
    pub enable_dragging: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    /// ID of the enclosing row, `None` for top-level rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl From<&TimelineRow> for FlatRow {
    fn from(row: &TimelineRow) -> Self {
        Self {
            id: row.id.clone(),
            label: row.label.clone(),
            link: row.link.clone(),
            expanded: row.expanded,
            enable_dragging: row.enable_dragging,
            classes: row.classes.clone(),
            parent_id: None,
        }
    }
}

/// The assembled timeline for one plan and grouping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Timeline {
    pub plan_id: u64,
    pub group_by: GroupBy,
    pub rows: Vec<TimelineRow>,
}

/// Flattened rows and tasks ready for a renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlatTimeline {
    pub rows: Vec<FlatRow>,
    pub tasks: Vec<TimelineTask>,
}
