//! Flattening of the nested row tree for renderers.
//!
//! Gantt-style widgets usually want two flat lists: every row in display
//! order and every task keyed to the row it sits on. [`flatten`] produces
//! both from a nested [`TimelineRow`] tree. [`TaskSpan`] and [`ViewWindow`]
//! derive the range a renderer should initially show.

use serde::{Deserialize, Serialize};

use crate::{
    models::{FlatRow, FlatTimeline, GroupBy, Timeline, TimelineRow, TimelineTask},
    stages::SECONDS_PER_DAY,
};

/// Padding added on each side of the task span by [`ViewWindow::from_tasks`].
pub const VIEW_PADDING_SECONDS: i64 = 7 * SECONDS_PER_DAY;

/// Walks `rows` depth-first in pre-order.
///
/// Rows are listed without their children and tasks, with `parent_id` set
/// to the enclosing row. Tasks are listed in row order; a task without a
/// `resource_id` takes the ID of the row it was found on. The total number
/// of tasks is preserved.
pub fn flatten(rows: &[TimelineRow]) -> FlatTimeline {
    let mut flat = FlatTimeline::default();
    for row in rows {
        walk(row, None, &mut flat);
    }
    flat
}

fn walk(row: &TimelineRow, parent_id: Option<&str>, flat: &mut FlatTimeline) {
    let mut flat_row = FlatRow::from(row);
    flat_row.parent_id = parent_id.map(str::to_string);
    flat.rows.push(flat_row);

    flat.tasks.extend(row.tasks.iter().map(|task| {
        let mut task = task.clone();
        if task.resource_id.is_none() {
            task.resource_id = Some(row.id.clone());
        }
        task
    }));

    for child in &row.children {
        walk(child, Some(&row.id), flat);
    }
}

/// Earliest start and latest end across a set of tasks.
///
/// An open-ended task counts with its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpan {
    pub first: i64,
    pub last: i64,
}

impl TaskSpan {
    /// Returns `None` for an empty task list.
    pub fn of(tasks: &[TimelineTask]) -> Option<Self> {
        let first = tasks.iter().map(|task| task.start).min()?;
        let last = tasks
            .iter()
            .map(|task| task.end.unwrap_or(task.start))
            .max()?;
        Some(Self { first, last })
    }
}

/// The range a renderer should show initially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewWindow {
    pub from: i64,
    pub to: i64,

    /// Shaded span from `from` up to now, present only while the window
    /// starts in the past
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past: Option<(i64, i64)>,
}

impl ViewWindow {
    /// Pads the span of `tasks` by a week on each side and marks the part
    /// that lies before `now`.
    pub fn from_tasks(tasks: &[TimelineTask], now: i64) -> Option<Self> {
        let span = TaskSpan::of(tasks)?;
        let from = span.first.saturating_sub(VIEW_PADDING_SECONDS);
        let to = span.last.saturating_add(VIEW_PADDING_SECONDS);
        let past = (from < now).then_some((from, now));
        Some(Self { from, to, past })
    }
}

/// A flattened timeline together with its initial viewing window, as handed
/// to a Gantt-style renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineView {
    pub plan_id: u64,
    pub group_by: GroupBy,
    pub rows: Vec<FlatRow>,
    pub tasks: Vec<TimelineTask>,
    /// `None` when the timeline has no tasks
    pub window: Option<ViewWindow>,
}

impl TimelineView {
    pub fn new(timeline: &Timeline, now: i64) -> Self {
        let FlatTimeline { rows, tasks } = flatten(&timeline.rows);
        let window = ViewWindow::from_tasks(&tasks, now);
        Self {
            plan_id: timeline.plan_id,
            group_by: timeline.group_by,
            rows,
            tasks,
            window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskMeta;

    fn task(id: &str, resource_id: Option<&str>, start: i64, end: Option<i64>) -> TimelineTask {
        TimelineTask {
            id: id.to_string(),
            resource_id: resource_id.map(str::to_string),
            label: id.to_string(),
            edit_url: None,
            start,
            end,
            enable_dragging: false,
            meta: TaskMeta::new(),
            classes: vec![],
        }
    }

    fn tree() -> Vec<TimelineRow> {
        let mut tomato = TimelineRow::new("g1--p1", "Tomato");
        tomato.tasks = vec![task("a", None, 100, Some(200)), task("b", None, 150, None)];
        let mut pepper = TimelineRow::new("g1--p2", "Pepper");
        pepper.tasks = vec![task("c", Some("elsewhere"), 50, Some(400))];
        let mut group = TimelineRow::new("g1", "Nightshade").expanded();
        group.children = vec![tomato, pepper];

        let mut nested = TimelineRow::new("g2--p3--x", "Deep");
        nested.tasks = vec![task("d", None, 900, Some(950))];
        let mut middle = TimelineRow::new("g2--p3", "Middle");
        middle.children = vec![nested];
        let mut second = TimelineRow::new("g2", "Greens").expanded();
        second.children = vec![middle];
        second.tasks = vec![task("e", None, 10, None)];

        vec![group, second]
    }

    #[test]
    fn test_flatten_pre_order() {
        let flat = flatten(&tree());
        let ids: Vec<&str> = flat.rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["g1", "g1--p1", "g1--p2", "g2", "g2--p3", "g2--p3--x"]);

        let parents: Vec<Option<&str>> = flat
            .rows
            .iter()
            .map(|row| row.parent_id.as_deref())
            .collect();
        assert_eq!(
            parents,
            vec![None, Some("g1"), Some("g1"), None, Some("g2"), Some("g2--p3")]
        );
    }

    #[test]
    fn test_flatten_preserves_task_count() {
        let rows = tree();
        let expected: usize = rows.iter().map(TimelineRow::task_count).sum();
        assert_eq!(flatten(&rows).tasks.len(), expected);
        assert!(flatten(&[]).tasks.is_empty());
    }

    #[test]
    fn test_flatten_inherits_resource_id() {
        let flat = flatten(&tree());
        let resources: Vec<(&str, &str)> = flat
            .tasks
            .iter()
            .map(|task| (task.id.as_str(), task.resource_id.as_deref().unwrap_or("")))
            .collect();
        assert_eq!(
            resources,
            vec![
                ("a", "g1--p1"),
                ("b", "g1--p1"),
                ("c", "elsewhere"),
                ("e", "g2"),
                ("d", "g2--p3--x"),
            ]
        );
    }

    #[test]
    fn test_task_span() {
        let flat = flatten(&tree());
        let span = TaskSpan::of(&flat.tasks).unwrap();
        assert_eq!(span, TaskSpan { first: 10, last: 950 });
        assert_eq!(TaskSpan::of(&[]), None);

        // An open-ended task counts with its start.
        let open = [task("x", None, 500, None)];
        assert_eq!(TaskSpan::of(&open), Some(TaskSpan { first: 500, last: 500 }));
    }

    #[test]
    fn test_view_window_padding_and_past_marker() {
        let tasks = [task("x", None, 1_000_000, Some(2_000_000))];

        let window = ViewWindow::from_tasks(&tasks, 1_500_000).unwrap();
        assert_eq!(window.from, 1_000_000 - VIEW_PADDING_SECONDS);
        assert_eq!(window.to, 2_000_000 + VIEW_PADDING_SECONDS);
        assert_eq!(window.past, Some((window.from, 1_500_000)));

        let future = ViewWindow::from_tasks(&tasks, 0).unwrap();
        assert_eq!(future.past, None);

        assert!(ViewWindow::from_tasks(&[], 0).is_none());
    }

    #[test]
    fn test_view_window_saturates_at_extremes() {
        let tasks = [
            task("early", None, i64::MIN + 5, Some(0)),
            task("late", None, 0, Some(i64::MAX - 5)),
        ];
        let window = ViewWindow::from_tasks(&tasks, 0).unwrap();
        assert_eq!(window.from, i64::MIN);
        assert_eq!(window.to, i64::MAX);
    }

    #[test]
    fn test_timeline_view() {
        let timeline = Timeline {
            plan_id: 4,
            group_by: GroupBy::Location,
            rows: tree(),
        };
        let view = TimelineView::new(&timeline, 0);
        assert_eq!(view.plan_id, 4);
        assert_eq!(view.rows.len(), 6);
        assert_eq!(view.tasks.len(), 5);
        assert_eq!(
            view.window,
            Some(ViewWindow {
                from: 10 - VIEW_PADDING_SECONDS,
                to: 950 + VIEW_PADDING_SECONDS,
                past: Some((10 - VIEW_PADDING_SECONDS, 0)),
            })
        );

        let empty = Timeline {
            rows: vec![],
            ..timeline
        };
        assert_eq!(TimelineView::new(&empty, 0).window, None);
    }
}
