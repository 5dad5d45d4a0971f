//! Clipping intervals to a viewing window.

use crate::models::Stage;

/// Clips one `[start, end)` interval to the window `[window_start,
/// window_end)`.
///
/// Returns `None` when the interval lies entirely outside the window. An
/// interval with `end == None` is unbounded on the right and is never
/// clipped there. Either window edge may be `None` for "unbounded". An
/// empty window (`window_start >= window_end`) admits nothing.
pub fn bound_interval(
    start: i64,
    end: Option<i64>,
    window_start: Option<i64>,
    window_end: Option<i64>,
) -> Option<(i64, Option<i64>)> {
    if let (Some(window_start), Some(window_end)) = (window_start, window_end) {
        if window_start >= window_end {
            return None;
        }
    }

    if let (Some(end), Some(window_start)) = (end, window_start) {
        if end <= window_start {
            return None;
        }
    }

    if let Some(window_end) = window_end {
        if start >= window_end {
            return None;
        }
    }

    let start = window_start.map_or(start, |window_start| start.max(window_start));
    let end = match (end, window_end) {
        (Some(end), Some(window_end)) => Some(end.min(window_end)),
        (end, _) => end,
    };

    Some((start, end))
}

/// Clips a stage list to `[start, end)`, dropping stages outside it.
///
/// The input is left untouched. Passing `None` for both edges returns an
/// unchanged copy. An empty window (`start >= end`) yields no stages, open
/// stages starting before `end` included; this rule takes precedence over
/// the per-stage drop and clip rules.
pub fn bound(stages: &[Stage], start: Option<i64>, end: Option<i64>) -> Vec<Stage> {
    if start.is_none() && end.is_none() {
        return stages.to_vec();
    }

    stages
        .iter()
        .filter_map(|stage| {
            bound_interval(stage.start, stage.end, start, end).map(|(clipped_start, clipped_end)| {
                Stage {
                    start: clipped_start,
                    end: clipped_end,
                    ..stage.clone()
                }
            })
        })
        .collect()
}
