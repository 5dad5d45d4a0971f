//! Timeline operations for the Planner.

use jiff::Timestamp;

use super::Planner;
use crate::{
    assembler::{AssembleOptions, TimelineAssembler},
    error::Result,
    flatten::TimelineView,
    models::{GroupBy, PlantingSummary, Timeline},
    params::{Id, PlanTimeline},
};

fn assemble_options(group_by: GroupBy, params: &PlanTimeline) -> AssembleOptions {
    let options = AssembleOptions::new(group_by).with_window(params.start, params.end);
    match params.include_locations {
        Some(include) => options.with_location_stages(include),
        None => options,
    }
}

impl Planner {
    /// Assembles the grouped timeline of a plan.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::PlanNotFound` if the plan does not exist.
    pub async fn timeline(&self, group_by: GroupBy, params: &PlanTimeline) -> Result<Timeline> {
        let plan_id = params.plan_id;
        let options = assemble_options(group_by, params);
        let links = self.links.clone();
        self.with_database(move |db| TimelineAssembler::new(&db, links).assemble(plan_id, &options))
            .await
    }

    /// Assembles and flattens the timeline of a plan, with a viewing window
    /// relative to the current time.
    pub async fn timeline_view(
        &self,
        group_by: GroupBy,
        params: &PlanTimeline,
    ) -> Result<TimelineView> {
        let timeline = self.timeline(group_by, params).await?;
        Ok(TimelineView::new(&timeline, Timestamp::now().as_second()))
    }

    /// Summarizes every planting of a plan.
    pub async fn planting_summaries(&self, params: &Id) -> Result<Vec<PlantingSummary>> {
        let plan_id = params.id;
        let links = self.links.clone();
        self.with_database(move |db| TimelineAssembler::new(&db, links).summaries(plan_id))
            .await
    }
}
