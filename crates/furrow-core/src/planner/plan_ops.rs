//! Plan operations for the Planner.

use super::Planner;
use crate::{
    error::Result,
    models::Plan,
    params::{CreatePlan, Id},
};

impl Planner {
    /// Creates a new, empty plan.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        let name = params.name.clone();
        self.with_database(move |mut db| db.create_plan(&name))
            .await
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let plan_id = params.id;
        self.with_database(move |db| db.get_plan(plan_id)).await
    }

    /// Lists all plans in creation order.
    pub async fn list_plans(&self) -> Result<Vec<Plan>> {
        self.with_database(|db| db.list_plans()).await
    }
}
