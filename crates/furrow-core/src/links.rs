//! Link and edit-URL construction for timeline rows and tasks.

/// Builds the URLs attached to rows (`link`) and tasks (`edit_url`).
///
/// All URLs are rooted at an optional base URL; with the default empty base
/// they are site-relative paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    base_url: String,
}

impl Links {
    /// Creates a link builder rooted at `base_url`. A trailing slash is
    /// ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Canonical page of a plan; used as the return destination of edit
    /// forms.
    pub fn plan(&self, plan_id: u64) -> String {
        format!("{}/plan/{plan_id}", self.base_url)
    }

    pub fn planting_edit(&self, planting_id: u64, plan_id: u64) -> String {
        format!(
            "{}/plan/record/{planting_id}/edit?destination={}",
            self.base_url,
            self.plan(plan_id)
        )
    }

    pub fn log_edit(&self, log_id: u64, plan_id: u64) -> String {
        format!(
            "{}/log/{log_id}/edit?destination={}",
            self.base_url,
            self.plan(plan_id)
        )
    }

    /// Canonical page of a plant or location asset.
    pub fn asset(&self, asset_id: u64) -> String {
        format!("{}/asset/{asset_id}", self.base_url)
    }

    /// Listing of the plant assets tagged with a plant type.
    pub fn plant_type(&self, plant_type_id: u64) -> String {
        format!("{}/asset/plant-type/{plant_type_id}", self.base_url)
    }
}
