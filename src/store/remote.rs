use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::error::{MealError, Result};
use crate::models::{MenuItem, PlanRecord, Recommendation};

/// Menu endpoint the web front-end publishes the daily list on.
pub const DEFAULT_MENU_URL: &str = "https://6918349021a96359486f1dee.mockapi.io/api/menues";

/// Plan-history endpoint shared with the web front-end.
pub const DEFAULT_PLANS_URL: &str = "https://693d0c12f55f1be79301c5ef.mockapi.io/user_plans";

/// Client for the published daily menu list.
#[derive(Debug)]
pub struct MenuApi {
    base_url: String,
    client: Client,
}

impl MenuApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Fetch the full menu list.
    pub fn fetch_menu(&self) -> Result<Vec<MenuItem>> {
        debug!("GET {}", self.base_url);
        let items: Vec<MenuItem> = self
            .client
            .get(&self.base_url)
            .send()?
            .error_for_status()?
            .json()?;
        debug!("fetched {} menu items", items.len());
        Ok(items)
    }
}

/// Client for the plan-history backend.
#[derive(Debug)]
pub struct PlanApi {
    base_url: String,
    client: Client,
}

impl PlanApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Save a new plan record stamped with the current time.
    ///
    /// Returns the record as stored, with its backend-assigned id.
    pub fn create(&self, user_id: &str, result: &Recommendation) -> Result<PlanRecord> {
        let record = PlanRecord::new(user_id, result.clone());
        debug!("POST {}", self.base_url);
        let saved: PlanRecord = self
            .client
            .post(&self.base_url)
            .json(&record)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(saved)
    }

    /// All plans saved under a user id, newest first.
    ///
    /// The backend answers 404 when the filter matches nothing; that is an
    /// empty history, not an error.
    pub fn list_for_user(&self, user_id: &str) -> Result<Vec<PlanRecord>> {
        debug!("GET {} for user {}", self.base_url, user_id);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("userId", user_id)])
            .send()?;

        if response.status() == StatusCode::NOT_FOUND {
            warn!("history backend answered 404 for user {}", user_id);
            return Ok(Vec::new());
        }

        let mut plans: Vec<PlanRecord> = response.error_for_status()?.json()?;
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!("fetched {} plans", plans.len());
        Ok(plans)
    }

    /// Delete one plan record by id.
    pub fn delete(&self, id: &str) -> Result<()> {
        let url = format!("{}/{}", self.base_url, id);
        debug!("DELETE {}", url);
        self.client.delete(&url).send()?.error_for_status()?;
        Ok(())
    }

    /// Replace a record's memo by PUTting the full record back.
    ///
    /// An empty memo clears the field. Returns the record as stored.
    pub fn update_memo(&self, record: &PlanRecord, memo: &str) -> Result<PlanRecord> {
        let id = record
            .id
            .as_deref()
            .ok_or_else(|| MealError::InvalidInput("Plan record has no id".to_string()))?;

        let mut updated = record.clone();
        // The backend merges PUT bodies, so clearing must still send the
        // memo key (as an empty string) rather than dropping it.
        updated.memo = Some(memo.trim().to_string());

        let url = format!("{}/{}", self.base_url, id);
        debug!("PUT {}", url);
        let mut saved: PlanRecord = self
            .client
            .put(&url)
            .json(&updated)
            .send()?
            .error_for_status()?
            .json()?;
        if saved.memo.as_deref().is_some_and(str::is_empty) {
            saved.memo = None;
        }
        Ok(saved)
    }
}
