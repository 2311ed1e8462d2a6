use crate::domain::model::SurveyRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence collaborator for completed survey records.
#[async_trait]
pub trait SurveyStore: Send + Sync {
    async fn insert(&self, record: &SurveyRecord) -> Result<()>;
}

/// Per-user "completed" flag. Once set, the host suppresses future
/// presentation of the questionnaire to that user. Modeled as an explicit
/// query rather than ambient session state.
#[async_trait]
pub trait CompletionStore: Send + Sync {
    async fn has_completed(&self, userid: i64) -> Result<bool>;
    async fn mark_completed(&self, userid: i64) -> Result<()>;
}

/// Interest-tag collaborator on the user profile.
#[async_trait]
pub trait InterestTagStore: Send + Sync {
    /// Adds the tag to the user's interests as a single atomic operation when
    /// it is not already present. Returns `true` when the tag was newly added.
    async fn add_interest_if_absent(&self, userid: i64, tag: &str) -> Result<bool>;
}
