// Query port for the talk catalog.
//
// Purpose
// - Abstract catalog access so inbound adapters never touch storage directly.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::talks::core::model::{Speaker, Talk};

/// Errors a lookup can signal. Display strings double as the user-facing
/// `message` bodies, so they name the lookup that failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Talk with ID '{0}' not found.")]
    TalkNotFound(String),

    #[error("No talks found for category: {0}")]
    NoTalksInCategory(String),

    #[error("No talks found for speaker containing: {0}")]
    NoTalksBySpeaker(String),

    #[error("No talks found with title containing: '{0}'")]
    NoTalksWithTitle(String),

    #[error("Please provide a 'name' query parameter for the speaker.")]
    MissingSpeakerQuery,

    #[error("Please provide a 'title' query parameter to search.")]
    MissingTitleQuery,
}

#[async_trait]
pub trait TalkQueries {
    /// Every talk, in load order.
    async fn list_all(&self) -> Vec<Talk>;

    /// First talk whose id matches exactly.
    async fn get_by_id(&self, talk_id: &str) -> Result<Talk, QueryError>;

    /// Talks carrying the category token (case-insensitive equality).
    async fn list_by_category(&self, category: &str) -> Result<Vec<Talk>, QueryError>;

    /// Talks with a speaker whose name contains the query. An empty query is
    /// a bad request, not an empty search.
    async fn list_by_speaker(&self, query: &str) -> Result<Vec<Talk>, QueryError>;

    /// Talks whose title contains the query. An empty query is a bad request.
    async fn search_by_title(&self, query: &str) -> Result<Vec<Talk>, QueryError>;

    /// Unique category strings, sorted, original casing preserved.
    async fn distinct_categories(&self) -> Vec<String>;

    /// Unique speakers sorted by (last name, first name).
    async fn distinct_speakers(&self) -> Vec<Speaker>;
}
