// In-memory talk catalog.
//
// Purpose
// - Serve every query from the list materialized at startup.
//
// Responsibilities
// - Hold the loaded talks unchanged for the process lifetime.
// - Delegate matching rules to the core filter functions.
//
// The catalog is immutable after construction, so it needs no lock: any
// number of requests may read it concurrently through an `Arc`.

use async_trait::async_trait;

use crate::modules::talks::core::filter;
use crate::modules::talks::core::model::{Speaker, Talk};
use crate::modules::talks::queries_port::{QueryError, TalkQueries};

pub struct InMemoryTalkCatalog {
    talks: Vec<Talk>,
}

impl InMemoryTalkCatalog {
    pub fn new(talks: Vec<Talk>) -> Self {
        Self { talks }
    }

    pub fn len(&self) -> usize {
        self.talks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.talks.is_empty()
    }
}

#[async_trait]
impl TalkQueries for InMemoryTalkCatalog {
    async fn list_all(&self) -> Vec<Talk> {
        self.talks.clone()
    }

    async fn get_by_id(&self, talk_id: &str) -> Result<Talk, QueryError> {
        filter::find_by_id(&self.talks, talk_id)
            .ok_or_else(|| QueryError::TalkNotFound(talk_id.to_string()))
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Talk>, QueryError> {
        let talks = filter::by_category(&self.talks, category);
        if talks.is_empty() {
            return Err(QueryError::NoTalksInCategory(category.to_string()));
        }
        Ok(talks)
    }

    async fn list_by_speaker(&self, query: &str) -> Result<Vec<Talk>, QueryError> {
        if query.is_empty() {
            return Err(QueryError::MissingSpeakerQuery);
        }
        let talks = filter::by_speaker(&self.talks, query);
        if talks.is_empty() {
            return Err(QueryError::NoTalksBySpeaker(query.to_string()));
        }
        Ok(talks)
    }

    async fn search_by_title(&self, query: &str) -> Result<Vec<Talk>, QueryError> {
        if query.is_empty() {
            return Err(QueryError::MissingTitleQuery);
        }
        let talks = filter::by_title(&self.talks, query);
        if talks.is_empty() {
            return Err(QueryError::NoTalksWithTitle(query.to_string()));
        }
        Ok(talks)
    }

    async fn distinct_categories(&self) -> Vec<String> {
        filter::distinct_categories(&self.talks)
    }

    async fn distinct_speakers(&self) -> Vec<Speaker> {
        filter::distinct_speakers(&self.talks)
    }
}
