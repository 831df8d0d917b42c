use std::sync::Arc;

use crate::modules::talks::queries_port::TalkQueries;

#[derive(Clone)]
pub struct AppState {
    pub talks: Arc<dyn TalkQueries + Send + Sync>,
}
