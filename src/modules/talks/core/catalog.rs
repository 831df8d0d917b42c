// One-time catalog load.
//
// Purpose
// - Materialize the talk catalog exactly once at process start.
//
// Responsibilities
// - Read and decode the JSON document at the configured path.
// - Degrade to an empty catalog (with a diagnostic) when the document is
//   missing or malformed, so the process keeps serving empty results.

use std::fs;
use std::path::Path;

use crate::modules::talks::core::model::Talk;

pub fn load(path: &Path) -> Vec<Talk> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::error!(
                path = %path.display(),
                %err,
                "talk catalog is unreadable, serving an empty catalog"
            );
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(talks) => talks,
        Err(err) => {
            tracing::error!(
                path = %path.display(),
                %err,
                "talk catalog is not valid JSON, serving an empty catalog"
            );
            Vec::new()
        }
    }
}
