// Composition root for the talks context.
//
// Responsibilities:
// - Wire the loaded catalog into the shared application state.
// - Map HTTP routes onto the query use cases.
// - Serve the static frontend next to the API.

pub mod http;
pub mod state;
