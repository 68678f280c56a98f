// Cover letter core: validation, the template registry, generation and the
// per-session version history. Handlers are the only place that touches AppState.

pub mod formatting;
pub mod generator;
pub mod handlers;
pub mod session;
pub mod stats;
pub mod templates;
pub mod validation;
pub mod versioning;
