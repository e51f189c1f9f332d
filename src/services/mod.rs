//! Business logic services.
//!
//! Services sit between the application state and the generative engine,
//! and own the degradation policies the views rely on.

mod access;
mod ingest;
mod propagation;
mod strategist;
mod visualizer;

pub use access::{BASIC_DAILY_CAPACITY, Feature, can_access, can_render_at, remaining_credits};
pub use ingest::IngestionService;
pub use propagation::{
    AuditCheck, AuditReport, AuditSnapshot, CheckStatus, PropagationService, PushEvent,
};
pub use strategist::StrategistService;
pub use visualizer::VisualizerService;
