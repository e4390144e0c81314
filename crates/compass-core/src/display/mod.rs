//! Display formatting for planner state and operation outcomes.
//!
//! Domain models carry `Display` implementations producing markdown
//! ([`models`]), and newtype wrappers format collections and operation
//! outcomes ([`collections`], [`results`]). The engine and controller never
//! format anything themselves; consumers pick the wrapper that matches their
//! context and render the markdown however they like (the CLI pipes it
//! through a terminal renderer).

pub mod collections;
pub mod models;
pub mod results;

// Re-export commonly used types for convenience
pub use collections::{SelectionView, SemesterSummaries};
pub use results::OperationStatus;
