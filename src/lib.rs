// Capsule analytics: deterministic text analytics over short documents
//
// This is the library root. Each module corresponds to one subsystem of the
// engine; `engine::AnalyticsEngine` ties them together.

pub mod config;
pub mod engagement;
pub mod engine;
pub mod error;
pub mod moderation;
pub mod output;
pub mod reports;
pub mod sentiment;
pub mod text;
pub mod topics;

pub use engine::{AnalyticsEngine, EngineConfig};
pub use error::{AnalyticsError, Result};
