//! Irrigation decision support for smallholder farms.
//!
//! Turns a weather snapshot, an optional reference ET0 and a field
//! description into a day-by-day irrigation plan, an urgency
//! recommendation and heat alerts. Every computation is a pure function of
//! its inputs.

pub mod config;
pub mod datasources;
pub mod error;
pub mod logic;
pub mod models;
pub mod render;

pub use error::{IrriplanError, Result};
pub use logic::{PlanGenerator, RecommendationScorer};
