pub mod commands;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use crate::core::aggregator::{CombineReport, TextAggregator};
pub use crate::error::{AggregateError, FileFailure};
pub use crate::models::config::CombineConfig;
