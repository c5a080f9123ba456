pub mod aggregator;
pub mod discovery;
pub mod document;
