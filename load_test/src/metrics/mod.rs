// Metrics module
// Request metrics come from goose; this covers the generator host and reporting

pub mod monitor;
pub mod reporter;
pub mod types;
