// Scenarios module
// Execution profiles, their goose translation, and the runner

pub mod duration;
pub mod plan;
pub mod profile;
pub mod runner;
