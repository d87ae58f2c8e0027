pub mod app_state_builder;
pub mod fixtures;
pub mod overview_sources;
pub mod stubs;
