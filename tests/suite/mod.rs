//! Integration test modules

mod config_driven;
mod legacy_data;
mod placement_flow;
mod sample_ranking;
