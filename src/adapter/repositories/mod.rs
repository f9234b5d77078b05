//! Repository Implementations
//!
//! Domain層のRepository traitの具体的な実装

pub mod json_scenario_repository;
pub mod sample_scenario_repository;
