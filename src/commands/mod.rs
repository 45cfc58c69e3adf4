//! Command implementations for the freshstart CLI

pub mod completions;
pub mod helpers;
pub mod launch;
pub mod plan;
pub mod status;
pub mod version;
