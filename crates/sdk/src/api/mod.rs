//! Typed groups of machine API endpoints.

pub mod machine;
pub mod shots;

pub use machine::MachineApi;
pub use shots::ShotsApi;
