//! Command implementations

pub mod diagnose;
pub mod verify;
pub mod version;
