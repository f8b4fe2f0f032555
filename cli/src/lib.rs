//! Shadow Goose CLI library — exposes modules for integration testing.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod cli;
pub mod commands;
pub mod endpoints;
pub mod output;
pub mod probe;
