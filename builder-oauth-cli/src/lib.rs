//! builder-oauth CLI library
//!
//! Commands behind the `builder-oauth` binary, exposed so they can be
//! driven from tests and deployment tooling.

#![forbid(unsafe_code)]

pub mod commands;

pub use commands::{CheckCommand, ConfigSource, ProvidersCommand, ShowCommand};
