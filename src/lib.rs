//! Trackforged - split downloaded audio into labeled tracks
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod processor;
pub mod source;
