//! Daily Report Studio - GUI Library
//!
//! This module exposes internal state and services for testing.

pub mod app;
pub mod menu;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;
