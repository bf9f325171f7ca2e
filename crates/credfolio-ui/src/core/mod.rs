//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth_layout;
pub mod config;
pub mod empty_state;
pub mod error;
pub mod selection;
pub mod strength;
pub mod theme;
