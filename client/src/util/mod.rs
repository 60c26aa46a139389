//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod camera;
pub mod heartbeat;
pub mod page;
pub mod poll;
pub mod theme;
pub mod unload;
