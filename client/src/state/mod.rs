//! Reactive application state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each state struct is plain data wrapped in an `RwSignal` by `App` (or by
//! the page that owns it). Transition logic lives on the structs so it can be
//! tested without a browser.

pub mod auth;
pub mod capture;
pub mod students;
pub mod ui;
