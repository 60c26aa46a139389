//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components own their browser side effects (timers, camera, storage) and
//! read shared state from context; pages compose them.

pub mod face_capture;
pub mod flash;
pub mod roster_table;
pub mod session_controls;
pub mod theme_toggle;
