//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Login and registration pages are plain HTML forms posted
//! to the server, which redirects back with a flash message.

pub mod admin_dashboard;
pub mod admin_login;
pub mod admin_register;
pub mod home;
pub mod student_dashboard;
pub mod student_login;
pub mod student_register;
