//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (requests, redirects, local
//! form state) and delegates rendering details to `components`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
