//! Reactive application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is created once in `App` and handed to pages as a prop; `analysis`
//! is page-local to the analyze screen.

pub mod analysis;
pub mod auth;
