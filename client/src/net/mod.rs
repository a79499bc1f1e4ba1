//! Networking: REST calls to the analysis backend.

pub mod api;
