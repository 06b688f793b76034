//! `backoffice-api` — HTTP enforcement layer.
//!
//! The request guard in [`middleware`] is the sole authorization
//! enforcement point: every protected request passes through it before any
//! handler runs, and handlers never re-check.

pub mod app;
pub mod context;
pub mod middleware;
pub mod registry;
