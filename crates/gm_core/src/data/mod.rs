//! Read-only reference data.
//!
//! The shell treats these catalogs as injected configuration: core functions
//! never reach for them internally, they only consume what the caller passes
//! in.

pub mod embedded;

pub use embedded::{draft_class, free_agent_class, play_catalog};
