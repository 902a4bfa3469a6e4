//! Embedded reference datasets.
//!
//! `include_str!` pulls the JSON catalogs into the binary at compile time, so
//! there is no file I/O at runtime. Each dataset is parsed on first access
//! and cached. Callers receive shared slices; the core never mutates
//! reference data.

use std::sync::OnceLock;

use crate::models::{DraftProspect, Play, Player};

/// Offensive play-call menu (~1KB).
pub const PLAY_CATALOG_JSON: &str = include_str!("../../../../data/plays.json");

/// Free-agent market seed data (~4KB).
pub const FREE_AGENT_CLASS_JSON: &str = include_str!("../../../../data/free_agents.json");

/// Incoming draft class (~2KB).
pub const DRAFT_CLASS_JSON: &str = include_str!("../../../../data/draft_class.json");

static PLAY_CATALOG: OnceLock<Vec<Play>> = OnceLock::new();
static FREE_AGENT_CLASS: OnceLock<Vec<Player>> = OnceLock::new();
static DRAFT_CLASS: OnceLock<Vec<DraftProspect>> = OnceLock::new();

/// The offensive play-call menu.
///
/// Panics only if the embedded JSON is malformed, which is a build defect
/// caught by the test suite, not a runtime condition.
pub fn play_catalog() -> &'static [Play] {
    PLAY_CATALOG
        .get_or_init(|| serde_json::from_str(PLAY_CATALOG_JSON).expect("embedded play catalog"))
}

/// The free-agent class: unsigned players carrying contract demands.
pub fn free_agent_class() -> &'static [Player] {
    FREE_AGENT_CLASS.get_or_init(|| {
        serde_json::from_str(FREE_AGENT_CLASS_JSON).expect("embedded free-agent class")
    })
}

/// The incoming draft class.
pub fn draft_class() -> &'static [DraftProspect] {
    DRAFT_CLASS
        .get_or_init(|| serde_json::from_str(DRAFT_CLASS_JSON).expect("embedded draft class"))
}
