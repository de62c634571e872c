//! A Rust library for preparing family tree member records for a
//! relationship table: id resolution, display names and a fixed ordering
//! of each member's two parent slots.

pub mod canonical;
pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod resolve;
pub mod selection;
pub mod source;
pub mod store;
pub mod table;

// Re-export the most common types for easier use
// Core types
pub use config::FamilyTableConfig;
pub use error::{FamilyTableError, Result};
pub use models::{EditOutcome, FamilyMember, Gender, MemberId, TreeId};

// Collections and lookups
pub use collections::{MemberCollection, ModelCollection};
pub use resolve::{MISSING_NAME, resolve_display_name, resolve_member};

// Canonicalization
pub use canonical::{canonicalize, canonicalize_member, canonicalize_members, needs_parent_swap};

// Loading and display
pub use selection::SelectionState;
pub use source::{InMemorySource, JsonFileSource, MemberSource};
pub use store::RecordStore;
pub use table::{FamilyTable, MemberRow, build_rows, render_rows};
