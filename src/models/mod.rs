//! Domain models for family tree display
//!
//! This module contains the member entity, its wire representation and the
//! shared enum types.

pub mod date_utils;
pub mod dto;
pub mod member;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use dto::{FamilyMemberListDto, FamilyMemberResponseDto, FamilyTree, FamilyTreeResponseDto};
pub use member::{FamilyMember, PartnerIds};
pub use traits::EntityModel;
pub use types::{EditOutcome, Gender, MemberId, TreeId};
