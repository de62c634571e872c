//! Reference resolution
//!
//! Maps member ids to records and display names. A missing id is routine
//! data: it resolves to `None` or to [`MISSING_NAME`], never to an error.
//! Resolution is always a single lookup, so cyclic ancestry cannot loop.

use crate::collections::MemberCollection;
use crate::models::{FamilyMember, MemberId};

/// Display name used when a reference is absent or unresolvable
pub const MISSING_NAME: &str = "-";

/// Look up a member by id
///
/// An absent id (`None`) resolves exactly like an id that is not present.
#[must_use]
pub fn resolve_member(id: Option<MemberId>, collection: &MemberCollection) -> Option<&FamilyMember> {
    id.and_then(|id| collection.member(id))
}

/// Display name of the referenced member, or [`MISSING_NAME`]
#[must_use]
pub fn resolve_display_name(id: Option<MemberId>, collection: &MemberCollection) -> String {
    resolve_member(id, collection).map_or_else(|| MISSING_NAME.to_string(), FamilyMember::full_name)
}
