//! Parent pair canonicalization
//!
//! Puts a member's two parents into a fixed slot order for display: when
//! the primary slot holds a female parent and the secondary slot a male
//! parent, the slots are exchanged. Every other combination is left alone,
//! including same-gender pairs, unknown genders and unresolvable parents.
//!
//! Each member is decided against the untouched source collection, so the
//! pass is a pure map whose result does not depend on processing order.

use crate::collections::MemberCollection;
use crate::models::{FamilyMember, Gender};
use crate::resolve::resolve_member;
use log::debug;

/// Whether the member's parent slots must be exchanged
#[must_use]
pub fn needs_parent_swap(member: &FamilyMember, source: &MemberCollection) -> bool {
    let Some(primary) = resolve_member(member.primary_parent_id, source) else {
        return false;
    };
    let Some(secondary) = resolve_member(member.secondary_parent_id, source) else {
        return false;
    };

    primary.gender == Gender::Female && secondary.gender == Gender::Male
}

/// Canonical form of one member
///
/// Returns a new record; the member and the source collection are only
/// borrowed.
#[must_use]
pub fn canonicalize_member(member: &FamilyMember, source: &MemberCollection) -> FamilyMember {
    if needs_parent_swap(member, source) {
        member.with_swapped_parents()
    } else {
        member.clone()
    }
}

/// Canonicalize every member of a collection
///
/// The result keeps the source order of ids. `log_swaps` emits one debug
/// line per exchanged pair.
#[must_use]
pub fn canonicalize(source: &MemberCollection, log_swaps: bool) -> MemberCollection {
    let mut swapped = 0usize;

    let members: Vec<FamilyMember> = source
        .iter()
        .map(|member| {
            let canonical = canonicalize_member(member, source);
            if canonical.primary_parent_id != member.primary_parent_id {
                swapped += 1;
                if log_swaps {
                    debug!(
                        "Member {}: parents reordered from ({:?}, {:?}) to ({:?}, {:?})",
                        member.id,
                        member.primary_parent_id,
                        member.secondary_parent_id,
                        canonical.primary_parent_id,
                        canonical.secondary_parent_id
                    );
                }
            }
            canonical
        })
        .collect();

    debug!("Canonicalized {} members, {} parent pairs reordered", members.len(), swapped);

    let canonical = MemberCollection::from_members(members);
    match source.tree_id() {
        Some(tree_id) => canonical.with_tree_id(tree_id),
        None => canonical,
    }
}

/// Build a canonical collection straight from raw source records
#[must_use]
pub fn canonicalize_members(members: Vec<FamilyMember>, log_swaps: bool) -> MemberCollection {
    canonicalize(&MemberCollection::from_members(members), log_swaps)
}
