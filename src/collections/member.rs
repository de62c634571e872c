//! Member collection
//!
//! Members of one family tree, indexed by id for constant-time resolution
//! while remembering the order in which the source delivered them.

use crate::collections::ModelCollection;
use crate::models::{EntityModel, FamilyMember, Gender, MemberId, TreeId};
use log::warn;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// The members of one family tree
///
/// Identifiers are expected to be unique. When a source delivers the same
/// id twice, every record is still kept as a row, but lookups by id
/// resolve to the first one.
#[derive(Debug, Default, Clone)]
pub struct MemberCollection {
    /// Tree the members belong to, when known
    tree_id: Option<TreeId>,
    /// First record of each id
    by_id: FxHashMap<MemberId, Arc<FamilyMember>>,
    /// Every record in source order
    records: Vec<Arc<FamilyMember>>,
}

impl MemberCollection {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from members in source order
    #[must_use]
    pub fn from_members(members: Vec<FamilyMember>) -> Self {
        let mut collection = Self::new();
        collection.by_id.reserve(members.len());
        collection.records.reserve(members.len());
        collection.add_all(members);
        collection
    }

    /// Create a collection for a tree from members in source order
    #[must_use]
    pub fn for_tree(tree_id: TreeId, members: Vec<FamilyMember>) -> Self {
        let mut collection = Self::new().with_tree_id(tree_id);
        collection.add_all(members);
        collection
    }

    /// Tag the collection with the tree it was loaded for
    #[must_use]
    pub fn with_tree_id(mut self, tree_id: TreeId) -> Self {
        self.tree_id = Some(tree_id);
        self
    }

    /// Tree the members belong to
    #[must_use]
    pub const fn tree_id(&self) -> Option<TreeId> {
        self.tree_id
    }

    /// Borrow a member by id
    #[must_use]
    pub fn member(&self, id: MemberId) -> Option<&FamilyMember> {
        self.by_id.get(&id).map(Arc::as_ref)
    }

    /// Iterate every record in source order, duplicates included
    pub fn iter(&self) -> impl Iterator<Item = &FamilyMember> + '_ {
        self.records.iter().map(Arc::as_ref)
    }

    /// Record ids in source order
    #[must_use]
    pub fn ids(&self) -> Vec<MemberId> {
        self.records.iter().map(|member| member.id).collect()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Members that reference `id` in either parent slot
    #[must_use]
    pub fn children_of(&self, id: MemberId) -> Vec<&FamilyMember> {
        self.iter().filter(|member| member.has_parent(id)).collect()
    }

    /// Resolved partner records of a member, skipping dangling ids
    #[must_use]
    pub fn partners_of(&self, id: MemberId) -> Vec<&FamilyMember> {
        self.member(id)
            .map(|member| {
                member
                    .partners
                    .iter()
                    .filter_map(|partner_id| self.member(*partner_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Members of a specific gender, in source order
    #[must_use]
    pub fn by_gender(&self, gender: Gender) -> Vec<&FamilyMember> {
        self.iter().filter(|member| member.gender == gender).collect()
    }

    /// Whether the member exists and has no recorded death date
    #[must_use]
    pub fn is_living(&self, id: MemberId) -> bool {
        self.member(id).is_some_and(FamilyMember::is_living)
    }
}

impl ModelCollection<FamilyMember> for MemberCollection {
    fn add(&mut self, member: FamilyMember) {
        let member = Arc::new(member);
        let id = member.id();
        if self.by_id.contains_key(&id) {
            warn!(
                "Duplicate member id {id} in tree {:?}; lookups resolve to the first record",
                self.tree_id
            );
        } else {
            self.by_id.insert(id, Arc::clone(&member));
        }
        self.records.push(member);
    }

    fn get(&self, id: &MemberId) -> Option<Arc<FamilyMember>> {
        self.by_id.get(id).cloned()
    }
}
