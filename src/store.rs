//! Record store
//!
//! Holds the canonical member collection of the tree currently on display.
//! A load fetches from the member source, canonicalizes the whole response
//! and only then installs it, replacing the previous collection in one
//! step. A failed load installs nothing.

use crate::canonical::canonicalize;
use crate::collections::MemberCollection;
use crate::error::Result;
use crate::models::{FamilyMember, MemberId, TreeId};
use crate::source::MemberSource;
use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;

/// The installed collection of one tree
pub struct RecordStore<S: MemberSource> {
    source: S,
    log_swaps: bool,
    current: Option<Arc<MemberCollection>>,
    generation: u64,
}

impl<S: MemberSource> RecordStore<S> {
    /// Create an empty store over a member source
    pub fn new(source: S) -> Self {
        Self {
            source,
            log_swaps: true,
            current: None,
            generation: 0,
        }
    }

    /// Enable or disable per-swap debug logging during loads
    #[must_use]
    pub fn with_swap_logging(mut self, log_swaps: bool) -> Self {
        self.log_swaps = log_swaps;
        self
    }

    /// Fetch, canonicalize and install the members of a tree
    ///
    /// On failure the previously installed collection stays in place and
    /// the error is returned unchanged.
    pub async fn load(&mut self, tree_id: TreeId) -> Result<Arc<MemberCollection>> {
        let start = Instant::now();

        let members = match self.source.fetch_members(tree_id).await {
            Ok(members) => members,
            Err(e) => {
                warn!("Loading tree {tree_id} failed, keeping previous members: {e}");
                return Err(e);
            }
        };

        let source = MemberCollection::for_tree(tree_id, members);
        let collection = Arc::new(canonicalize(&source, self.log_swaps));
        self.current = Some(Arc::clone(&collection));
        self.generation += 1;

        info!(
            "Loaded {} members of tree {tree_id} in {:?}",
            collection.len(),
            start.elapsed()
        );

        Ok(collection)
    }

    /// Look up a member of the installed collection
    #[must_use]
    pub fn get(&self, id: MemberId) -> Option<&FamilyMember> {
        self.current.as_deref().and_then(|members| members.member(id))
    }

    /// Snapshot of the installed collection
    #[must_use]
    pub fn collection(&self) -> Option<Arc<MemberCollection>> {
        self.current.clone()
    }

    /// Tree of the installed collection
    #[must_use]
    pub fn tree_id(&self) -> Option<TreeId> {
        self.current.as_deref().and_then(MemberCollection::tree_id)
    }

    /// Number of successful loads so far
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The underlying member source
    pub const fn source(&self) -> &S {
        &self.source
    }
}
