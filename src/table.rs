//! Relationship table
//!
//! Turns a canonical member collection into display rows and drives the
//! table's load, highlight and edit cycle.

use crate::collections::MemberCollection;
use crate::config::FamilyTableConfig;
use crate::error::{FamilyTableError, Result};
use crate::models::{EditOutcome, FamilyMember, Gender, MemberId, TreeId};
use crate::resolve::{MISSING_NAME, resolve_display_name, resolve_member};
use crate::selection::SelectionState;
use crate::source::MemberSource;
use crate::store::RecordStore;
use chrono::NaiveDate;
use itertools::Itertools;
use log::{debug, info};
use std::fmt::Write as _;
use std::sync::Arc;

/// One row of the relationship table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub id: MemberId,
    pub full_name: String,
    pub birthday: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub gender: Gender,
    /// Display name of the primary parent slot
    pub primary_parent: String,
    /// Display name of the secondary parent slot
    pub secondary_parent: String,
    /// Partner display names joined with the configured separator
    pub partners: String,
}

impl MemberRow {
    /// Build the row of one member
    #[must_use]
    pub fn new(member: &FamilyMember, collection: &MemberCollection, config: &FamilyTableConfig) -> Self {
        let partners = if member.partners.is_empty() {
            MISSING_NAME.to_string()
        } else {
            member
                .partners
                .iter()
                .map(|id| resolve_display_name(Some(*id), collection))
                .join(&config.partner_separator)
        };

        Self {
            id: member.id,
            full_name: member.full_name(),
            birthday: member.birthday,
            date_of_death: member.date_of_death,
            gender: member.gender,
            primary_parent: resolve_display_name(member.primary_parent_id, collection),
            secondary_parent: resolve_display_name(member.secondary_parent_id, collection),
            partners,
        }
    }
}

/// Rows for every member, in source order
#[must_use]
pub fn build_rows(collection: &MemberCollection, config: &FamilyTableConfig) -> Vec<MemberRow> {
    collection
        .iter()
        .map(|member| MemberRow::new(member, collection, config))
        .collect()
}

/// Render rows as tab separated text with a header line
#[must_use]
pub fn render_rows(rows: &[MemberRow]) -> String {
    let format_date = |date: Option<NaiveDate>| {
        date.map_or_else(|| MISSING_NAME.to_string(), |d| d.format("%Y-%m-%d").to_string())
    };

    let mut out = String::from("id\tname\tbirthday\tdate of death\tgender\tparent 1\tparent 2\tpartners\n");
    for row in rows {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.id,
            row.full_name,
            format_date(row.birthday),
            format_date(row.date_of_death),
            row.gender,
            row.primary_parent,
            row.secondary_parent,
            row.partners
        );
    }
    out
}

/// Controller for one relationship table view
///
/// Owns the record store and the selection state, and reacts to tree
/// changes and edit completions from its collaborators.
pub struct FamilyTable<S: MemberSource> {
    store: RecordStore<S>,
    selection: SelectionState,
    config: FamilyTableConfig,
    tree_id: Option<TreeId>,
}

impl<S: MemberSource> FamilyTable<S> {
    /// Create a table over a member source. Nothing is loaded yet.
    pub fn new(source: S, config: FamilyTableConfig) -> Self {
        let store = RecordStore::new(source).with_swap_logging(config.log_swaps);
        Self {
            store,
            selection: SelectionState::Idle,
            config,
            tree_id: None,
        }
    }

    /// Switch to a tree, loading it when it differs from the current one
    pub async fn set_tree(&mut self, tree_id: TreeId) -> Result<()> {
        if self.tree_id == Some(tree_id) && self.store.tree_id() == Some(tree_id) {
            debug!("Tree {tree_id} already loaded");
            return Ok(());
        }
        self.tree_id = Some(tree_id);
        self.reload().await.map(|_| ())
    }

    /// Load the current tree again from the member source
    pub async fn reload(&mut self) -> Result<Arc<MemberCollection>> {
        let tree_id = self
            .tree_id
            .ok_or_else(|| FamilyTableError::Config("no tree selected".to_string()))?;
        self.store.load(tree_id).await
    }

    /// Highlight a member row
    pub fn highlight(&mut self, id: MemberId) {
        self.selection.select(id);
    }

    /// Remove the highlight
    pub fn clear_highlight(&mut self) {
        self.selection.clear();
    }

    /// Open a member in the edit surface
    pub fn begin_edit(&mut self, id: MemberId) {
        self.selection.begin_edit(id);
    }

    /// Close the editor; a `Changed` outcome reloads the whole tree
    ///
    /// Returns whether a reload happened. Only a completion for an open
    /// editor can reload: `Changed` arriving while no member is being
    /// edited is ignored and returns `false`.
    pub async fn finish_edit(&mut self, outcome: impl Into<EditOutcome>) -> Result<bool> {
        match self.selection.finish_edit(outcome.into()) {
            Some(EditOutcome::Changed) => {
                info!("Member edit saved, reloading tree {:?}", self.tree_id);
                self.reload().await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Current selection state
    #[must_use]
    pub const fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Tree the table is showing or about to show
    #[must_use]
    pub const fn tree_id(&self) -> Option<TreeId> {
        self.tree_id
    }

    /// Snapshot of the installed collection
    #[must_use]
    pub fn collection(&self) -> Option<Arc<MemberCollection>> {
        self.store.collection()
    }

    /// Look up a member of the installed collection
    #[must_use]
    pub fn member(&self, id: MemberId) -> Option<&FamilyMember> {
        self.store.get(id)
    }

    /// Display name for a reference against the installed collection
    #[must_use]
    pub fn display_name(&self, id: Option<MemberId>) -> String {
        match self.store.collection() {
            Some(collection) => resolve_display_name(id, &collection),
            None => MISSING_NAME.to_string(),
        }
    }

    /// Member currently open in the editor, if it still resolves
    #[must_use]
    pub fn editing_member(&self) -> Option<FamilyMember> {
        let collection = self.store.collection()?;
        resolve_member(self.selection.editing(), &collection).cloned()
    }

    /// Rows of the installed collection; empty before the first load
    #[must_use]
    pub fn rows(&self) -> Vec<MemberRow> {
        self.store
            .collection()
            .map(|collection| build_rows(&collection, &self.config))
            .unwrap_or_default()
    }

    /// The underlying record store
    pub const fn store(&self) -> &RecordStore<S> {
        &self.store
    }
}
