//! Member sources
//!
//! A member source delivers the raw member records of one tree. It is the
//! only asynchronous boundary of the crate and the only place a load can
//! fail.

use crate::error::{FamilyTableError, Result};
use crate::models::date_utils::DateFormatConfig;
use crate::models::{FamilyMember, FamilyMemberListDto, TreeId};
use futures::future::BoxFuture;
use log::debug;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Core trait for asynchronous member loading
pub trait MemberSource: Send + Sync {
    /// Fetch every member of a tree
    fn fetch_members(&self, tree_id: TreeId) -> BoxFuture<'_, Result<Vec<FamilyMember>>>;
}

/// In-memory member source, keyed by tree id
///
/// Trees can be replaced between fetches and a failure can be armed for a
/// tree, which makes the source useful for exercising reload behaviour.
#[derive(Debug, Default)]
pub struct InMemorySource {
    trees: Mutex<FxHashMap<TreeId, Vec<FamilyMember>>>,
    failures: Mutex<FxHashMap<TreeId, String>>,
    fetch_count: Mutex<usize>,
}

impl InMemorySource {
    /// Create an empty source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source holding a single tree
    #[must_use]
    pub fn with_tree(tree_id: TreeId, members: Vec<FamilyMember>) -> Self {
        let source = Self::new();
        source.set_tree(tree_id, members);
        source
    }

    /// Replace the members of a tree
    pub fn set_tree(&self, tree_id: TreeId, members: Vec<FamilyMember>) {
        if let Ok(mut trees) = self.trees.lock() {
            trees.insert(tree_id, members);
        }
    }

    /// Make every following fetch of `tree_id` fail with `message`
    pub fn fail_tree(&self, tree_id: TreeId, message: impl Into<String>) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.insert(tree_id, message.into());
        }
    }

    /// Number of fetches served so far, failed ones included
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.lock().map_or(0, |count| *count)
    }

    fn fetch_now(&self, tree_id: TreeId) -> Result<Vec<FamilyMember>> {
        if let Ok(mut count) = self.fetch_count.lock() {
            *count += 1;
        }

        let failures = self
            .failures
            .lock()
            .map_err(|_| FamilyTableError::source_load(tree_id, "failure table poisoned"))?;
        if let Some(message) = failures.get(&tree_id) {
            return Err(FamilyTableError::source_load(tree_id, message.clone()));
        }
        drop(failures);

        let trees = self
            .trees
            .lock()
            .map_err(|_| FamilyTableError::source_load(tree_id, "tree table poisoned"))?;
        trees
            .get(&tree_id)
            .cloned()
            .ok_or_else(|| FamilyTableError::source_load(tree_id, "The family tree doesn't exist"))
    }
}

impl MemberSource for InMemorySource {
    fn fetch_members(&self, tree_id: TreeId) -> BoxFuture<'_, Result<Vec<FamilyMember>>> {
        Box::pin(async move { self.fetch_now(tree_id) })
    }
}

/// Member source reading `<data_dir>/<tree_id>.json` files
///
/// Each file holds a member list payload in the server's wire format.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    data_dir: PathBuf,
    date_format_config: DateFormatConfig,
}

impl JsonFileSource {
    /// Create a source rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>, date_format_config: DateFormatConfig) -> Self {
        Self {
            data_dir: data_dir.into(),
            date_format_config,
        }
    }

    /// Directory the source reads from
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file holding a tree
    #[must_use]
    pub fn tree_path(&self, tree_id: TreeId) -> PathBuf {
        self.data_dir.join(format!("{tree_id}.json"))
    }

    async fn read_tree(&self, tree_id: TreeId) -> Result<Vec<FamilyMember>> {
        let path = self.tree_path(tree_id);
        debug!("Reading members of tree {tree_id} from {}", path.display());

        let payload = tokio::fs::read_to_string(&path).await.map_err(|e| {
            FamilyTableError::source_load(tree_id, format!("{}: {e}", path.display()))
        })?;

        FamilyMemberListDto::from_json(&payload)
            .and_then(|list| list.into_members(&self.date_format_config))
            .map_err(|e| FamilyTableError::source_load(tree_id, format!("{}: {e}", path.display())))
    }
}

impl MemberSource for JsonFileSource {
    fn fetch_members(&self, tree_id: TreeId) -> BoxFuture<'_, Result<Vec<FamilyMember>>> {
        Box::pin(self.read_tree(tree_id))
    }
}
