//! Selection and highlight state of the relationship table

use crate::models::{EditOutcome, MemberId};

/// Which single member, if any, the table is focused on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing selected
    #[default]
    Idle,
    /// A member is highlighted
    Selected(MemberId),
    /// A member is open in the edit surface
    Editing(MemberId),
}

impl SelectionState {
    /// Highlight a member, replacing any previous highlight
    ///
    /// Ignored while an editor is open.
    pub fn select(&mut self, id: MemberId) {
        if !self.is_editing() {
            *self = Self::Selected(id);
        }
    }

    /// Drop the highlight
    pub fn clear(&mut self) {
        if !self.is_editing() {
            *self = Self::Idle;
        }
    }

    /// Open a member in the edit surface
    pub fn begin_edit(&mut self, id: MemberId) {
        *self = Self::Editing(id);
    }

    /// Close the editor and report whether a reload is due
    ///
    /// Returns `None` when no editor was open. A stray completion with no
    /// open editor is dropped, so it never causes a reload, even when it
    /// reports `Changed`.
    pub fn finish_edit(&mut self, outcome: EditOutcome) -> Option<EditOutcome> {
        match *self {
            Self::Editing(_) => {
                *self = Self::Idle;
                Some(outcome)
            }
            _ => None,
        }
    }

    /// Highlighted member
    #[must_use]
    pub const fn selected(&self) -> Option<MemberId> {
        match *self {
            Self::Selected(id) => Some(id),
            _ => None,
        }
    }

    /// Member open in the editor
    #[must_use]
    pub const fn editing(&self) -> Option<MemberId> {
        match *self {
            Self::Editing(id) => Some(id),
            _ => None,
        }
    }

    /// Whether an editor is open
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}
