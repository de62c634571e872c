//! Family member entity model
//!
//! A `FamilyMember` is one person in a family tree. Its only relational
//! information is numeric: up to two parent ids and a list of partner ids,
//! all of which refer to other members of the same tree.

use crate::models::traits::EntityModel;
use crate::models::types::{Gender, MemberId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Partner ids of a member. Most members have at most two.
pub type PartnerIds = SmallVec<[MemberId; 2]>;

/// Core member entity representing a person in a family tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    /// Identifier, unique within the tree
    pub id: MemberId,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Birth date, if known
    pub birthday: Option<NaiveDate>,
    /// Death date; absent for living members or when unknown
    pub date_of_death: Option<NaiveDate>,
    /// Gender of the member
    pub gender: Gender,
    /// First parent slot
    pub primary_parent_id: Option<MemberId>,
    /// Second parent slot
    pub secondary_parent_id: Option<MemberId>,
    /// Partner ids
    #[serde(default)]
    pub partners: PartnerIds,
}

impl FamilyMember {
    /// Create a new member with minimal required information
    #[must_use]
    pub fn new(
        id: MemberId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthday: None,
            date_of_death: None,
            gender,
            primary_parent_id: None,
            secondary_parent_id: None,
            partners: PartnerIds::new(),
        }
    }

    /// Set both parent slots
    #[must_use]
    pub fn with_parents(mut self, primary: Option<MemberId>, secondary: Option<MemberId>) -> Self {
        self.primary_parent_id = primary;
        self.secondary_parent_id = secondary;
        self
    }

    /// Set the partner ids
    #[must_use]
    pub fn with_partners<I>(mut self, partners: I) -> Self
    where
        I: IntoIterator<Item = MemberId>,
    {
        self.partners = partners.into_iter().collect();
        self
    }

    /// Set birth and death dates
    #[must_use]
    pub fn with_dates(mut self, birthday: Option<NaiveDate>, date_of_death: Option<NaiveDate>) -> Self {
        self.birthday = birthday;
        self.date_of_death = date_of_death;
        self
    }

    /// Full display name: first and last name joined by a single space
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether no death date is recorded
    #[must_use]
    pub fn is_living(&self) -> bool {
        self.date_of_death.is_none()
    }

    /// Whether `id` occupies either parent slot
    #[must_use]
    pub fn has_parent(&self, id: MemberId) -> bool {
        self.primary_parent_id == Some(id) || self.secondary_parent_id == Some(id)
    }

    /// Copy of this member with the two parent slots exchanged
    #[must_use]
    pub fn with_swapped_parents(&self) -> Self {
        Self {
            primary_parent_id: self.secondary_parent_id,
            secondary_parent_id: self.primary_parent_id,
            ..self.clone()
        }
    }
}

impl EntityModel for FamilyMember {
    type Id = MemberId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
