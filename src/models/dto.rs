//! Wire representations of family tree data
//!
//! The member source delivers dates as strings and gender as a string
//! literal. These DTOs mirror that shape and convert into the typed
//! domain models at the boundary.

use crate::error::{FamilyTableError, Result};
use crate::models::date_utils::{DateFormatConfig, parse_date_string, parse_datetime_string};
use crate::models::member::FamilyMember;
use crate::models::types::{Gender, MemberId, TreeId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A member record as delivered by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberResponseDto {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub date_of_death: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub primary_parent_id: Option<MemberId>,
    #[serde(default)]
    pub secondary_parent_id: Option<MemberId>,
    #[serde(default)]
    pub partners: Vec<MemberId>,
}

/// The member list payload for one tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberListDto {
    pub family_members: Vec<FamilyMemberResponseDto>,
}

/// Tree metadata as delivered by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyTreeResponseDto {
    pub id: TreeId,
    pub name: String,
    pub is_private: bool,
    pub created_at: String,
}

/// Typed tree metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyTree {
    /// Tree identifier
    pub id: TreeId,
    /// Display name of the tree
    pub name: String,
    /// Whether only the owner may view the tree
    pub is_private: bool,
    /// Creation timestamp
    pub created_at: NaiveDateTime,
}

/// Parse an optional wire date, treating null and blank strings as absent
fn parse_optional_date(
    field: &'static str,
    value: Option<&str>,
    config: &DateFormatConfig,
) -> Result<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_date_string(raw, config)
            .map(Some)
            .ok_or_else(|| FamilyTableError::invalid_date(field, raw)),
    }
}

impl FamilyMemberResponseDto {
    /// Convert into a typed member
    pub fn into_member(self, config: &DateFormatConfig) -> Result<FamilyMember> {
        let birthday = parse_optional_date("birthday", self.birthday.as_deref(), config)?;
        let date_of_death =
            parse_optional_date("dateOfDeath", self.date_of_death.as_deref(), config)?;
        let gender = self.gender.as_deref().map_or(Gender::Unknown, Gender::from);

        Ok(FamilyMember {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            birthday,
            date_of_death,
            gender,
            primary_parent_id: self.primary_parent_id,
            secondary_parent_id: self.secondary_parent_id,
            partners: self.partners.into_iter().collect(),
        })
    }
}

impl From<&FamilyMember> for FamilyMemberResponseDto {
    fn from(member: &FamilyMember) -> Self {
        Self {
            id: member.id,
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            birthday: member.birthday.map(|d| d.format("%Y-%m-%d").to_string()),
            date_of_death: member.date_of_death.map(|d| d.format("%Y-%m-%d").to_string()),
            gender: Some(member.gender.as_str().to_string()),
            primary_parent_id: member.primary_parent_id,
            secondary_parent_id: member.secondary_parent_id,
            partners: member.partners.to_vec(),
        }
    }
}

impl FamilyMemberListDto {
    /// Convert every record, failing the whole list on the first bad record
    pub fn into_members(self, config: &DateFormatConfig) -> Result<Vec<FamilyMember>> {
        self.family_members
            .into_iter()
            .map(|dto| dto.into_member(config))
            .collect()
    }

    /// Decode a JSON payload
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

impl FamilyTreeResponseDto {
    /// Convert into typed tree metadata
    pub fn into_tree(self, config: &DateFormatConfig) -> Result<FamilyTree> {
        let created_at = parse_datetime_string(&self.created_at, config)
            .or_else(|| {
                parse_date_string(&self.created_at, config)
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .ok_or_else(|| FamilyTableError::invalid_date("createdAt", self.created_at.clone()))?;

        Ok(FamilyTree {
            id: self.id,
            name: self.name,
            is_private: self.is_private,
            created_at,
        })
    }
}
