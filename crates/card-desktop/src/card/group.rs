//! Classification keys used by group stacking

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CardKind;

/// Clinical priority of the record a card shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

/// Attribute selected for group stacking
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupBy {
    Priority,
    Type,
    Provider,
    Patient,
    DueDate,
}

/// Read-only classification supplied by the domain layer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupKeys {
    pub priority: Option<Priority>,
    pub card_type: Option<CardKind>,
    pub provider: Option<String>,
    pub patient: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Value of a single group key
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Priority(Priority),
    Type(CardKind),
    Provider(String),
    Patient(String),
    DueDate(NaiveDate),
    /// Card carries no value for the selected attribute
    Unassigned,
}

impl GroupKeys {
    /// Key of this card under `group_by`
    pub fn key(&self, group_by: GroupBy) -> GroupKey {
        let key = match group_by {
            GroupBy::Priority => self.priority.map(GroupKey::Priority),
            GroupBy::Type => self.card_type.map(GroupKey::Type),
            GroupBy::Provider => self.provider.clone().map(GroupKey::Provider),
            GroupBy::Patient => self.patient.clone().map(GroupKey::Patient),
            GroupBy::DueDate => self.due_date.map(GroupKey::DueDate),
        };
        key.unwrap_or(GroupKey::Unassigned)
    }
}
