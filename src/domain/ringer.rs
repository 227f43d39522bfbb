//! Ringer - a supporter who rang one of the campaign's numbers

use crate::domain::tags::{Tag, Taggable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ringer {
    /// Stored as given; number validation happens upstream
    pub phone_number: String,

    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Date the ringer first supported the campaign
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined: Option<NaiveDate>,
}

impl Ringer {
    pub fn new(phone_number: impl Into<String>, tags: Vec<Tag>) -> Self {
        Ringer {
            phone_number: phone_number.into(),
            tags,
            joined: None,
        }
    }

    pub fn with_joined(mut self, joined: NaiveDate) -> Self {
        self.joined = Some(joined);
        self
    }

    /// True when `joined` lies inside the inclusive bounds; a ringer without
    /// a date only passes when no bound is set
    pub fn joined_within(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        if from.is_none() && to.is_none() {
            return true;
        }
        let Some(joined) = self.joined else {
            return false;
        };
        from.is_none_or(|from| joined >= from) && to.is_none_or(|to| joined <= to)
    }
}

impl Taggable for Ringer {
    fn tags(&self) -> &[Tag] {
        &self.tags
    }
}
