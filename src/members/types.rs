//! Member Data Types

use crate::store::records::Keyed;
use serde::{Deserialize, Serialize};

/// A registered library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub age: u32,
}

impl Keyed for Member {
    fn key(&self) -> i64 {
        self.member_id
    }
}

/// Partial update for a member record. `None` fields are left untouched;
/// the member id itself can never be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}
