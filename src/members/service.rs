//! Member Service
//!
//! Lifecycle operations for library members. Registration enforces the
//! policy age floor and key uniqueness; removal is refused while the
//! member still holds any book.

use super::types::{Member, MemberPatch};
use crate::error::{LibraryError, Result};
use crate::policy::LendingPolicy;
use crate::store::{LedgerStore, MemberStore};
use std::sync::Arc;

/// Member CRUD over the shared member store.
pub struct MemberService {
    members: Arc<MemberStore>,
    ledger: Arc<LedgerStore>,
    policy: Arc<LendingPolicy>,
}

impl MemberService {
    pub fn new(
        members: Arc<MemberStore>,
        ledger: Arc<LedgerStore>,
        policy: Arc<LendingPolicy>,
    ) -> Self {
        Self {
            members,
            ledger,
            policy,
        }
    }

    /// Registers a new member and returns the stored record.
    pub fn register(&self, member: Member) -> Result<Member> {
        if member.age < self.policy.minimum_member_age {
            tracing::warn!(
                "Rejected registration of member {}: age {} below minimum",
                member.member_id,
                member.age
            );
            return Err(LibraryError::UnderMinimumAge {
                age: member.age,
                minimum: self.policy.minimum_member_age,
            });
        }

        let member_id = member.member_id;
        if !self.members.try_insert(member.clone()) {
            return Err(LibraryError::MemberExists(member_id));
        }

        tracing::info!("Registered member {} ({})", member_id, member.name);
        Ok(member)
    }

    /// Looks up a single member.
    pub fn member(&self, member_id: i64) -> Result<Member> {
        self.members
            .get(member_id)
            .ok_or(LibraryError::MemberNotFound(member_id))
    }

    /// Every member, in registration order.
    pub fn members(&self) -> Vec<Member> {
        self.members.snapshot()
    }

    /// Applies a partial update. The member id itself is never changed,
    /// and a patched age still has to clear the policy floor.
    pub fn update(&self, member_id: i64, patch: MemberPatch) -> Result<Member> {
        if let Some(age) = patch.age
            && age < self.policy.minimum_member_age
        {
            return Err(LibraryError::UnderMinimumAge {
                age,
                minimum: self.policy.minimum_member_age,
            });
        }

        let updated = self
            .members
            .update(member_id, |member| {
                if let Some(name) = patch.name {
                    member.name = name;
                }
                if let Some(email) = patch.email {
                    member.email = Some(email);
                }
                if let Some(age) = patch.age {
                    member.age = age;
                }
            })
            .ok_or(LibraryError::MemberNotFound(member_id))?;

        tracing::info!("Updated member {}", member_id);
        Ok(updated)
    }

    /// Removes a member, refusing while any of their borrows is still
    /// active.
    pub fn remove(&self, member_id: i64) -> Result<()> {
        if !self.members.contains(member_id) {
            return Err(LibraryError::MemberNotFound(member_id));
        }

        let has_active_borrows = self
            .ledger
            .borrows()
            .iter()
            .any(|record| record.member_id == member_id && record.is_active());
        if has_active_borrows {
            tracing::warn!("Refused to remove member {}: active borrows exist", member_id);
            return Err(LibraryError::MemberHasActiveBorrows(member_id));
        }

        if !self.members.remove(member_id) {
            return Err(LibraryError::MemberNotFound(member_id));
        }

        tracing::info!("Removed member {}", member_id);
        Ok(())
    }
}
