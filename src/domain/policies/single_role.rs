//! Single Role Policy
//!
//! Decides whether an account may be acted on: it must hold exactly one role,
//! and that role must be the target. Accounts with several roles are left
//! alone even when the target is among them.

use crate::domain::entities::UserAccount;
use crate::domain::value_objects::RoleName;

/// Outcome of evaluating one account against the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Holds exactly the target role
    Eligible,
    /// Holds no roles at all
    NoRoles,
    /// Holds more than one role
    MultipleRoles,
    /// Holds one role, but not the target
    OtherRole,
}

impl Eligibility {
    pub fn is_eligible(self) -> bool {
        matches!(self, Self::Eligible)
    }
}

/// Policy bound to a target role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleRolePolicy {
    target: RoleName,
}

impl SingleRolePolicy {
    pub fn new(target: RoleName) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &RoleName {
        &self.target
    }

    pub fn evaluate(&self, account: &UserAccount) -> Eligibility {
        match account.roles() {
            [] => Eligibility::NoRoles,
            [role] if *role == self.target => Eligibility::Eligible,
            [_] => Eligibility::OtherRole,
            _ => Eligibility::MultipleRoles,
        }
    }

    pub fn is_eligible(&self, account: &UserAccount) -> bool {
        self.evaluate(account).is_eligible()
    }
}
