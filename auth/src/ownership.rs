//! Per-resource ownership policy.
//!
//! A pure decision over an acting identity, a resource that has already been
//! fetched, and the operation being attempted. Callers must establish that
//! the resource exists before asking: an absent resource is reported as
//! not found, never as denied. Listing is not covered here; list queries are
//! scoped to the owner at the store.

/// Operation attempted on a single resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Update,
    Delete,
}

impl Operation {
    pub fn is_mutation(self) -> bool {
        matches!(self, Operation::Update | Operation::Delete)
    }
}

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Permit,
    Deny,
}

impl Decision {
    /// Map `Deny` to the caller's error.
    pub fn into_result<E>(self, on_deny: impl FnOnce() -> E) -> Result<(), E> {
        match self {
            Decision::Permit => Ok(()),
            Decision::Deny => Err(on_deny()),
        }
    }
}

/// A resource bound to exactly one owner for its whole lifetime.
pub trait Owned {
    type OwnerId: PartialEq;

    fn owner_id(&self) -> &Self::OwnerId;
}

/// Decide whether `actor` may perform `operation` on `resource`.
///
/// Only the owner is permitted, for reads and mutations alike. There is no
/// elevated role that bypasses this.
pub fn authorize<R: Owned>(actor: &R::OwnerId, resource: &R, operation: Operation) -> Decision {
    let decision = if resource.owner_id() == actor {
        Decision::Permit
    } else {
        Decision::Deny
    };

    if decision == Decision::Deny {
        tracing::debug!(?operation, "Ownership check denied");
    }

    decision
}
