//! Identifier newtypes and the authenticated actor context.
//!
//! All entities in the engine are scoped by a company tenant boundary.
//! Queries take these identifiers explicitly so that an unscoped lookup is
//! impossible at the interface level rather than a per-call discipline.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an employee, owned by the employee-management
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

/// Unique identifier for a company — the multi-tenant partition boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(Uuid);

/// Unique identifier for a leave request, owned by the leave-management
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaveId(Uuid);

macro_rules! id_impls {
    ($name:ident) => {
        impl $name {
            /// Generates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

id_impls!(EmployeeId);
id_impls!(CompanyId);
id_impls!(LeaveId);

/// The role of an authenticated actor, issued by the auth collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Company administrator with full access.
    Admin,
    /// HR staff, permitted to import and list attendance.
    Hr,
    /// Regular employee, limited to their own clock events and history.
    Employee,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Hr => write!(f, "HR"),
            Role::Employee => write!(f, "EMPLOYEE"),
        }
    }
}

impl Role {
    /// Returns true if the role may perform company-wide attendance
    /// operations (listing and bulk import).
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Admin | Role::Hr)
    }
}

/// The authenticated identity every core operation runs under.
///
/// Produced by the authentication collaborator; the engine never mints one
/// itself. The `employee_id` is absent for admin accounts that have no
/// employee profile of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    /// The tenant the actor belongs to.
    pub company_id: CompanyId,
    /// The actor's linked employee profile, if any.
    pub employee_id: Option<EmployeeId>,
    /// The actor's role.
    pub role: Role,
}

impl ActorContext {
    /// Creates an actor context for an employee-linked account.
    pub fn employee(company_id: CompanyId, employee_id: EmployeeId) -> Self {
        Self {
            company_id,
            employee_id: Some(employee_id),
            role: Role::Employee,
        }
    }

    /// Creates an actor context for an admin account without an employee
    /// profile.
    pub fn admin(company_id: CompanyId) -> Self {
        Self {
            company_id,
            employee_id: None,
            role: Role::Admin,
        }
    }
}
