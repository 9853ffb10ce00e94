//! Call-shaped member access
//!
//! `Animal.Horse()` style requests resolve to the same cached instances as
//! [`Registry::instance_of`]; nothing here creates instances on its own.

use crate::enumeration::EnumerationType;
use crate::instance::MemberInstance;
use crate::registry::Registry;
use crate::RosterResult;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Member access bound to one registry and one enumeration type
#[derive(Debug, Clone, Copy)]
pub struct MemberAccessor<'r> {
    registry: &'r Registry,
    enumeration: &'r EnumerationType,
}

impl<'r> MemberAccessor<'r> {
    pub(crate) fn new(registry: &'r Registry, enumeration: &'r EnumerationType) -> Self {
        Self {
            registry,
            enumeration,
        }
    }

    pub fn enumeration(&self) -> &'r EnumerationType {
        self.enumeration
    }

    /// Resolve `token` as a member name of the bound enumeration
    pub fn call(&self, token: &str) -> RosterResult<Arc<MemberInstance>> {
        self.registry.instance_of(self.enumeration, token)
    }
}

/// A parsed `Type.Member()` request.
///
/// Accepted spellings: `Animal.Horse()`, `Animal.Horse`, `Animal::Horse()`
/// and `Animal::Horse`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberCall {
    pub enumeration: String,
    pub member: String,
}

impl MemberCall {
    pub fn new(enumeration: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            enumeration: enumeration.into(),
            member: member.into(),
        }
    }
}

impl FromStr for MemberCall {
    type Err = crate::RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_member_call(s)
    }
}

impl fmt::Display for MemberCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}()", self.enumeration, self.member)
    }
}
