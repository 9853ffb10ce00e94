//! Members and the ordered member table

use crate::value::Value;
use crate::{RosterError, RosterResult};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;

/// One (name, value) entry of an enumeration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    name: Cow<'static, str>,
    value: Value,
}

impl Member {
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Returns true if `name` is usable as a member or enumeration name.
///
/// Names follow identifier rules: a letter or underscore, then letters,
/// digits or underscores.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The fixed, ordered members of one enumeration type.
///
/// Order is declaration order. Names are unique. Values are not required to
/// be unique; lookups by value resolve to the first member in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MemberTable {
    members: Vec<Member>,
}

impl MemberTable {
    /// Build a table, rejecting empty, malformed or repeated names
    pub fn new(members: Vec<Member>) -> RosterResult<Self> {
        let mut seen = HashSet::with_capacity(members.len());
        for member in &members {
            if member.name().is_empty() {
                return Err(RosterError::InvalidMember(
                    "member names must not be empty".to_string(),
                ));
            }
            if !is_identifier(member.name()) {
                return Err(RosterError::InvalidMember(format!(
                    "'{}' is not a valid member name",
                    member.name()
                )));
            }
            if !seen.insert(member.name()) {
                return Err(RosterError::InvalidMember(format!(
                    "member '{}' is declared more than once",
                    member.name()
                )));
            }
        }
        Ok(Self { members })
    }

    /// Build a table whose names are already known to be valid and unique.
    ///
    /// Used for native enumerations, where the compiler enforces both.
    pub(crate) fn from_checked(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name() == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.members.iter().position(|m| m.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// First member, in declaration order, whose value strictly equals `value`
    pub fn first_with_value(&self, value: &Value) -> Option<&Member> {
        self.members.iter().find(|m| m.value().strictly_equals(value))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<'a> IntoIterator for &'a MemberTable {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
