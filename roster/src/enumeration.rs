//! Enumeration types and the lookup operations over their member tables

use crate::ast::Span;
use crate::member::{is_identifier, Member, MemberTable};
use crate::value::Value;
use crate::{RosterError, RosterResult};
use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_DECLARATION_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an enumeration type.
///
/// Two enumerations with the same simple name are still different types when
/// their keys differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumerationKey {
    /// A Rust type declared with [`declare_enumeration!`](crate::declare_enumeration)
    Native(TypeId),
    /// An enumeration built at runtime from a declaration
    Declared(u64),
}

/// A concrete, closed enumeration: its name and its member table.
#[derive(Debug, Clone)]
pub struct EnumerationType {
    key: EnumerationKey,
    name: Cow<'static, str>,
    members: MemberTable,
    source: Option<String>,
    span: Option<Span>,
}

impl EnumerationType {
    /// Declare an enumeration at runtime.
    ///
    /// Each call produces a new type, even when name and members match an
    /// existing one.
    pub fn declare(name: impl Into<String>, members: Vec<Member>) -> RosterResult<Self> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(RosterError::InvalidMember(format!(
                "'{}' is not a valid enumeration name",
                name
            )));
        }
        let members = MemberTable::new(members)?;
        let id = NEXT_DECLARATION_ID.fetch_add(1, Ordering::Relaxed);
        Ok(Self {
            key: EnumerationKey::Declared(id),
            name: Cow::Owned(name),
            members,
            source: None,
            span: None,
        })
    }

    /// Table for a native Rust enumeration. Called from the expansion of
    /// `declare_enumeration!`.
    #[doc(hidden)]
    pub fn native<E: 'static>(name: &'static str, members: Vec<Member>) -> Self {
        Self {
            key: EnumerationKey::Native(TypeId::of::<E>()),
            name: Cow::Borrowed(name),
            members: MemberTable::from_checked(members),
            source: None,
            span: None,
        }
    }

    pub(crate) fn with_origin(mut self, source: impl Into<String>, span: Span) -> Self {
        self.source = Some(source.into());
        self.span = Some(span);
        self
    }

    pub fn key(&self) -> EnumerationKey {
        self.key
    }

    /// Simple (unqualified) name of the type
    pub fn type_name(&self) -> &str {
        &self.name
    }

    /// The ordered member table
    pub fn members(&self) -> &MemberTable {
        &self.members
    }

    /// Where this enumeration was declared, if it came from declaration text
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }

    pub fn value_of(&self, name: &str) -> RosterResult<&Value> {
        self.members
            .get(name)
            .map(Member::value)
            .ok_or_else(|| RosterError::undefined_name(self.type_name(), name))
    }

    /// Name of the first member whose value strictly equals `value`
    pub fn name_of(&self, value: &Value) -> RosterResult<&str> {
        self.members
            .first_with_value(value)
            .map(Member::name)
            .ok_or_else(|| RosterError::undefined_value(self.type_name(), value.clone()))
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// True if some member's value strictly equals `value`
    pub fn has_value(&self, value: &Value) -> bool {
        self.members.first_with_value(value).is_some()
    }

    /// All member names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.members.iter().map(Member::name).collect()
    }

    /// All member values in declaration order
    pub fn values(&self) -> Vec<&Value> {
        self.members.iter().map(Member::value).collect()
    }

    /// (name, value) pairs in declaration order
    pub fn entries(&self) -> Vec<(&str, &Value)> {
        self.members.iter().map(|m| (m.name(), m.value())).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Display for EnumerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A Rust enum whose variants are the members of an enumeration.
///
/// Implemented by [`declare_enumeration!`](crate::declare_enumeration); the
/// variants are the typed tokens and the associated functions are the lookup
/// operations for the type.
pub trait Enumeration: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// The member table, built once per type
    fn enumeration() -> &'static EnumerationType;

    /// Every variant, in declaration order
    fn variants() -> &'static [Self];

    /// Position of this variant in declaration order
    fn ordinal(self) -> usize {
        Self::variants()
            .iter()
            .position(|variant| *variant == self)
            .unwrap_or_default()
    }

    fn member(self) -> &'static Member {
        &Self::enumeration().members().as_slice()[self.ordinal()]
    }

    fn name(self) -> &'static str {
        self.member().name()
    }

    fn value(self) -> &'static Value {
        self.member().value()
    }

    fn from_name(name: &str) -> RosterResult<Self> {
        Self::enumeration()
            .members()
            .position(name)
            .map(|index| Self::variants()[index])
            .ok_or_else(|| RosterError::undefined_name(Self::type_name(), name))
    }

    /// Variant of the first member whose value strictly equals `value`
    fn from_value(value: &Value) -> RosterResult<Self> {
        let name = Self::name_of(value)?;
        Self::from_name(name)
    }

    fn type_name() -> &'static str {
        Self::enumeration().type_name()
    }

    fn value_of(name: &str) -> RosterResult<&'static Value> {
        Self::enumeration().value_of(name)
    }

    fn name_of(value: &Value) -> RosterResult<&'static str> {
        Self::enumeration().name_of(value)
    }

    fn is_defined(name: &str) -> bool {
        Self::enumeration().is_defined(name)
    }

    fn names() -> Vec<&'static str> {
        Self::enumeration().names()
    }
}
