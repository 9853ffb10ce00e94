use crate::enumeration::{Enumeration, EnumerationKey};
use crate::value::Value;
use std::any::TypeId;
use std::fmt;

/// The singleton token for one member of one enumeration.
///
/// Only a [`Registry`](crate::Registry) creates these, and it hands out the
/// same `Arc` for every request of the same member. The value is copied from
/// the member table once, at creation.
#[derive(Debug)]
pub struct MemberInstance {
    key: EnumerationKey,
    enumeration: String,
    name: String,
    value: Value,
}

impl MemberInstance {
    pub(crate) fn new(
        key: EnumerationKey,
        enumeration: impl Into<String>,
        name: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            key,
            enumeration: enumeration.into(),
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Simple name of the enumeration this member belongs to
    pub fn type_name(&self) -> &str {
        &self.enumeration
    }

    pub fn enumeration_key(&self) -> EnumerationKey {
        self.key
    }

    /// True if this instance belongs to the native enumeration `E`
    pub fn is<E: Enumeration>(&self) -> bool {
        self.key == EnumerationKey::Native(TypeId::of::<E>())
    }

    /// The native variant this instance stands for, if it belongs to `E`
    pub fn to_variant<E: Enumeration>(&self) -> Option<E> {
        if self.is::<E>() {
            E::from_name(&self.name).ok()
        } else {
            None
        }
    }
}

impl PartialEq for MemberInstance {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.name == other.name
    }
}

impl Eq for MemberInstance {}

impl fmt::Display for MemberInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
