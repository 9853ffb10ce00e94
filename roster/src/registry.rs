//! The instance cache
//!
//! A `Registry` owns every [`MemberInstance`] it has produced. Instances are
//! created on first request and kept until the registry is dropped, so the
//! cache for a type only ever grows, up to the size of its member table.

use crate::accessor::MemberAccessor;
use crate::enumeration::{Enumeration, EnumerationKey, EnumerationType};
use crate::instance::MemberInstance;
use crate::value::Value;
use crate::RosterResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

type InstanceMap = HashMap<EnumerationKey, HashMap<String, Arc<MemberInstance>>>;

/// Memoizing factory for member instances, keyed by (enumeration, member name).
///
/// The check-then-create step runs under a single lock, so concurrent first
/// requests for the same member still observe one instance.
#[derive(Debug, Default)]
pub struct Registry {
    instances: Mutex<InstanceMap>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The instance for member `name` of `enumeration`.
    ///
    /// Every call with the same pair returns the same `Arc`.
    pub fn instance_of(
        &self,
        enumeration: &EnumerationType,
        name: &str,
    ) -> RosterResult<Arc<MemberInstance>> {
        let value = enumeration.value_of(name)?;
        Ok(self.get_or_create(enumeration, name, value))
    }

    /// The instance for a native variant
    pub fn instance<E: Enumeration>(&self, variant: E) -> Arc<MemberInstance> {
        let member = variant.member();
        self.get_or_create(E::enumeration(), member.name(), member.value())
    }

    /// The instance for member `name` of the native enumeration `E`
    pub fn member<E: Enumeration>(&self, name: &str) -> RosterResult<Arc<MemberInstance>> {
        self.instance_of(E::enumeration(), name)
    }

    /// Instances for every member, in declaration order
    pub fn instances(&self, enumeration: &EnumerationType) -> Vec<Arc<MemberInstance>> {
        enumeration
            .members()
            .iter()
            .map(|member| self.get_or_create(enumeration, member.name(), member.value()))
            .collect()
    }

    /// How many members of `enumeration` have an instance so far
    pub fn cached_count(&self, enumeration: &EnumerationType) -> usize {
        self.lock()
            .get(&enumeration.key())
            .map(HashMap::len)
            .unwrap_or(0)
    }

    /// Call-shaped access to the members of one enumeration
    pub fn accessor<'r>(&'r self, enumeration: &'r EnumerationType) -> MemberAccessor<'r> {
        MemberAccessor::new(self, enumeration)
    }

    /// Call-shaped access to the members of the native enumeration `E`
    pub fn accessor_for<E: Enumeration>(&self) -> MemberAccessor<'_> {
        MemberAccessor::new(self, E::enumeration())
    }

    fn get_or_create(
        &self,
        enumeration: &EnumerationType,
        name: &str,
        value: &Value,
    ) -> Arc<MemberInstance> {
        let mut instances = self.lock();
        let members = instances.entry(enumeration.key()).or_default();
        if let Some(existing) = members.get(name) {
            return Arc::clone(existing);
        }

        debug!(
            enumeration = enumeration.type_name(),
            member = name,
            "creating member instance"
        );
        let instance = Arc::new(MemberInstance::new(
            enumeration.key(),
            enumeration.type_name(),
            name,
            value.clone(),
        ));
        members.insert(name.to_string(), Arc::clone(&instance));
        instance
    }

    // Entries are only ever inserted whole, so a poisoned map is still
    // consistent.
    fn lock(&self) -> MutexGuard<'_, InstanceMap> {
        self.instances.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
