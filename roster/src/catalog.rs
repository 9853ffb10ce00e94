use crate::accessor::{MemberAccessor, MemberCall};
use crate::ast::Span;
use crate::enumeration::EnumerationType;
use crate::instance::MemberInstance;
use crate::registry::Registry;
use crate::{parse, ResourceLimits, RosterError, RosterResult};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Enumerations declared in text, by name.
///
/// Names are unique across everything added to one catalog. Once added, an
/// enumeration is never changed.
#[derive(Debug, Default)]
pub struct Catalog {
    enumerations: Vec<EnumerationType>,
    sources: HashMap<String, Arc<str>>,
    limits: ResourceLimits,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            enumerations: Vec::new(),
            sources: HashMap::new(),
            limits,
        }
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Parse `code` and add every enumeration it declares.
    ///
    /// Nothing is added when any declaration in `code` is invalid, or when
    /// `source_id` names a source that was already added.
    pub fn add_source(&mut self, code: &str, source_id: &str) -> RosterResult<()> {
        let source_text: Arc<str> = Arc::from(code);
        if self.sources.contains_key(source_id) {
            return Err(RosterError::declaration_with_suggestion(
                format!("Source '{}' has already been added", source_id),
                Span::default(),
                source_id,
                source_text,
                "Give each source its own id",
            ));
        }

        let parsed = parse(code, Some(source_id.to_string()), &self.limits)?;

        let mut incoming: Vec<&EnumerationType> = Vec::with_capacity(parsed.len());
        for enumeration in &parsed {
            let earlier = self
                .get(enumeration.type_name())
                .or_else(|| {
                    incoming
                        .iter()
                        .copied()
                        .find(|e| e.type_name() == enumeration.type_name())
                });
            if let Some(existing) = earlier {
                return Err(self.duplicate_error(enumeration, existing, source_id, &source_text));
            }
            incoming.push(enumeration);
        }

        debug!(
            source = source_id,
            enumerations = parsed.len(),
            "loaded enumeration declarations"
        );
        self.sources.insert(source_id.to_string(), source_text);
        self.enumerations.extend(parsed);
        Ok(())
    }

    /// Names of all enumerations, in the order they were added
    pub fn list(&self) -> Vec<&str> {
        self.enumerations.iter().map(EnumerationType::type_name).collect()
    }

    pub fn get(&self, name: &str) -> Option<&EnumerationType> {
        self.enumerations.iter().find(|e| e.type_name() == name)
    }

    /// Like [`get`](Self::get), failing with `UnknownEnumeration`
    pub fn enumeration(&self, name: &str) -> RosterResult<&EnumerationType> {
        self.get(name)
            .ok_or_else(|| RosterError::UnknownEnumeration(name.to_string()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnumerationType> {
        self.enumerations.iter()
    }

    pub fn len(&self) -> usize {
        self.enumerations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enumerations.is_empty()
    }

    /// Source text a declaration was loaded from
    pub fn source_text(&self, source_id: &str) -> Option<&str> {
        self.sources.get(source_id).map(|s| s.as_ref())
    }

    /// Call-shaped access to one declared enumeration
    pub fn accessor<'r>(
        &'r self,
        registry: &'r Registry,
        name: &str,
    ) -> RosterResult<MemberAccessor<'r>> {
        Ok(registry.accessor(self.enumeration(name)?))
    }

    /// Resolve `Type.Member()` against this catalog
    pub fn resolve(
        &self,
        registry: &Registry,
        call: &MemberCall,
    ) -> RosterResult<Arc<MemberInstance>> {
        registry.instance_of(self.enumeration(&call.enumeration)?, &call.member)
    }

    fn duplicate_error(
        &self,
        duplicate: &EnumerationType,
        existing: &EnumerationType,
        source_id: &str,
        source_text: &Arc<str>,
    ) -> RosterError {
        let first_declared = match (existing.source(), existing.span()) {
            (Some(source), Some(span)) => format!("{}:{}", source, span.line),
            _ => "another declaration".to_string(),
        };
        RosterError::declaration_with_suggestion(
            format!("Enumeration '{}' is already declared", duplicate.type_name()),
            duplicate.span().cloned().unwrap_or_default(),
            source_id,
            Arc::clone(source_text),
            format!(
                "'{}' was first declared at {}; rename one of them",
                duplicate.type_name(),
                first_declared
            ),
        )
    }
}
