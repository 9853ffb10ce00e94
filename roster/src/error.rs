use crate::ast::Span;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Detailed error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub source_id: String,
    pub source_text: Arc<str>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        write!(f, " at {}:{}:{}", self.source_id, self.span.line, self.span.col)
    }
}

/// The name or value a failed lookup was asked for
#[derive(Debug, Clone, PartialEq)]
pub enum MemberRef {
    Name(String),
    Value(Value),
}

impl fmt::Display for MemberRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberRef::Name(name) => write!(f, "member '{}'", name),
            MemberRef::Value(value) => write!(f, "value {} ({})", value.to_literal(), value.kind()),
        }
    }
}

/// Error types for the Roster system
#[derive(Debug, Clone, Error)]
pub enum RosterError {
    /// A lookup by name or by value found no member.
    ///
    /// Always a reference to something that was never declared.
    #[error("{member} is not defined in enumeration {enumeration}")]
    UndefinedMember {
        enumeration: String,
        member: MemberRef,
    },

    /// No enumeration with this name has been declared
    #[error("Unknown enumeration '{0}'")]
    UnknownEnumeration(String),

    /// Declaration source could not be parsed
    #[error("Parse error: {0}")]
    Parse(Box<ErrorDetails>),

    /// Declaration source parsed but declares something invalid
    #[error("Declaration error: {0}")]
    Declaration(Box<ErrorDetails>),

    /// A member table built in code is malformed
    #[error("Invalid member: {0}")]
    InvalidMember(String),

    #[error("Resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value}). {suggestion}")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },
}

impl RosterError {
    pub fn undefined_name(enumeration: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UndefinedMember {
            enumeration: enumeration.into(),
            member: MemberRef::Name(name.into()),
        }
    }

    pub fn undefined_value(enumeration: impl Into<String>, value: Value) -> Self {
        Self::UndefinedMember {
            enumeration: enumeration.into(),
            member: MemberRef::Value(value),
        }
    }

    /// Create a parse error with source information
    pub fn parse(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: None,
        }))
    }

    /// Create a declaration error with source information
    pub fn declaration(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::Declaration(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: None,
        }))
    }

    /// Create a declaration error with suggestion
    pub fn declaration_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Declaration(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: Some(suggestion.into()),
        }))
    }

    /// Source details for errors that point into declaration text
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            RosterError::Parse(details) | RosterError::Declaration(details) => Some(details),
            _ => None,
        }
    }
}
