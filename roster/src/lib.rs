//! # Roster
//!
//! **Closed enumerations with strict lookup and singleton members**
//!
//! An enumeration is a fixed, ordered set of named members, each carrying one
//! scalar [`Value`]. Roster provides name↔value lookup with type-sensitive
//! comparison, membership tests, declaration-ordered listings, and one shared
//! [`MemberInstance`] per member.
//!
//! ## Quick Start
//!
//! ```rust
//! use roster::{declare_enumeration, Enumeration, Registry, RosterResult, Value};
//! use std::sync::Arc;
//!
//! declare_enumeration! {
//!     pub enum Animal {
//!         Horse = 0,
//!         Dog = 1,
//!     }
//! }
//!
//! fn main() -> RosterResult<()> {
//!     assert_eq!(Animal::value_of("Dog")?, &Value::Integer(1));
//!     assert_eq!(Animal::name_of(&Value::Integer(1))?, "Dog");
//!     assert!(Animal::name_of(&Value::text("1")).is_err());
//!     assert!(!Animal::is_defined("Cat"));
//!
//!     let registry = Registry::new();
//!     let horse = registry.member::<Animal>("Horse")?;
//!     assert!(Arc::ptr_eq(&horse, &registry.instance(Animal::Horse)));
//!     assert_eq!(horse.to_string(), "Horse");
//!     Ok(())
//! }
//! ```
//!
//! ## Declaring enumerations
//!
//! Enumerations known at compile time use [`declare_enumeration!`], which
//! produces a native Rust enum whose variants are the members. Enumerations
//! described in text are loaded into a [`Catalog`]:
//!
//! ```rust
//! use roster::{Catalog, MemberCall, Registry, Value};
//!
//! let mut catalog = Catalog::new();
//! catalog
//!     .add_source("enum Color { Red = \"r\", Green = \"g\" }", "colors.roster")
//!     .unwrap();
//!
//! let color = catalog.enumeration("Color").unwrap();
//! assert_eq!(color.name_of(&Value::text("g")).unwrap(), "Green");
//!
//! let registry = Registry::new();
//! let call: MemberCall = "Color.Red()".parse().unwrap();
//! let red = catalog.resolve(&registry, &call).unwrap();
//! assert_eq!(red.value(), &Value::text("r"));
//! ```
//!
//! ## Instances
//!
//! A [`Registry`] owns the member instances it hands out. Asking for the same
//! member twice returns the same `Arc`; asking for a member that was never
//! declared fails with [`RosterError::UndefinedMember`].

pub mod accessor;
pub mod ast;
pub mod catalog;
pub mod enumeration;
pub mod error;
pub mod instance;
mod macros;
pub mod member;
pub mod parser;
pub mod registry;
pub mod resource_limits;
pub mod value;

pub use accessor::{MemberAccessor, MemberCall};
pub use ast::Span;
pub use catalog::Catalog;
pub use enumeration::{Enumeration, EnumerationKey, EnumerationType};
pub use error::{ErrorDetails, MemberRef, RosterError};
pub use instance::MemberInstance;
pub use member::{Member, MemberTable};
pub use parser::{parse, parse_value};
pub use registry::Registry;
pub use resource_limits::ResourceLimits;
pub use value::{Value, ValueKind};

/// Result type for Roster operations
pub type RosterResult<T> = Result<T, RosterError>;
