//! The capability contract application handlers implement.
//!
//! A handler is an attribute container. On top of that it may opt into two
//! capabilities, discovered by interface query rather than by failed
//! lookups:
//!
//! - a dynamic-attribute [`Fallback`], consulted when ordinary lookup misses
//! - a call-hook, making the instance itself an invocable endpoint
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use objdispatch_core::{Class, Handler, Node, Routine, Value};
//!
//! struct Root;
//!
//! impl Handler for Root {
//!     fn type_name(&self) -> &str {
//!         "Root"
//!     }
//!
//!     fn members(&self) -> Vec<String> {
//!         vec!["hello".to_string()]
//!     }
//!
//!     fn attribute(&self, name: &str) -> Option<Node> {
//!         match name {
//!             "hello" => Some(Node::from(Routine::new("hello", 0, |_| {
//!                 Ok(Value::from("Hello world."))
//!             }))),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let root = Class::new("Root", |_| Arc::new(Root));
//! # let _ = root;
//! ```

use crate::{Class, Node, Routine};

/// An object dispatch can descend through.
pub trait Handler: Send + Sync {
    /// Name of the handler type, for diagnostics and route listings.
    fn type_name(&self) -> &str;

    /// Names of the ordinary attributes, for route discovery.
    ///
    /// The manifest may include private (`_`-prefixed) names; protecting
    /// dispatchers filter them out. Names only reachable through the
    /// fallback are not listed here.
    fn members(&self) -> Vec<String> {
        Vec::new()
    }

    /// Ordinary attribute lookup.
    fn attribute(&self, name: &str) -> Option<Node>;

    /// The dynamic-attribute fallback, if this handler has one.
    fn fallback(&self) -> Option<&dyn Fallback> {
        None
    }

    /// The call-hook, if instances of this handler are invocable.
    fn call_hook(&self) -> Option<Routine> {
        None
    }
}

/// Catch-all resolution for names a handler does not declare.
pub trait Fallback: Send + Sync {
    /// Resolve an undeclared name.
    fn resolve(&self, name: &str) -> Option<Node>;

    /// The declared shape of what [`Fallback::resolve`] returns.
    ///
    /// Only route discovery uses this; it never affects resolution.
    fn returns(&self) -> Returns {
        Returns::Unknown
    }
}

/// Declared return shape of a [`Fallback`].
#[derive(Clone, Debug, Default)]
pub enum Returns {
    /// Always a concrete callable endpoint.
    Routine(Routine),
    /// Always an instance of this class, an intermediate container.
    Class(Class),
    /// Not declared.
    #[default]
    Unknown,
}
