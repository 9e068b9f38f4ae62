//! Object Dispatch: path resolution by attribute descent
//!
//! Given a root object and a request path, dispatch walks the object graph
//! one segment at a time, looking each segment up as an attribute of the
//! object reached so far:
//! - `Node`: what the walk lands on (classes, instances, routines, values)
//! - `Handler`: the capability contract application objects implement
//! - `Resolver`: the dispatcher, yielding a `Crumb` per step
//! - `Trace`: route discovery, listing what one step could reach
//!
//! Failing to resolve is not an error. The last crumb says whether the walk
//! ended on something usable, and the unconsumed rest of the path is left
//! for the caller.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use objdispatch_core::{Class, Handler, Node, Resolver, Routine, Value};
//!
//! struct Root;
//!
//! impl Handler for Root {
//!     fn type_name(&self) -> &str {
//!         "Root"
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
//! let crumbs: Vec<_> = Resolver::default().resolve(None, root, "/hello").collect();
//!
//! let last = crumbs.last().unwrap();
//! assert!(last.endpoint);
//! assert_eq!(last.handler.call(&[]).unwrap(), Value::from("Hello world."));
//! ```

mod config;
mod context;
mod crumb;
mod error;
mod handler;
mod node;
mod path;
mod probe;
mod resolver;
mod routine;
mod value;
pub mod verb;

pub use config::{DispatchConfig, PROTECT_ENV};
pub use context::Context;
pub use crumb::Crumb;
pub use error::{Error, Result};
pub use handler::{Fallback, Handler, Returns};
pub use node::{Lookup, Node};
pub use path::{Lookback, Segments, SEPARATOR};
pub use probe::{Trace, FALLBACK_LABEL};
pub use resolver::{Dispatch, Resolver, PRIVATE_PREFIX};
pub use routine::{Class, Routine};
pub use value::Value;
pub use verb::{Options, Verb};
