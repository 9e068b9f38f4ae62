//! Path resolution by attribute descent.
//!
//! A [`Resolver`] walks from a root node through one attribute per path
//! segment, yielding a [`Crumb`] for every step. The walk is lazy: each
//! call to `next()` performs at most one lookup, and dropping the
//! [`Dispatch`] abandons it.

use std::iter::FusedIterator;

use tracing::debug;

use crate::path::Lookback;
use crate::{Context, Crumb, Lookup, Node, Segments};

/// Prefix marking an attribute as private by convention.
pub const PRIVATE_PREFIX: &str = "_";

/// An object dispatcher.
///
/// The only configuration is whether private names and built-in routines
/// are off limits. All per-call state lives in the returned iterator, so a
/// resolver can be shared freely between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolver {
    protect: bool,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Resolver {
    pub fn new(protect: bool) -> Self {
        let resolver = Self { protect };
        debug!(dispatcher = ?resolver, "Object dispatcher prepared.");
        resolver
    }

    /// Whether private names are rejected.
    pub fn protect(&self) -> bool {
        self.protect
    }

    /// Check a segment against the private-name convention.
    pub fn is_protected(&self, name: &str) -> bool {
        self.protect && name.starts_with(PRIVATE_PREFIX)
    }

    /// Resolve `path` starting at `root`.
    ///
    /// Classes met along the way are instantiated with `context` right
    /// before something is looked up on them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use objdispatch_core::{Node, Resolver, Value};
    ///
    /// let crumbs: Vec<_> = Resolver::default()
    ///     .resolve(None, Node::from(Value::from("leaf")), "/")
    ///     .collect();
    /// assert_eq!(crumbs.len(), 1);
    /// assert!(crumbs[0].endpoint);
    /// ```
    pub fn resolve(
        &self,
        context: Option<Context>,
        root: impl Into<Node>,
        path: impl Into<Segments>,
    ) -> Dispatch {
        let root = root.into();
        let path = path.into();

        debug!(
            dispatcher = ?self,
            context = ?context,
            root = %root,
            path = %path,
            "Preparing object dispatch."
        );

        Dispatch {
            protect: self.protect,
            context,
            current: root.clone(),
            root,
            path: Lookback::new(path),
            done: false,
        }
    }
}

/// A dispatch in progress.
///
/// Yields the intermediate crumbs in path order, then exactly one terminal
/// crumb. Whatever the walk did not consume stays available through
/// [`Dispatch::remaining`].
#[derive(Debug)]
pub struct Dispatch {
    protect: bool,
    context: Option<Context>,
    root: Node,
    current: Node,
    path: Lookback,
    done: bool,
}

impl Dispatch {
    /// The unconsumed part of the path.
    pub fn remaining(&self) -> &Segments {
        self.path.remaining()
    }

    pub fn into_remaining(self) -> Segments {
        self.path.into_remaining()
    }

    /// The node the walk currently stands on.
    pub fn current(&self) -> &Node {
        &self.current
    }

    fn previous(&self) -> Option<String> {
        self.path.previous().map(str::to_string)
    }

    fn instantiate_current(&mut self) {
        if let Node::Class(class) = &self.current {
            let instance = Node::Object(class.instantiate(self.context.as_ref()));
            debug!(instance = %instance, "Instantiated class during descent.");
            self.current = instance;
        }
    }

    /// The path ran out: wherever we are is the endpoint.
    fn exhausted(&mut self) -> Crumb {
        self.done = true;
        self.instantiate_current();

        debug!(handler = %self.current, "Dispatch complete due to exhausted path.");

        Crumb::endpoint(self.root.clone(), self.previous(), self.current.clone())
    }

    /// The walk stopped before `attribute`, which stays in the path.
    fn interrupted(&mut self, attribute: &str) -> Crumb {
        self.done = true;
        let crumb = Crumb::terminal(self.root.clone(), self.previous(), self.current.clone());

        debug!(
            handler = %self.current,
            endpoint = crumb.endpoint,
            name = ?crumb.path,
            attribute = attribute,
            "Dispatch interrupted attempting to resolve attribute."
        );

        crumb
    }
}

impl Iterator for Dispatch {
    type Item = Crumb;

    fn next(&mut self) -> Option<Crumb> {
        if self.done {
            return None;
        }

        let Some(segment) = self.path.peek().map(str::to_string) else {
            return Some(self.exhausted());
        };

        self.instantiate_current();

        if self.protect && segment.starts_with(PRIVATE_PREFIX) {
            debug!(name = %segment, "Attempt made to descend into protected attribute.");
            return Some(self.interrupted(&segment));
        }

        if self.protect && self.current.is_builtin() {
            debug!(handler = %self.current, "Refusing to descend through built-in routine.");
            return Some(self.interrupted(&segment));
        }

        match self.current.attribute(&segment) {
            Lookup::Missing => Some(self.interrupted(&segment)),
            Lookup::Found(next) => {
                debug!(
                    source = %self.current,
                    name = %segment,
                    value = %next,
                    "Retrieved attribute."
                );

                let handler = std::mem::replace(&mut self.current, next);
                let crumb = Crumb::step(self.root.clone(), self.previous(), handler);
                self.path.consume();
                Some(crumb)
            }
        }
    }
}

impl FusedIterator for Dispatch {}
