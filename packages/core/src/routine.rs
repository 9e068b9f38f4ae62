//! Callable leaves and lazily instantiated handler classes.

use std::fmt;
use std::sync::Arc;

use crate::{Context, Error, Handler, Result, Value};

type Body = dyn Fn(&[String]) -> Result<Value> + Send + Sync;
type Factory = dyn Fn(Option<&Context>) -> Arc<dyn Handler> + Send + Sync;

/// A named callable: a bound method, a free function, or a call-hook.
///
/// Routines are leaves of the dispatch graph. Dispatch never descends into
/// one; reaching a routine ends the walk with the routine as the handler.
///
/// The declared parameter count excludes any receiver. It drives both
/// argument checking on [`Routine::invoke`] and the accepted verb set
/// (see [`Verb`](crate::Verb)).
#[derive(Clone)]
pub struct Routine {
    name: Arc<str>,
    params: usize,
    variadic: bool,
    builtin: bool,
    body: Arc<Body>,
}

impl Routine {
    /// Create a routine taking exactly `params` arguments.
    pub fn new<F>(name: impl Into<String>, params: usize, body: F) -> Self
    where
        F: Fn(&[String]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            params,
            variadic: false,
            builtin: false,
            body: Arc::new(body),
        }
    }

    /// Accept any number of arguments beyond the declared ones.
    #[must_use]
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Mark this routine as an opaque runtime primitive.
    ///
    /// Protecting dispatchers refuse to use a built-in as a lookup base.
    #[must_use]
    pub fn builtin(mut self) -> Self {
        self.builtin = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter count, not counting a variadic tail.
    pub fn params(&self) -> usize {
        self.params
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    /// Call the routine with positional string arguments.
    pub fn invoke(&self, args: &[String]) -> Result<Value> {
        let accepted = if self.variadic {
            args.len() >= self.params
        } else {
            args.len() == self.params
        };

        if !accepted {
            return Err(Error::Arguments {
                routine: self.name.to_string(),
                expected: self.params,
                given: args.len(),
            });
        }

        (self.body)(args)
    }

    /// Whether two routine handles share the same body.
    pub fn ptr_eq(&self, other: &Routine) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Routine")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("variadic", &self.variadic)
            .field("builtin", &self.builtin)
            .finish()
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.params)?;
        if self.variadic {
            write!(f, "+")?;
        }
        Ok(())
    }
}

/// A handler type that has not been instantiated yet.
///
/// Classes may sit in the graph as attribute values. Dispatch instantiates
/// one only when it is about to look something up on it, handing over the
/// request context if there is one.
#[derive(Clone)]
pub struct Class {
    name: Arc<str>,
    factory: Arc<Factory>,
}

impl Class {
    pub fn new<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(Option<&Context>) -> Arc<dyn Handler> + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            factory: Arc::new(factory),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a fresh instance.
    pub fn instantiate(&self, context: Option<&Context>) -> Arc<dyn Handler> {
        (self.factory)(context)
    }

    pub fn ptr_eq(&self, other: &Class) -> bool {
        Arc::ptr_eq(&self.factory, &other.factory)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Class").field(&self.name).finish()
    }
}
