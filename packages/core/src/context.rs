//! The opaque request context handed to handler factories.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Request context passed through dispatch untouched.
///
/// Dispatch never inspects the context. It only forwards it to every
/// [`Class`](crate::Class) instantiated along the walk. Handlers that care
/// about its contents recover them with [`Context::downcast_ref`].
#[derive(Clone)]
pub struct Context(Arc<dyn Any + Send + Sync>);

impl Context {
    /// Wrap an arbitrary value as a context.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Context(Arc::new(value))
    }

    /// Borrow the wrapped value if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Check whether two contexts share the same underlying value.
    pub fn ptr_eq(&self, other: &Context) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Context(..)")
    }
}
