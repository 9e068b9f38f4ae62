//! Nodes of the dispatch graph and the attribute lookup primitive.

use std::fmt;
use std::sync::Arc;

use crate::verb::{self, Options};
use crate::{Class, Context, Error, Handler, Result, Routine, Value};

/// Anything dispatch can land on.
#[derive(Clone)]
pub enum Node {
    /// A handler type awaiting instantiation.
    Class(Class),
    /// A live handler instance.
    Object(Arc<dyn Handler>),
    /// A callable leaf.
    Routine(Routine),
    /// A plain attribute value.
    Value(Value),
    /// The dynamic-attribute hook of an instance, as reported by tracing.
    Fallback(Arc<dyn Handler>),
}

impl Node {
    /// Wrap a handler instance.
    pub fn object<H: Handler + 'static>(handler: H) -> Self {
        Node::Object(Arc::new(handler))
    }

    pub fn is_class(&self) -> bool {
        matches!(self, Node::Class(_))
    }

    /// Whether calling this node means anything.
    ///
    /// Classes count as callable (calling one builds an instance), as do
    /// routines, fallback hooks, and instances with a call-hook.
    pub fn is_callable(&self) -> bool {
        match self {
            Node::Class(_) | Node::Routine(_) | Node::Fallback(_) => true,
            Node::Object(handler) => handler.call_hook().is_some(),
            Node::Value(_) => false,
        }
    }

    /// Whether this is an opaque runtime primitive.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Node::Routine(r) if r.is_builtin())
    }

    /// Name of the underlying type.
    pub fn type_name(&self) -> &str {
        match self {
            Node::Class(class) => class.name(),
            Node::Object(handler) | Node::Fallback(handler) => handler.type_name(),
            Node::Routine(routine) => routine.name(),
            Node::Value(value) => value.kind(),
        }
    }

    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Node::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_handler(&self) -> Option<&Arc<dyn Handler>> {
        match self {
            Node::Object(handler) => Some(handler),
            _ => None,
        }
    }

    pub fn as_routine(&self) -> Option<&Routine> {
        match self {
            Node::Routine(routine) => Some(routine),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Node::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Instantiate a class; any other node is returned as is.
    pub fn instantiate(&self, context: Option<&Context>) -> Node {
        match self {
            Node::Class(class) => Node::Object(class.instantiate(context)),
            other => other.clone(),
        }
    }

    /// Look up an attribute by name.
    ///
    /// Ordinary attributes win; the handler's fallback, if any, is only
    /// consulted when they miss. Routines, values, classes, and hooks carry
    /// no attributes of their own.
    pub fn attribute(&self, name: &str) -> Lookup {
        match self {
            Node::Object(handler) => handler
                .attribute(name)
                .or_else(|| handler.fallback().and_then(|f| f.resolve(name)))
                .into(),
            _ => Lookup::Missing,
        }
    }

    /// The verbs this node accepts as an endpoint.
    ///
    /// Only routines and instances with a call-hook have an options set;
    /// classes never do.
    pub fn options(&self) -> Option<Options> {
        match self {
            Node::Routine(routine) => Some(verb::infer(routine)),
            Node::Object(handler) => handler.call_hook().map(|hook| verb::infer(&hook)),
            _ => None,
        }
    }

    /// Invoke this node with positional arguments.
    pub fn call(&self, args: &[String]) -> Result<Value> {
        match self {
            Node::Routine(routine) => routine.invoke(args),
            Node::Object(handler) => match handler.call_hook() {
                Some(hook) => hook.invoke(args),
                None => Err(Error::NotCallable {
                    handler: self.to_string(),
                }),
            },
            _ => Err(Error::NotCallable {
                handler: self.to_string(),
            }),
        }
    }

    /// Identity comparison: the same instance, class, or routine.
    pub fn same(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Class(a), Node::Class(b)) => a.ptr_eq(b),
            (Node::Object(a), Node::Object(b)) | (Node::Fallback(a), Node::Fallback(b)) => {
                Arc::ptr_eq(a, b)
            }
            (Node::Routine(a), Node::Routine(b)) => a.ptr_eq(b),
            (Node::Value(a), Node::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Class(class) => write!(f, "class {}", class.name()),
            Node::Object(handler) => write!(f, "{} instance", handler.type_name()),
            Node::Routine(routine) => write!(f, "routine {}", routine),
            Node::Value(value) => write!(f, "{}", value),
            Node::Fallback(handler) => write!(f, "{} fallback", handler.type_name()),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Class(class) => f.debug_tuple("Class").field(&class.name()).finish(),
            Node::Object(handler) => f.debug_tuple("Object").field(&handler.type_name()).finish(),
            Node::Routine(routine) => f.debug_tuple("Routine").field(routine).finish(),
            Node::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Node::Fallback(handler) => f
                .debug_tuple("Fallback")
                .field(&handler.type_name())
                .finish(),
        }
    }
}

impl From<Class> for Node {
    fn from(class: Class) -> Self {
        Node::Class(class)
    }
}

impl From<Arc<dyn Handler>> for Node {
    fn from(handler: Arc<dyn Handler>) -> Self {
        Node::Object(handler)
    }
}

impl From<Routine> for Node {
    fn from(routine: Routine) -> Self {
        Node::Routine(routine)
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::Value(value)
    }
}

/// Result of an attribute lookup.
///
/// `Missing` is the "no value" sentinel: it is distinct from every value an
/// attribute can hold, [`Value::Null`] and the empty string included.
#[derive(Clone, Debug)]
pub enum Lookup {
    Found(Node),
    Missing,
}

impl Lookup {
    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing)
    }

    pub fn found(self) -> Option<Node> {
        match self {
            Lookup::Found(node) => Some(node),
            Lookup::Missing => None,
        }
    }
}

impl From<Option<Node>> for Lookup {
    fn from(node: Option<Node>) -> Self {
        match node {
            Some(node) => Lookup::Found(node),
            None => Lookup::Missing,
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Found(node) => write!(f, "{}", node),
            Lookup::Missing => write!(f, "<no value>"),
        }
    }
}
