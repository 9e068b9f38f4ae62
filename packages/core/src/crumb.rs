//! Visitation records produced by dispatch and tracing.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::verb::Options;
use crate::Node;

/// One step of a dispatch walk, or one child found by tracing.
#[derive(Clone, Debug)]
pub struct Crumb {
    /// Where the walk started; the same for every crumb of a run.
    pub root: Node,
    /// The segment that led to `handler`, absent for the root.
    pub path: Option<String>,
    /// The node reached at this step.
    pub handler: Node,
    /// Whether `handler` is a final destination.
    pub endpoint: bool,
    /// Accepted verbs, for callable endpoints only.
    pub options: Option<Options>,
}

impl Crumb {
    /// An intermediate step.
    pub fn step(root: Node, path: Option<String>, handler: Node) -> Self {
        Self {
            root,
            path,
            handler,
            endpoint: false,
            options: None,
        }
    }

    /// A resolved destination.
    pub fn endpoint(root: Node, path: Option<String>, handler: Node) -> Self {
        let options = handler.options();
        Self {
            root,
            path,
            handler,
            endpoint: true,
            options,
        }
    }

    /// Where a walk got stuck: an endpoint only if the handler is callable.
    pub fn terminal(root: Node, path: Option<String>, handler: Node) -> Self {
        if handler.is_callable() {
            Self::endpoint(root, path, handler)
        } else {
            Self::step(root, path, handler)
        }
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

fn kind(node: &Node) -> &'static str {
    match node {
        Node::Class(_) => "class",
        Node::Object(_) => "object",
        Node::Routine(_) => "routine",
        Node::Value(_) => "value",
        Node::Fallback(_) => "fallback",
    }
}

impl Serialize for Crumb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Crumb", 6)?;
        state.serialize_field("root", &self.root.to_string())?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("handler", &self.handler.to_string())?;
        state.serialize_field("kind", kind(&self.handler))?;
        state.serialize_field("endpoint", &self.endpoint)?;
        state.serialize_field("options", &self.options)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Routine, Value};
    use serde_json::json;

    fn root() -> Node {
        Node::from(Value::from("root"))
    }

    #[test]
    fn step_is_never_endpoint() {
        let routine = Node::from(Routine::new("foo", 0, |_| Ok(Value::Null)));
        let crumb = Crumb::step(root(), Some("foo".to_string()), routine);
        assert!(!crumb.endpoint);
        assert!(crumb.options.is_none());
        assert_eq!(crumb.path(), Some("foo"));
    }

    #[test]
    fn endpoint_infers_options_when_callable() {
        let routine = Node::from(Routine::new("update", 2, |_| Ok(Value::Null)));
        let crumb = Crumb::endpoint(root(), None, routine);
        assert!(crumb.endpoint);
        assert_eq!(crumb.options.unwrap().len(), 2);

        let value = Crumb::endpoint(root(), None, Node::from(Value::from(true)));
        assert!(value.endpoint);
        assert!(value.options.is_none());
    }

    #[test]
    fn terminal_follows_callability() {
        let stuck = Crumb::terminal(root(), None, Node::from(Value::Null));
        assert!(!stuck.endpoint);

        let routine = Node::from(Routine::new("r", 0, |_| Ok(Value::Null)));
        let callable = Crumb::terminal(root(), None, routine);
        assert!(callable.endpoint);
        assert!(callable.options.is_some());
    }

    #[test]
    fn serializes_flat_record() {
        let routine = Node::from(Routine::new("foo", 1, |_| Ok(Value::Null)));
        let crumb = Crumb::endpoint(root(), Some("foo".to_string()), routine);
        let value = serde_json::to_value(&crumb).unwrap();
        assert_eq!(
            value,
            json!({
                "root": "\"root\"",
                "path": "foo",
                "handler": "routine foo/1",
                "kind": "routine",
                "endpoint": true,
                "options": ["GET"],
            })
        );
    }
}
