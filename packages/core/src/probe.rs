//! Trace mode: list what dispatch could reach from a node in one step.
//!
//! Tracing consumes no path. It reads the handler's manifest and reports
//! every child the way [`Resolver::resolve`] would find it, which makes it
//! the basis for route listings and for checking fallback declarations.

use std::collections::{BTreeSet, VecDeque};
use std::iter::FusedIterator;
use std::sync::Arc;

use tracing::debug;

use crate::{verb, Context, Crumb, Handler, Node, Resolver, Returns, Routine};

/// Path label standing for "any name not otherwise matched".
pub const FALLBACK_LABEL: &str = "{name}";

impl Resolver {
    /// Enumerate the immediate children of `obj`.
    ///
    /// A callable `obj` (a routine, or an instance with a call-hook) has no
    /// children: the trace is a single endpoint crumb. A class is
    /// instantiated once to read its manifest, but nested classes are left
    /// alone. Children come out as the call-hook, then the fallback, then
    /// the members in lexical order.
    pub fn trace(&self, context: Option<Context>, obj: impl Into<Node>) -> Trace {
        let root = obj.into();
        let mut pending = VecDeque::new();

        debug!(dispatcher = ?self, root = %root, "Preparing dispatch trace.");

        let subject = match &root {
            Node::Class(class) => Some(class.instantiate(context.as_ref())),
            Node::Object(handler) => Some(handler.clone()),
            _ => None,
        };

        if !root.is_class() && root.is_callable() {
            pending.push_back(Probe::Callable);
        } else if let Some(handler) = &subject {
            if let Some(hook) = handler.call_hook() {
                pending.push_back(Probe::CallHook(hook));
            }

            if handler.fallback().is_some() {
                pending.push_back(Probe::Fallback);
            }

            let names: BTreeSet<String> = handler
                .members()
                .into_iter()
                .filter(|name| !self.is_protected(name))
                .collect();
            pending.extend(names.into_iter().map(Probe::Member));
        }

        Trace {
            root,
            subject,
            pending,
        }
    }
}

enum Probe {
    Callable,
    CallHook(Routine),
    Fallback,
    Member(String),
}

/// A trace in progress.
pub struct Trace {
    root: Node,
    subject: Option<Arc<dyn Handler>>,
    pending: VecDeque<Probe>,
}

impl Trace {
    fn probe(&self, probe: Probe) -> Option<Crumb> {
        let root = self.root.clone();

        match probe {
            Probe::Callable => Some(Crumb::endpoint(root.clone(), None, root)),
            Probe::CallHook(hook) => Some(Crumb {
                handler: root.clone(),
                root,
                path: None,
                endpoint: true,
                options: Some(verb::infer(&hook)),
            }),
            Probe::Fallback => {
                let handler = self.subject.as_ref()?;
                let returns = handler.fallback()?.returns();
                let label = Some(FALLBACK_LABEL.to_string());

                debug!(handler = handler.type_name(), returns = ?returns, "Traced dynamic attribute fallback.");

                Some(match returns {
                    Returns::Routine(routine) => Crumb::endpoint(root, label, Node::Routine(routine)),
                    Returns::Class(class) => Crumb::step(root, label, Node::Class(class)),
                    Returns::Unknown => Crumb::step(root, label, Node::Fallback(handler.clone())),
                })
            }
            Probe::Member(name) => {
                let node = self.subject.as_ref()?.attribute(&name)?;
                if node.is_callable() && !node.is_class() {
                    Some(Crumb::endpoint(root, Some(name), node))
                } else {
                    Some(Crumb::step(root, Some(name), node))
                }
            }
        }
    }
}

impl Iterator for Trace {
    type Item = Crumb;

    fn next(&mut self) -> Option<Crumb> {
        while let Some(probe) = self.pending.pop_front() {
            if let Some(crumb) = self.probe(probe) {
                return Some(crumb);
            }
        }
        None
    }
}

impl FusedIterator for Trace {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Class, Fallback, Value, Verb};

    struct Catalog;

    impl Handler for Catalog {
        fn type_name(&self) -> &str {
            "Catalog"
        }

        fn members(&self) -> Vec<String> {
            ["view", "_secret", "title", "ghost", "item", "view"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        }

        fn attribute(&self, name: &str) -> Option<Node> {
            match name {
                "view" => Some(Node::from(Routine::new("view", 0, |_| Ok(Value::from("v"))))),
                "_secret" => Some(Node::from(Value::from(true))),
                "title" => Some(Node::from(Value::from("Catalog"))),
                "item" => Some(Node::from(Class::new("Item", |_| Arc::new(Catalog)))),
                _ => None,
            }
        }

        fn fallback(&self) -> Option<&dyn Fallback> {
            Some(self)
        }

        fn call_hook(&self) -> Option<Routine> {
            Some(Routine::new("call", 2, |_| Ok(Value::Null)))
        }
    }

    impl Fallback for Catalog {
        fn resolve(&self, _name: &str) -> Option<Node> {
            None
        }
    }

    fn catalog() -> Class {
        Class::new("Catalog", |_| Arc::new(Catalog))
    }

    fn labels(crumbs: &[Crumb]) -> Vec<Option<&str>> {
        crumbs.iter().map(Crumb::path).collect()
    }

    #[test]
    fn class_trace_lists_hooks_then_members() {
        let crumbs: Vec<_> = Resolver::default().trace(None, catalog()).collect();
        assert_eq!(
            labels(&crumbs),
            vec![None, Some("{name}"), Some("item"), Some("title"), Some("view")]
        );
    }

    #[test]
    fn call_hook_crumb_reports_class() {
        let crumbs: Vec<_> = Resolver::default().trace(None, catalog()).collect();
        let hook = &crumbs[0];
        assert!(hook.endpoint);
        assert!(hook.handler.is_class());
        assert_eq!(
            hook.options.clone().unwrap(),
            verb::Options::from([Verb::Get, Verb::Post])
        );
    }

    #[test]
    fn undeclared_fallback_reports_hook() {
        let crumbs: Vec<_> = Resolver::default().trace(None, catalog()).collect();
        let fallback = &crumbs[1];
        assert!(!fallback.endpoint);
        assert!(matches!(fallback.handler, Node::Fallback(_)));
    }

    #[test]
    fn classes_are_never_endpoints() {
        let crumbs: Vec<_> = Resolver::default().trace(None, catalog()).collect();
        let item = crumbs.iter().find(|c| c.path() == Some("item")).unwrap();
        assert!(!item.endpoint);
        assert!(item.options.is_none());

        let view = crumbs.iter().find(|c| c.path() == Some("view")).unwrap();
        assert!(view.endpoint);

        let title = crumbs.iter().find(|c| c.path() == Some("title")).unwrap();
        assert!(!title.endpoint);
    }

    #[test]
    fn unprotected_trace_includes_private_members() {
        let crumbs: Vec<_> = Resolver::new(false).trace(None, catalog()).collect();
        assert!(crumbs.iter().any(|c| c.path() == Some("_secret")));
    }

    #[test]
    fn callable_instance_is_single_endpoint() {
        let crumbs: Vec<_> = Resolver::default()
            .trace(None, Node::object(Catalog))
            .collect();
        assert_eq!(crumbs.len(), 1);
        assert!(crumbs[0].endpoint);
        assert_eq!(crumbs[0].path(), None);
        assert!(crumbs[0].options.is_some());
    }

    #[test]
    fn routine_is_single_endpoint() {
        let routine = Routine::new("go", 1, |_| Ok(Value::Null));
        let crumbs: Vec<_> = Resolver::default().trace(None, routine).collect();
        assert_eq!(crumbs.len(), 1);
        assert_eq!(
            crumbs[0].options.clone().unwrap(),
            verb::Options::from([Verb::Get])
        );
    }

    #[test]
    fn values_have_no_children() {
        let crumbs: Vec<_> = Resolver::default()
            .trace(None, Value::from("plain"))
            .collect();
        assert!(crumbs.is_empty());
    }

    #[test]
    fn declared_fallback_returns_shape_crumb() {
        struct Routed;

        impl Handler for Routed {
            fn type_name(&self) -> &str {
                "Routed"
            }
            fn attribute(&self, _name: &str) -> Option<Node> {
                None
            }
            fn fallback(&self) -> Option<&dyn Fallback> {
                Some(self)
            }
        }

        impl Fallback for Routed {
            fn resolve(&self, _name: &str) -> Option<Node> {
                None
            }
            fn returns(&self) -> Returns {
                Returns::Routine(Routine::new("show", 0, |_| Ok(Value::Null)))
            }
        }

        let crumbs: Vec<_> = Resolver::default()
            .trace(None, Node::object(Routed))
            .collect();
        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0].path(), Some(FALLBACK_LABEL));
        assert!(crumbs[0].endpoint);
        assert_eq!(crumbs[0].handler.as_routine().unwrap().name(), "show");
    }
}
