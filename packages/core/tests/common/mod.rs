//! Handler graphs shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use objdispatch_core::{Class, Context, Fallback, Handler, Node, Routine, Value};

pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// A CRUD-like site: /user is the collection, /user/<name> a person.

pub struct Person {
    username: String,
}

impl Handler for Person {
    fn type_name(&self) -> &str {
        "Person"
    }

    fn members(&self) -> Vec<String> {
        vec!["foo".to_string(), "_username".to_string()]
    }

    fn attribute(&self, name: &str) -> Option<Node> {
        let username = self.username.clone();
        match name {
            "foo" => Some(Node::from(Routine::new("foo", 0, move |_| {
                Ok(Value::from(format!("I'm also {}", username)))
            }))),
            "_username" => Some(Node::from(Value::from(username))),
            _ => None,
        }
    }

    fn call_hook(&self) -> Option<Routine> {
        let username = self.username.clone();
        Some(Routine::new("call", 0, move |_| {
            Ok(Value::from(format!("Hi, I'm {}", username)))
        }))
    }
}

pub struct People {
    pub context: Option<Context>,
}

impl Handler for People {
    fn type_name(&self) -> &str {
        "People"
    }

    fn attribute(&self, _name: &str) -> Option<Node> {
        None
    }

    fn fallback(&self) -> Option<&dyn Fallback> {
        Some(self)
    }

    fn call_hook(&self) -> Option<Routine> {
        Some(Routine::new("call", 0, |_| Ok(Value::from("I'm all people."))))
    }
}

impl Fallback for People {
    fn resolve(&self, username: &str) -> Option<Node> {
        Some(Node::object(Person {
            username: username.to_string(),
        }))
    }
}

pub struct Root {
    people_builds: Arc<AtomicUsize>,
}

impl Handler for Root {
    fn type_name(&self) -> &str {
        "Root"
    }

    fn members(&self) -> Vec<String> {
        vec!["user".to_string()]
    }

    fn attribute(&self, name: &str) -> Option<Node> {
        match name {
            "user" => Some(Node::from(people(self.people_builds.clone()))),
            _ => None,
        }
    }
}

pub fn people(builds: Arc<AtomicUsize>) -> Class {
    Class::new("People", move |ctx| {
        builds.fetch_add(1, Ordering::SeqCst);
        Arc::new(People {
            context: ctx.cloned(),
        })
    })
}

/// The site root; `builds` counts how often `People` is instantiated.
pub fn root_counting(builds: Arc<AtomicUsize>) -> Class {
    Class::new("Root", move |_| {
        Arc::new(Root {
            people_builds: builds.clone(),
        })
    })
}

pub fn root() -> Class {
    root_counting(Arc::new(AtomicUsize::new(0)))
}

// Sample graphs exercising protection, nesting, and call-hooks.

struct Baz;

impl Handler for Baz {
    fn type_name(&self) -> &str {
        "bar"
    }

    fn members(&self) -> Vec<String> {
        vec!["baz".to_string()]
    }

    fn attribute(&self, name: &str) -> Option<Node> {
        (name == "baz").then(|| Node::from(Routine::new("baz", 0, |_| Ok(Value::from("baz")))))
    }
}

struct Nest {
    name: &'static str,
    child: Option<Class>,
}

impl Handler for Nest {
    fn type_name(&self) -> &str {
        self.name
    }

    fn members(&self) -> Vec<String> {
        self.child
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    fn attribute(&self, name: &str) -> Option<Node> {
        self.child
            .as_ref()
            .filter(|c| c.name() == name)
            .map(|c| Node::from(c.clone()))
    }
}

fn foo_bar_baz() -> Class {
    Class::new("foo", |_| {
        Arc::new(Nest {
            name: "foo",
            child: Some(Class::new("bar", |_| Arc::new(Baz))),
        })
    })
}

struct Simple;

impl Handler for Simple {
    fn type_name(&self) -> &str {
        "Simple"
    }

    fn members(&self) -> Vec<String> {
        args(&["_protected", "static", "foo"])
    }

    fn attribute(&self, name: &str) -> Option<Node> {
        match name {
            "_protected" => Some(Node::from(Value::from(true))),
            "static" => Some(Node::from(Value::from("foo"))),
            "foo" => Some(Node::from(foo_bar_baz())),
            _ => None,
        }
    }
}

pub fn simple() -> Class {
    Class::new("Simple", |_| Arc::new(Simple))
}

fn join_args() -> Routine {
    Routine::new("call", 0, |args| Ok(Value::from(format!("/{}", args.join("/"))))).variadic()
}

struct CallableShallow;

impl Handler for CallableShallow {
    fn type_name(&self) -> &str {
        "CallableShallow"
    }

    fn attribute(&self, _name: &str) -> Option<Node> {
        None
    }

    fn call_hook(&self) -> Option<Routine> {
        Some(join_args())
    }
}

pub fn callable_shallow() -> Class {
    Class::new("CallableShallow", |_| Arc::new(CallableShallow))
}

struct EchoMethod;

impl Handler for EchoMethod {
    fn type_name(&self) -> &str {
        "bar"
    }

    fn attribute(&self, _name: &str) -> Option<Node> {
        None
    }

    fn call_hook(&self) -> Option<Routine> {
        Some(Routine::new("call", 1, |args| Ok(Value::from(args[0].clone()))))
    }
}

pub fn callable_deep() -> Class {
    Class::new("CallableDeep", |_| {
        Arc::new(Nest {
            name: "CallableDeep",
            child: Some(Class::new("foo", |_| {
                Arc::new(Nest {
                    name: "foo",
                    child: Some(Class::new("bar", |_| Arc::new(EchoMethod))),
                })
            })),
        })
    })
}

struct CallableMixed;

impl Handler for CallableMixed {
    fn type_name(&self) -> &str {
        "CallableMixed"
    }

    fn members(&self) -> Vec<String> {
        vec!["foo".to_string()]
    }

    fn attribute(&self, name: &str) -> Option<Node> {
        (name == "foo").then(|| Node::from(foo_bar_baz()))
    }

    fn call_hook(&self) -> Option<Routine> {
        Some(join_args())
    }
}

pub fn callable_mixed() -> Class {
    Class::new("CallableMixed", |_| Arc::new(CallableMixed))
}

/// A bare function used directly as a dispatch root.
pub fn function() -> Routine {
    Routine::new("function", 0, |args| {
        Ok(Value::from(format!("function /{}", args.join("/"))))
    })
    .variadic()
}
