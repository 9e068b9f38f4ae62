//! The demo site the CLI inspects.
//!
//! ```text
//! /                      Root
//! /about                 static value
//! /_secret               private value
//! /search/<q>/<page>     two-parameter routine (GET, POST)
//! /user                  People collection, callable
//! /user/<name>           Person, resolved by fallback
//! /user/<name>/foo       routine
//! /user/<name>/rename    two-parameter routine
//! ```

use std::sync::Arc;

use objdispatch_core::{Class, Fallback, Handler, Node, Returns, Routine, Value};

pub struct Person {
    username: String,
}

impl Person {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl Handler for Person {
    fn type_name(&self) -> &str {
        "Person"
    }

    fn members(&self) -> Vec<String> {
        ["foo", "rename", "_username"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn attribute(&self, name: &str) -> Option<Node> {
        let username = self.username.clone();
        match name {
            "foo" => Some(Node::from(Routine::new("foo", 0, move |_| {
                Ok(Value::from(format!("I'm also {}", username)))
            }))),
            "rename" => Some(Node::from(Routine::new("rename", 2, move |args| {
                Ok(Value::from(format!(
                    "{} is now {} {}",
                    username, args[0], args[1]
                )))
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

pub struct People;

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
        Some(Node::object(Person::new(username)))
    }

    fn returns(&self) -> Returns {
        Returns::Class(person())
    }
}

/// Stand-in class for tracing what the people fallback produces.
fn person() -> Class {
    Class::new("Person", |_| Arc::new(Person::new("{name}")))
}

pub struct Root;

impl Handler for Root {
    fn type_name(&self) -> &str {
        "Root"
    }

    fn members(&self) -> Vec<String> {
        ["user", "about", "search", "_secret"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn attribute(&self, name: &str) -> Option<Node> {
        match name {
            "user" => Some(Node::from(Class::new("People", |_| Arc::new(People)))),
            "about" => Some(Node::from(Value::from("An object dispatch demo."))),
            "search" => Some(Node::from(Routine::new("search", 2, |args| {
                Ok(Value::from(format!(
                    "Results for {:?}, page {}",
                    args[0], args[1]
                )))
            }))),
            "_secret" => Some(Node::from(Value::from("hunter2"))),
            _ => None,
        }
    }
}

/// The site root class.
pub fn root() -> Class {
    Class::new("Root", |_| Arc::new(Root))
}
