//! Accepted request verbs, inferred from a routine's declared arity.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::Routine;

/// A request verb an endpoint accepts.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The verb set of an endpoint.
pub type Options = BTreeSet<Verb>;

/// Classify a routine's accepted verbs.
///
/// More than one declared parameter means the endpoint takes submitted data
/// as well as reads: `{GET, POST}`. Anything less is read-only: `{GET}`. A
/// variadic tail does not count toward the declared parameters.
pub fn infer(routine: &Routine) -> Options {
    let mut options = Options::new();
    options.insert(Verb::Get);
    if routine.params() > 1 {
        options.insert(Verb::Post);
    }
    options
}
