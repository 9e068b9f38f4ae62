//! Request paths as ordered segment sequences.

use std::collections::VecDeque;
use std::fmt;

/// Separator between segments in string paths.
pub const SEPARATOR: char = '/';

/// A normalized request path.
///
/// Segments are consumed from the front while dispatch walks the object
/// graph, so whatever is left after a walk is the part of the path that was
/// not resolved.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Segments {
    pub components: VecDeque<String>,
}

impl Segments {
    /// Parse a `/`-separated path string.
    ///
    /// # Path Syntax
    ///
    /// - Trailing separators are dropped (`foo/bar/` is `foo/bar`)
    /// - Exactly one leading separator is dropped (`/foo` is `foo`)
    /// - Interior empty segments are kept; no attribute is named by the
    ///   empty string, so dispatch stops there
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objdispatch_core::Segments;
    ///
    /// let path = Segments::parse("/user/GothAlice/");
    /// assert_eq!(path.len(), 2);
    /// assert_eq!(&path[0], "user");
    ///
    /// assert!(Segments::parse("/").is_empty());
    /// assert!(Segments::parse("").is_empty());
    /// ```
    pub fn parse(s: &str) -> Self {
        Self::from_components(s.split(SEPARATOR).map(str::to_string))
    }

    /// Build a path from already-split segments, applying the same
    /// normalization as [`Segments::parse`].
    pub fn from_components<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut components: VecDeque<String> = components.into_iter().map(Into::into).collect();

        while components.back().is_some_and(|c| c.is_empty()) {
            components.pop_back();
        }

        if components.front().is_some_and(|c| c.is_empty()) {
            components.pop_front();
        }

        Segments { components }
    }

    /// Check if this path is empty (the root).
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the number of segments.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Iterate over segments.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.components.iter()
    }

    /// The next segment to be examined.
    pub fn front(&self) -> Option<&str> {
        self.components.front().map(String::as_str)
    }

    /// Remove and return the next segment.
    pub fn pop_front(&mut self) -> Option<String> {
        self.components.pop_front()
    }

    /// Copy the segments out as a vector, e.g. as call arguments.
    pub fn to_vec(&self) -> Vec<String> {
        self.components.iter().cloned().collect()
    }
}

impl fmt::Display for Segments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.components {
            write!(f, "{}{}", SEPARATOR, component)?;
        }
        if self.components.is_empty() {
            write!(f, "{}", SEPARATOR)?;
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for Segments {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.components[i]
    }
}

impl From<&str> for Segments {
    fn from(s: &str) -> Self {
        Segments::parse(s)
    }
}

impl From<String> for Segments {
    fn from(s: String) -> Self {
        Segments::parse(&s)
    }
}

impl From<&String> for Segments {
    fn from(s: &String) -> Self {
        Segments::parse(s)
    }
}

impl From<Vec<String>> for Segments {
    fn from(v: Vec<String>) -> Self {
        Segments::from_components(v)
    }
}

impl From<Vec<&str>> for Segments {
    fn from(v: Vec<&str>) -> Self {
        Segments::from_components(v)
    }
}

impl From<&[&str]> for Segments {
    fn from(v: &[&str]) -> Self {
        Segments::from_components(v.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Segments {
    fn from(v: [&str; N]) -> Self {
        Segments::from_components(v)
    }
}

impl From<VecDeque<String>> for Segments {
    fn from(v: VecDeque<String>) -> Self {
        Segments::from_components(v)
    }
}

/// A cursor over a path that remembers the last consumed segment.
///
/// Dispatch needs both the segment being examined and the one that led to
/// the current object. The examined segment stays in the path until it is
/// explicitly consumed, so a walk that stops early leaves it for the caller.
#[derive(Clone, Debug, Default)]
pub struct Lookback {
    remaining: Segments,
    previous: Option<String>,
}

impl Lookback {
    pub fn new(path: Segments) -> Self {
        Self {
            remaining: path,
            previous: None,
        }
    }

    /// The segment examined next, still unconsumed.
    pub fn peek(&self) -> Option<&str> {
        self.remaining.front()
    }

    /// The most recently consumed segment.
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Consume the examined segment; it becomes the previous one.
    pub fn consume(&mut self) {
        if let Some(segment) = self.remaining.pop_front() {
            self.previous = Some(segment);
        }
    }

    /// The unconsumed part of the path.
    pub fn remaining(&self) -> &Segments {
        &self.remaining
    }

    pub fn into_remaining(self) -> Segments {
        self.remaining
    }
}

/// Macro for building paths from string literals.
///
/// # Example
///
/// ```rust
/// use objdispatch_core::path;
///
/// let p = path!("/user/GothAlice");
/// assert_eq!(p.len(), 2);
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Segments::parse($s)
    };
}
