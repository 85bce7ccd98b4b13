//! Contains the identifiers the map hands out: [`Location`] and [`Tag`]. Both
//! are interned strings, so copying, hashing and comparing them is cheap.

use internment::Intern;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

/// An opaque identifier naming a vertex of the map graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location(Intern<String>);

impl Location {
    #[inline(always)]
    pub fn new(name: &str) -> Self {
        Self(Intern::new(name.to_owned()))
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Location {
    #[inline(always)]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// Order by name rather than by interned pointer, so sorted collections are
// stable across runs.
impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Hide the internment details from the user.
impl Debug for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

/// A `key=value` label attached to zero or more locations.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(Intern<String>);

impl Tag {
    /// Wrap an already formatted `key=value` string. See [`make_tag`] to build
    /// one from its parts.
    #[inline(always)]
    pub fn new(tag: &str) -> Self {
        Self(Intern::new(tag.to_owned()))
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn key(&self) -> &str {
        self.as_str()
            .split_once('=')
            .map_or(self.as_str(), |(key, _)| key)
    }

    pub fn value(&self) -> Option<&str> {
        self.as_str().split_once('=').map(|(_, value)| value)
    }
}

impl From<&str> for Tag {
    #[inline(always)]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

/// Build the canonical `key=value` form of a tag.
pub fn make_tag(key: &str, value: &str) -> Tag {
    Tag::new(&format!("{key}={value}"))
}
