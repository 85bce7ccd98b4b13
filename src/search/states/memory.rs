use crate::map::Tag;
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{self, Debug, Formatter};

pub const TYPICAL_NUM_WAYPOINTS: usize = 4;

/// The part of the path history a problem needs to decide its goal test and
/// future transitions. A [`Memory`] is always canonical: its tags are sorted
/// and free of duplicates, so two paths that collected the same tags in a
/// different order produce equal (and equally hashed) memories.
///
/// History-independent problems use [`Memory::empty`] as a fixed sentinel.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Memory {
    tags: SmallVec<[Tag; TYPICAL_NUM_WAYPOINTS]>,
}

impl Memory {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a canonical memory from tags in any order, possibly repeated.
    pub fn from_tags(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().sorted().dedup().collect(),
        }
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.binary_search(tag).is_ok()
    }

    pub fn is_superset_of<'a>(&self, tags: impl IntoIterator<Item = &'a Tag>) -> bool {
        tags.into_iter().all(|tag| self.contains(tag))
    }

    /// The canonical union of this memory with `tags`. Returns a clone of
    /// `self` when nothing new is added.
    pub fn union(&self, tags: impl IntoIterator<Item = Tag>) -> Self {
        let mut tags = tags.into_iter().filter(|tag| !self.contains(tag)).peekable();
        if tags.peek().is_none() {
            return self.clone();
        }
        Self::from_tags(self.tags.iter().copied().chain(tags))
    }
}

impl Debug for Memory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.tags.iter()).finish()
    }
}
