// src/shared/query/engine.rs

use std::collections::HashSet;

//
// ──────────────────────────────────────────────────────────
// Item capabilities
// ──────────────────────────────────────────────────────────
//

/// Anything addressable by a stable string id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Anything carrying an ordered tag sequence.
pub trait Tagged {
    fn tags(&self) -> &[String];
}

/// Anything that can be flagged for special placement in a listing.
pub trait Featured {
    fn is_featured(&self) -> bool;
}

//
// ──────────────────────────────────────────────────────────
// Predicate
// ──────────────────────────────────────────────────────────
//

pub trait Predicate<T: ?Sized> {
    fn matches(&self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

//
// ──────────────────────────────────────────────────────────
// Operations
// ──────────────────────────────────────────────────────────
//

/// Stable filter: every matching item, in original relative order.
pub fn filter<'a, T, P>(items: &'a [T], predicate: &P) -> Vec<&'a T>
where
    P: Predicate<T> + ?Sized,
{
    items.iter().filter(|item| predicate.matches(item)).collect()
}

/// Distinct tags across the collection in first-seen order.
/// Equality is exact; casing is not normalized.
pub fn distinct_tags<T: Tagged>(items: &[T]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();

    for tag in items.iter().flat_map(|item| item.tags()) {
        if seen.insert(tag.as_str()) {
            out.push(tag.clone());
        }
    }

    out
}

pub fn first_featured<T: Featured>(items: &[T]) -> Option<&T> {
    items.iter().find(|item| item.is_featured())
}

pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// Plain lowercase substring test. `needle_lower` must already be lowercased.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
