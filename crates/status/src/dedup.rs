//! Collapsing repeated entries.

use std::collections::HashMap;

use crate::StampedEntry;

/// Collapses entries with identical rendered text.
///
/// Distinct entries keep the order in which they were first seen. An entry
/// that occurred more than once is kept once with ` (xN)` appended to its
/// message; entries seen once are returned unchanged.
///
/// # Examples
///
/// ```
/// use status::{StampedEntry, deduplicate};
///
/// let x = StampedEntry::from_parts("a.rs:1", "x");
/// let y = StampedEntry::from_parts("a.rs:2", "y");
///
/// let collapsed = deduplicate(&[x.clone(), y.clone(), x]);
/// let rendered: Vec<_> = collapsed.iter().map(StampedEntry::rendered).collect();
/// assert_eq!(rendered, ["a.rs:1: x (x2)", "a.rs:2: y"]);
/// ```
#[must_use]
pub fn deduplicate(entries: &[StampedEntry]) -> Vec<StampedEntry> {
    let mut counts: HashMap<String, usize> = HashMap::with_capacity(entries.len());
    let mut first_seen: Vec<(String, &StampedEntry)> = Vec::new();

    for entry in entries {
        let rendered = entry.rendered();
        let count = counts.entry(rendered.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push((rendered, entry));
        }
        *count += 1;
    }

    first_seen
        .into_iter()
        .map(|(rendered, entry)| match counts.get(&rendered) {
            Some(&count) if count > 1 => entry.with_repeat_count(count),
            _ => entry.clone(),
        })
        .collect()
}
