//! Property-based tests for the catalog and the sorting helpers.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use proptest::prelude::*;

use coursegraph::{CourseCatalog, Error, heap_sort, merge_sort};

const COURSES: u32 = 7;

type Adjacency = BTreeMap<u32, Vec<u32>>;

fn adjacency(catalog: &CourseCatalog<u32, ()>) -> Adjacency {
    let mut adj: Adjacency = BTreeMap::new();
    for r in catalog.requisites() {
        adj.entry(*r.prerequisite()).or_default().push(*r.dependent());
    }
    adj
}

/// Enumerate every simple path from `start`; true if one leads back to it.
fn returns_to(adj: &Adjacency, start: u32, current: u32, path: &mut Vec<u32>) -> bool {
    for &next in adj.get(&current).into_iter().flatten() {
        if next == start {
            return true;
        }
        if !path.contains(&next) {
            path.push(next);
            if returns_to(adj, start, next, path) {
                return true;
            }
            path.pop();
        }
    }
    false
}

fn has_cycle(adj: &Adjacency) -> bool {
    (0..COURSES).any(|v| returns_to(adj, v, v, &mut vec![v]))
}

fn reaches(adj: &Adjacency, from: u32, to: u32) -> bool {
    let mut stack = vec![from];
    let mut seen = vec![false; COURSES as usize];
    while let Some(v) = stack.pop() {
        if v == to {
            return true;
        }
        if std::mem::replace(&mut seen[v as usize], true) {
            continue;
        }
        stack.extend(adj.get(&v).into_iter().flatten().copied());
    }
    false
}

fn edge_list() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0..COURSES, 0..COURSES), 0..40)
}

/// Compares by `key` only, so `tag` exposes the relative order of equals.
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: i8,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

proptest! {
    /// The graph is acyclic after every call, and every rejection is justified.
    #[test]
    fn catalog_stays_acyclic(edges in edge_list()) {
        let mut catalog: CourseCatalog<u32, ()> = CourseCatalog::new();
        for id in 0..COURSES {
            catalog.add_course(id, format!("Course {id}"));
        }

        for (a, b) in edges {
            let before = adjacency(&catalog);
            let outcome = catalog.add_prerequisite(&a, &b, ()).map(|_| ());
            match outcome {
                Ok(_) => {
                    let after = adjacency(&catalog);
                    prop_assert!(!has_cycle(&after));
                    prop_assert!(after.get(&a).is_some_and(|d| d.contains(&b)));
                }
                Err(Error::CircularPrerequisite { .. }) => {
                    // Rejected only if b already reaches a.
                    prop_assert!(reaches(&before, b, a));
                    prop_assert_eq!(adjacency(&catalog), before);
                }
                Err(Error::DuplicateRequisite { .. }) => {
                    prop_assert!(before.get(&a).is_some_and(|d| d.contains(&b)));
                    prop_assert_eq!(adjacency(&catalog), before);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
            prop_assert!(catalog.is_acyclic());
        }
    }

    /// Re-adding a course never creates a second vertex.
    #[test]
    fn add_course_idempotent(ids in prop::collection::vec(0..20u32, 0..60)) {
        let mut catalog: CourseCatalog<u32, ()> = CourseCatalog::new();
        for (i, id) in ids.iter().enumerate() {
            catalog.add_course(*id, format!("name {i}"));
        }

        let mut distinct = ids.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(catalog.course_count(), distinct.len());
        prop_assert_eq!(catalog.graph().vertex_count(), distinct.len());

        for id in &distinct {
            let last = ids.iter().rposition(|x| x == id).unwrap();
            let expected = format!("name {last}");
            prop_assert_eq!(catalog.get_course(id).unwrap().name(), expected.as_str());
        }
    }

    /// Both sorts produce the input multiset in non-decreasing order.
    #[test]
    fn sorts_match_std(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut expected = values.clone();
        expected.sort();

        let mut heaped = values.clone();
        heap_sort(Some(&mut heaped)).unwrap();
        prop_assert_eq!(&heaped, &expected);

        let merged = merge_sort(Some(values.as_slice())).unwrap();
        prop_assert_eq!(&merged, &expected);
    }

    /// Merge sort keeps equal keys in input order.
    #[test]
    fn merge_sort_is_stable(keys in prop::collection::vec(-4i8..4, 0..100)) {
        let input: Vec<Tagged> = keys
            .iter()
            .enumerate()
            .map(|(tag, &key)| Tagged { key, tag })
            .collect();

        let sorted = merge_sort(Some(input.as_slice())).unwrap();
        prop_assert_eq!(sorted.len(), input.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].key <= pair[1].key);
            if pair[0].key == pair[1].key {
                prop_assert!(pair[0].tag < pair[1].tag);
            }
        }
    }
}
