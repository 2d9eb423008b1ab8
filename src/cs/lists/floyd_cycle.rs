//! # Floyd's Cycle Detection (Tortoise and Hare)
//!
//! Cycle detection and shape measurement for singly-linked lists in \( O(n) \)
//! time and \( O(1) \) extra space.
//!
//! ## Overview
//!
//! Floyd's Cycle Detection uses two pointers (slow and fast). Slow advances by
//! one node at a time, while fast advances by two nodes at a time. If they ever
//! point to the same node, a cycle exists. To find the *start* of the cycle,
//! reset one pointer to the head and advance both by one node at a time. The
//! node where they meet is the start of the cycle.
//!
//! On top of detection this module measures the *shape* of a list: the number
//! of nodes before the cycle entry (the prefix) and the number of nodes on the
//! cycle. Every walk here is bounded, including walks started from a node the
//! caller claims is on a cycle.
//!
//! ## Example Usage
//!
//! ```rust
//! use algos_lists::lists::{cycle_list, find_cycle_start, has_cycle, Shape};
//! use algos_lists::lists::floyd_cycle::shape;
//!
//! // 1 -> 2 -> 3 -> 4 -> 5, with 5 linking back to 3.
//! let (head, entry) = cycle_list(vec![1, 2, 3, 4, 5], Some(2));
//!
//! assert!(has_cycle(&head));
//! let start = find_cycle_start(&head).unwrap();
//! assert_eq!(start.borrow().val, 3);
//! assert_eq!(shape(&head), Shape::Cycle { prefix: 2, cycle: 3 });
//! # drop(entry);
//! ```

use std::rc::Rc;

use super::list_node::{step, Link, NodeRef};

/// Topology of a list as seen from its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A terminated list of `len` nodes.
    Chain { len: usize },
    /// `prefix` nodes before the cycle entry, then `cycle` nodes on the cycle.
    Cycle { prefix: usize, cycle: usize },
}

impl Shape {
    /// Number of nodes in the list, counting each cycle node once.
    pub fn len(&self) -> usize {
        match *self {
            Shape::Chain { len } => len,
            Shape::Cycle { prefix, cycle } => prefix + cycle,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_cyclic(&self) -> bool {
        matches!(self, Shape::Cycle { .. })
    }
}

/// Determines if a singly-linked list has a cycle using Floyd's Tortoise and Hare.
pub fn has_cycle<T>(head: &Link<T>) -> bool {
    meeting_node(head).is_some()
}

/// If a cycle exists, returns the node where the cycle begins.
pub fn find_cycle_start<T>(head: &Link<T>) -> Option<NodeRef<T>> {
    let head_node = head.as_ref()?;
    let meet = meeting_node(head)?;
    Some(walk_to_entry(head_node, &meet).0)
}

/// Runs the first phase of Floyd's algorithm and returns the node where slow
/// and fast meet, or `None` when fast runs off the end of the list.
pub fn meeting_node<T>(head: &Link<T>) -> Option<NodeRef<T>> {
    let mut slow = head.clone()?;
    let mut fast = slow.clone();
    loop {
        let half = step(&fast)?;
        fast = step(&half)?;
        slow = step(&slow)?;
        if Rc::ptr_eq(&slow, &fast) {
            return Some(slow);
        }
    }
}

/// Counts the nodes on the cycle through `node`.
///
/// Returns `None` when `node` is not on a cycle: either the list ends, or it
/// runs into a cycle that does not pass through `node`. The second case is
/// caught by a fast pointer lapping the slow one before `node` comes around.
pub fn cycle_len<T>(node: &NodeRef<T>) -> Option<usize> {
    let mut slow = node.clone();
    let mut fast = node.clone();
    let mut len = 0;
    loop {
        slow = step(&slow)?;
        let half = step(&fast)?;
        fast = step(&half)?;
        len += 1;
        if Rc::ptr_eq(&slow, node) {
            return Some(len);
        }
        if Rc::ptr_eq(&slow, &fast) {
            return None;
        }
    }
}

/// Measures the list by autodetection.
pub fn shape<T>(head: &Link<T>) -> Shape {
    let Some(head_node) = head.as_ref() else {
        return Shape::Chain { len: 0 };
    };
    match meeting_node(head) {
        Some(meet) => {
            let (_, prefix) = walk_to_entry(head_node, &meet);
            let cycle = lap_len(&meet);
            log::trace!("floyd: cycle detected, prefix {} cycle {}", prefix, cycle);
            Shape::Cycle { prefix, cycle }
        }
        None => Shape::Chain {
            len: chain_len(head_node),
        },
    }
}

/// Measures the list using `hint` as a known node on its cycle.
///
/// Returns `None` when `hint` does not lie on a cycle reachable from `head`.
pub fn shape_with_witness<T>(head: &Link<T>, hint: &NodeRef<T>) -> Option<Shape> {
    let head_node = head.as_ref()?;
    let cycle = cycle_len(hint)?;

    // lead runs `cycle` nodes ahead of trail; if the hint's cycle is the
    // head's cycle they first coincide on its entry, after `prefix` steps.
    let mut lead = head_node.clone();
    for _ in 0..cycle {
        lead = step(&lead)?;
    }
    let mut trail = head_node.clone();
    let mut hare = head_node.clone();
    let mut prefix = 0;
    while !Rc::ptr_eq(&trail, &lead) {
        trail = step(&trail)?;
        lead = step(&lead)?;
        let half = step(&hare)?;
        hare = step(&half)?;
        prefix += 1;
        // The hare catches trail no earlier than the entry of the head's own
        // cycle, so getting here without lead means the cycles differ.
        if !Rc::ptr_eq(&trail, &lead) && Rc::ptr_eq(&trail, &hare) {
            return None;
        }
    }

    if !on_lap(hint, &trail, cycle) {
        return None;
    }
    log::trace!("floyd: hint confirmed, prefix {} cycle {}", prefix, cycle);
    Some(Shape::Cycle { prefix, cycle })
}

/// Phase two of Floyd: from the head and the meeting node, advance both one
/// node at a time. Returns the entry node and the number of steps taken.
fn walk_to_entry<T>(head: &NodeRef<T>, meet: &NodeRef<T>) -> (NodeRef<T>, usize) {
    let mut ptr1 = head.clone();
    let mut ptr2 = meet.clone();
    let mut steps = 0;
    while !Rc::ptr_eq(&ptr1, &ptr2) {
        match (step(&ptr1), step(&ptr2)) {
            (Some(p1), Some(p2)) => {
                ptr1 = p1;
                ptr2 = p2;
                steps += 1;
            }
            _ => break,
        }
    }
    (ptr1, steps)
}

/// Length of the lap through a node already known to be on a cycle.
fn lap_len<T>(node: &NodeRef<T>) -> usize {
    let mut len = 1;
    let mut cur = step(node);
    while let Some(n) = cur {
        if Rc::ptr_eq(&n, node) {
            break;
        }
        len += 1;
        cur = step(&n);
    }
    len
}

fn chain_len<T>(head: &NodeRef<T>) -> usize {
    let mut len = 1;
    let mut cur = step(head);
    while let Some(n) = cur {
        len += 1;
        cur = step(&n);
    }
    len
}

/// Whether `target` is among the `len` nodes starting at `start`.
fn on_lap<T>(target: &NodeRef<T>, start: &NodeRef<T>, len: usize) -> bool {
    let mut cur = start.clone();
    for _ in 0..len {
        if Rc::ptr_eq(&cur, target) {
            return true;
        }
        match step(&cur) {
            Some(n) => cur = n,
            None => return false,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::lists::list_node::{cycle_list, ListNode};

    #[test]
    fn test_empty_list() {
        assert!(!has_cycle::<i32>(&None));
        assert!(find_cycle_start::<i32>(&None).is_none());
        assert_eq!(shape::<i32>(&None), Shape::Chain { len: 0 });
        assert!(shape::<i32>(&None).is_empty());
    }

    #[test]
    fn test_shape_len_counts_cycle_once() {
        let self_loop = Shape::Cycle { prefix: 0, cycle: 1 };
        assert_eq!(self_loop.len(), 1);
        assert!(!self_loop.is_empty());
        assert!(self_loop.is_cyclic());

        assert_eq!(Shape::Cycle { prefix: 3, cycle: 4 }.len(), 7);
        assert_eq!(Shape::Chain { len: 5 }.len(), 5);
        assert!(!Shape::Chain { len: 5 }.is_empty());
        assert!(Shape::Chain { len: 0 }.is_empty());
    }

    #[test]
    fn test_single_node_no_cycle() {
        let (head, _) = cycle_list(vec![42], None);
        assert!(!has_cycle(&head));
        assert!(find_cycle_start(&head).is_none());
        assert_eq!(shape(&head), Shape::Chain { len: 1 });
    }

    #[test]
    fn test_single_node_self_loop() {
        let (head, hint) = cycle_list(vec![42], Some(0));
        let hint = hint.unwrap();
        assert!(has_cycle(&head));
        assert!(Rc::ptr_eq(&find_cycle_start(&head).unwrap(), &hint));
        assert_eq!(cycle_len(&hint), Some(1));
        assert_eq!(shape(&head), Shape::Cycle { prefix: 0, cycle: 1 });
    }

    #[test]
    fn test_small_cycle() {
        // 1 -> 2 -> 3 -> back to 2
        let (head, hint) = cycle_list(vec![1, 2, 3], Some(1));
        let hint = hint.unwrap();
        assert!(has_cycle(&head));
        assert!(Rc::ptr_eq(&find_cycle_start(&head).unwrap(), &hint));
        assert_eq!(shape(&head), Shape::Cycle { prefix: 1, cycle: 2 });
        assert_eq!(shape(&head).len(), 3);
    }

    #[test]
    fn test_no_cycle_long_list() {
        let (head, _) = cycle_list(vec![1, 2, 3, 4, 5], None);
        assert!(!has_cycle(&head));
        assert!(find_cycle_start(&head).is_none());
        assert_eq!(shape(&head), Shape::Chain { len: 5 });
        assert!(!shape(&head).is_cyclic());
    }

    #[test]
    fn test_shape_for_every_entry() {
        for n in 1..12 {
            for entry in 0..n {
                let (head, hint) = cycle_list((0..n).collect::<Vec<_>>(), Some(entry));
                let want = Shape::Cycle {
                    prefix: entry,
                    cycle: n - entry,
                };
                assert_eq!(shape(&head), want, "n={} entry={}", n, entry);
                assert_eq!(
                    shape_with_witness(&head, &hint.unwrap()),
                    Some(want),
                    "n={} entry={}",
                    n,
                    entry
                );
            }
        }
    }

    #[test]
    fn test_witness_anywhere_on_cycle() {
        // 0 -> 1 -> 2 -> 3 -> 4 -> 5, 5 links back to 2
        let (head, _) = cycle_list(vec![0, 1, 2, 3, 4, 5], Some(2));
        let mut node = head.clone().unwrap();
        for i in 0..6 {
            let got = shape_with_witness(&head, &node);
            if i < 2 {
                assert_eq!(got, None, "prefix node {} is not on the cycle", i);
            } else {
                assert_eq!(got, Some(Shape::Cycle { prefix: 2, cycle: 4 }));
            }
            node = step(&node).unwrap();
        }
    }

    #[test]
    fn test_cycle_len_off_cycle() {
        let (head, _) = cycle_list(vec![1, 2, 3], None);
        assert_eq!(cycle_len(&head.unwrap()), None);

        let (head, _) = cycle_list(vec![1, 2, 3, 4], Some(2));
        assert_eq!(cycle_len(&head.unwrap()), None);
    }

    #[test]
    fn test_witness_from_unrelated_list() {
        let (head, _) = cycle_list(vec![1, 2, 3], None);
        let stray = ListNode::new(0).into_ref();
        assert_eq!(shape_with_witness(&head, &stray), None);

        let (_, other) = cycle_list(vec![9, 9], Some(0));
        assert_eq!(shape_with_witness(&head, &other.unwrap()), None);
    }

    #[test]
    fn test_witness_on_disjoint_cycle() {
        // Both cycles have length 2, so lead and trail do meet on the head's
        // entry; the lap check must still reject the foreign hint.
        let (head, _) = cycle_list(vec![1, 2, 3, 4], Some(2));
        let (_, other) = cycle_list(vec![5, 6], Some(0));
        assert_eq!(shape_with_witness(&head, &other.unwrap()), None);

        // Lengths 3 and 2 never line up; the hare ends the search.
        let (head, _) = cycle_list(vec![1, 2, 3, 4, 5], Some(2));
        let (_, other) = cycle_list(vec![5, 6], Some(0));
        assert_eq!(shape_with_witness(&head, &other.unwrap()), None);
    }

    #[test]
    fn test_witness_on_empty_list() {
        let stray = ListNode::new(0).into_ref();
        stray.borrow_mut().next = Some(stray.clone());
        assert_eq!(shape_with_witness(&None, &stray), None);
    }
}
