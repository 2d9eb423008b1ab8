//! # Median of a Sorted, Possibly Cyclic, Linked List
//!
//! Given the head of a non-decreasing singly-linked list, returns its median
//! as an exact rational. The tail may loop back into an earlier node; such a
//! list is read as its prefix followed by one trip around the cycle, so a
//! list of `P` prefix nodes and `C` cycle nodes has median position(s)
//! computed over `P + C` values.
//!
//! The cycle can be autodetected (Floyd's tortoise and hare) or confirmed
//! from a caller-supplied node known to lie on it. Either way the middle is
//! then reached with a second tortoise-and-hare walk from the head.
//!
//! ## Example Usage
//!
//! ```rust
//! use algos_lists::lists::{cycle_list, median_of_sorted};
//! use num_bigint::BigInt;
//! use num_rational::BigRational;
//!
//! // 0 -> 1 -> 2 -> 3 -> back to 0
//! let (head, hint) = cycle_list(vec![0, 1, 2, 3], Some(0));
//! let want = BigRational::new(BigInt::from(3), BigInt::from(2));
//!
//! assert_eq!(median_of_sorted(&head, hint.as_ref()), Ok(Some(want.clone())));
//! assert_eq!(median_of_sorted(&head, None), Ok(Some(want)));
//! ```

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;

use super::element::Element;
use super::floyd_cycle::{self, Shape};
use super::list_node::{step, Link, NodeRef};
use crate::error::{Error, Result};

/// Returns the median of the sorted list starting at `head`.
///
/// `hint`, when given, must be a node on a cycle reachable from `head`; it
/// replaces cycle autodetection. An empty list yields `Ok(None)`.
///
/// # Errors
///
/// Checked in this order, first failure wins:
/// - [`Error::NotComparable`] if a value has no place in the numeric order.
/// - [`Error::NotSorted`] if a value is smaller than its predecessor within
///   the prefix or within the cycle.
/// - [`Error::NodeNotFound`] if `hint` is not on a cycle reachable from `head`.
pub fn median_of_sorted<T: Element>(
    head: &Link<T>,
    hint: Option<&NodeRef<T>>,
) -> Result<Option<BigRational>> {
    let witnessed = hint.map(|node| floyd_cycle::shape_with_witness(head, node));
    let shape = match witnessed {
        Some(Some(shape)) => shape,
        // Measure from the head so value errors still win over a bad hint.
        _ => floyd_cycle::shape(head),
    };
    log::debug!("median_of_sorted: list shape {:?}", shape);

    validate(head, shape)?;
    if let Some(None) = witnessed {
        return Err(Error::NodeNotFound);
    }

    let Some(head_node) = head.as_ref() else {
        return Ok(None);
    };
    let median = median_of_shape(head_node, shape)?;
    log::debug!("median_of_sorted: median {}", median);
    Ok(Some(median))
}

/// Visits every node once, checking every value has a rational value and
/// that no value is smaller than the one before it. On a cycle the prefix
/// and the cycle are each sorted on their own; the entry is not compared
/// with the last prefix node.
fn validate<T: Element>(head: &Link<T>, shape: Shape) -> Result<()> {
    let junction = match shape {
        Shape::Cycle { prefix, .. } if prefix > 0 => Some(prefix),
        _ => None,
    };
    let mut prev: Option<NodeRef<T>> = None;
    let mut cur = head.clone();
    for index in 0..shape.len() {
        let Some(node) = cur else {
            break;
        };
        node.borrow().val.check(index)?;
        if let Some(prev) = prev.as_ref().filter(|_| junction != Some(index)) {
            if prev.borrow().val.try_cmp(&node.borrow().val, index)? == Ordering::Greater {
                return Err(Error::NotSorted { index });
            }
        }
        cur = step(&node);
        prev = Some(node);
    }
    Ok(())
}

fn median_of_shape<T: Element>(head: &NodeRef<T>, shape: Shape) -> Result<BigRational> {
    let len = shape.len();
    let mid = (len - 1) / 2;
    let first = first_middle(head, len);
    let lo = first.borrow().val.to_rational(mid)?;
    if len.is_odd() {
        return Ok(lo);
    }

    // Only missing if the list changed after it was measured.
    let second = step(&first).ok_or(Error::NodeNotFound)?;
    let hi = second.borrow().val.to_rational(mid + 1)?;
    Ok((lo + hi) / BigRational::from_integer(BigInt::from(2)))
}

/// Tortoise-and-hare walk over the first `len` nodes. Stops with slow on the
/// median node for odd `len`, or on the first of the two middle nodes for
/// even `len`.
///
/// On a chain, `fast_pos + 2 < len` holds exactly while fast still has two
/// nodes ahead of it. On a cycle there is no end, so the measured length
/// bounds the hare instead.
fn first_middle<T>(head: &NodeRef<T>, len: usize) -> NodeRef<T> {
    let mut slow = head.clone();
    let mut fast = head.clone();
    let mut fast_pos = 0;
    while fast_pos + 2 < len {
        match (step(&slow), step(&fast).and_then(|half| step(&half))) {
            (Some(s), Some(f)) => {
                slow = s;
                fast = f;
                fast_pos += 2;
            }
            _ => break,
        }
    }
    slow
}
