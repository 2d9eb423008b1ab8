//! Singly-linked list nodes with shared ownership.
//!
//! Nodes are handed around as `Rc<RefCell<ListNode<T>>>` so that a tail can
//! point back into an earlier node and so that callers can keep a handle on
//! any node (for example as a cycle hint) while the list owns it as well.
//!
//! A list whose tail loops back holds a reference cycle and is never freed.
//! That is acceptable for the short-lived lists these algorithms are run on.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a node.
pub type NodeRef<T> = Rc<RefCell<ListNode<T>>>;

/// The next reference of a node, or a list head. `None` ends the list.
pub type Link<T> = Option<NodeRef<T>>;

/// A singly-linked list node.
#[derive(Debug)]
pub struct ListNode<T> {
    pub val: T,
    pub next: Link<T>,
}

impl<T> ListNode<T> {
    /// Creates a new `ListNode` with the given value and no next pointer.
    pub fn new(val: T) -> Self {
        ListNode { val, next: None }
    }

    /// Wraps the node into a shareable handle.
    pub fn into_ref(self) -> NodeRef<T> {
        Rc::new(RefCell::new(self))
    }
}

// Unlink the chain iteratively so dropping a long list does not recurse once
// per node. The walk stops at the first node someone else still holds.
impl<T> Drop for ListNode<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(node) = next {
            next = match Rc::try_unwrap(node) {
                Ok(cell) => cell.into_inner().next.take(),
                Err(_) => break,
            };
        }
    }
}

/// Follows the next reference of `node`.
pub(crate) fn step<T>(node: &NodeRef<T>) -> Link<T> {
    node.borrow().next.clone()
}

/// Builds a list from `values`, optionally closing it into a cycle.
///
/// With `entry = Some(i)` the last node links back to the node at index `i`,
/// and that node is returned alongside the head so it can be used as a cycle
/// hint. With `entry = None` the list is a plain terminated chain and no node
/// is returned.
///
/// # Panics
///
/// Panics if `entry` is out of bounds for a non-empty `values`.
pub fn cycle_list<T, I>(values: I, entry: Option<usize>) -> (Link<T>, Option<NodeRef<T>>)
where
    I: IntoIterator<Item = T>,
{
    let nodes: Vec<NodeRef<T>> = values
        .into_iter()
        .map(|val| ListNode::new(val).into_ref())
        .collect();
    if nodes.is_empty() {
        return (None, None);
    }

    for pair in nodes.windows(2) {
        pair[0].borrow_mut().next = Some(pair[1].clone());
    }

    let hint = entry.map(|i| {
        assert!(i < nodes.len(), "cycle entry is out of bounds");
        let target = nodes[i].clone();
        nodes[nodes.len() - 1].borrow_mut().next = Some(target.clone());
        target
    });

    (Some(nodes[0].clone()), hint)
}
