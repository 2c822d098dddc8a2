//! A singly-linked list of integers built as a single-owner chain: each node
//! exclusively owns its successor through a `Box`, so splicing a node out is an
//! ownership transfer and the spliced node drops as soon as nothing points at it.
//! The interesting operations are the two removal routines; everything else is
//! plumbing so they can be constructed and observed.

use thiserror::Error;

/// A handle to a chain of nodes. `None` is the empty list.
pub type Link = Option<Box<Node>>;

/// One element of a singly-linked list.
///
/// The fields are public on purpose: the removal operations work by rewiring
/// `value` and `next` in place, and callers holding a `&mut Node` may do the same.
#[derive(Debug)]
pub struct Node {
    pub value: i32,
    pub next: Link,
}

impl Node {
    /// A node with no successor.
    #[must_use]
    pub fn new(value: i32) -> Node {
        Node { value, next: None }
    }
}

// The default recursive drop would overflow the stack on a long chain, so walk
// the list and detach each successor before it drops.
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ListError {
    #[error("cannot delete a tail node in place: it has no successor to splice out")]
    DeleteAtTail,
}

/// Builds a chain owning one node per value, in the given order.
#[must_use]
pub fn from_values(values: &[i32]) -> Link {
    values
        .iter()
        .rev()
        .fold(None, |next, &value| Some(Box::new(Node { value, next })))
}

/// Borrowing iterator over the values of a chain, front to back.
#[must_use]
pub fn iter(head: &Link) -> Iter<'_> {
    Iter {
        next: head.as_deref(),
    }
}

/// Collects the values of a chain, front to back.
#[must_use]
pub fn values(head: &Link) -> Vec<i32> {
    iter(head).collect()
}

/// Number of nodes in the chain.
#[must_use]
pub fn len(head: &Link) -> usize {
    iter(head).count()
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}

/// Deletes `node` from whatever list it belongs to, given only a reference to
/// the node itself and not to its predecessor.
///
/// Since the predecessor is unreachable, the node instead *becomes* its
/// successor: the successor's value is copied into `node` and the successor is
/// spliced out of the chain. The node observed as deleted keeps its identity;
/// the allocation that actually goes away is the successor's.
///
/// # Errors
///
/// Returns [`ListError::DeleteAtTail`] if `node` has no successor. A tail node
/// cannot be deleted this way; the list is left unchanged.
pub fn delete_given_node(node: &mut Node) -> Result<(), ListError> {
    let mut successor = node.next.take().ok_or(ListError::DeleteAtTail)?;
    node.value = successor.value;
    node.next = successor.next.take();
    Ok(())
}

/// Removes every node whose value equals `target`, returning the new head.
///
/// One forward pass with O(1) extra space. Surviving nodes are reused in place
/// and keep their relative order; the returned head differs from the input
/// head exactly when the head itself was removed. The cursor holds the slot a
/// node was unlinked from rather than advancing past it, so runs of
/// consecutive matches (head and tail included) all come out in the same pass.
#[must_use]
pub fn remove_by_value(mut head: Link, target: i32) -> Link {
    // `head` doubles as the sentinel slot: taking the list by value means the
    // cursor can start one link *before* the first node, so removing the head
    // needs no special case.
    let mut cursor = &mut head;
    loop {
        match cursor.take() {
            None => break,
            Some(mut node) if node.value == target => {
                *cursor = node.next.take();
            }
            Some(node) => {
                cursor = &mut cursor.insert(node).next;
            }
        }
    }
    head
}
