//! Sorted set of unique elements with rank queries.
//!
//! Backed by a treap whose nodes carry subtree sizes, so both
//! [`OrderedSet::order_of_key`] and [`OrderedSet::find_by_order`] run in
//! expected `O(log n)`.

use std::cmp::Ordering;
use std::fmt;

use crate::rng::Rng;

// priorities only need to be well mixed, not unpredictable
const PRIORITY_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
struct Node<T> {
    value: T,
    priority: u64,
    size: usize,
    children: [Link<T>; 2],
}

impl<T> Node<T> {
    fn leaf(value: T, priority: u64) -> Box<Self> {
        Box::new(Node { value, priority, size: 1, children: [None, None] })
    }

    fn pull_up(&mut self) {
        self.size = 1 + size(&self.children[0]) + size(&self.children[1]);
    }
}

#[inline(always)]
fn size<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

/// Splits into (`< key`, `>= key`), or (`<= key`, `> key`) when `inclusive`.
fn split<T: Ord>(link: Link<T>, key: &T, inclusive: bool) -> (Link<T>, Link<T>) {
    let Some(mut node) = link else {
        return (None, None)
    };

    let goes_left = match node.value.cmp(key) {
        Ordering::Less => true,
        Ordering::Equal => inclusive,
        Ordering::Greater => false,
    };

    if goes_left {
        let (mid, right) = split(node.children[1].take(), key, inclusive);
        node.children[1] = mid;
        node.pull_up();
        (Some(node), right)
    } else {
        let (left, mid) = split(node.children[0].take(), key, inclusive);
        node.children[0] = mid;
        node.pull_up();
        (left, Some(node))
    }
}

/// Every element of `lhs` must be smaller than every element of `rhs`.
fn merge<T>(lhs: Link<T>, rhs: Link<T>) -> Link<T> {
    match (lhs, rhs) {
        (None, rhs) => rhs,
        (lhs, None) => lhs,
        (Some(mut lhs), Some(mut rhs)) => {
            if lhs.priority > rhs.priority {
                lhs.children[1] = merge(lhs.children[1].take(), Some(rhs));
                lhs.pull_up();
                Some(lhs)
            } else {
                rhs.children[0] = merge(Some(lhs), rhs.children[0].take());
                rhs.pull_up();
                Some(rhs)
            }
        }
    }
}

#[derive(Clone)]
pub struct OrderedSet<T> {
    root: Link<T>,
    rng: Rng,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedSet<T> {
    pub fn new() -> Self {
        OrderedSet { root: None, rng: Rng::with_seed(PRIORITY_SEED) }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        size(&self.root)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
    }

    /// The element at sorted position `index` (0-based), `None` past the end.
    pub fn find_by_order(&self, mut index: usize) -> Option<&T> {
        let mut cur = self.root.as_deref()?;
        if index >= cur.size {
            return None
        }
        loop {
            let left = size(&cur.children[0]);
            match index.cmp(&left) {
                Ordering::Less => cur = cur.children[0].as_deref()?,
                Ordering::Equal => return Some(&cur.value),
                Ordering::Greater => {
                    index -= left + 1;
                    cur = cur.children[1].as_deref()?;
                }
            }
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.find_by_order(0)
    }

    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.find_by_order(i))
    }

    /// Elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new(), remaining: self.len() };
        iter.descend(self.root.as_deref());
        iter
    }
}

impl<T: Ord> OrderedSet<T> {
    /// Returns `false` and leaves the set untouched if `value` is present.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false
        }
        let (left, right) = split(self.root.take(), &value, false);
        let leaf = Node::leaf(value, self.rng.next_u64());
        self.root = merge(merge(left, Some(leaf)), right);
        true
    }

    pub fn remove(&mut self, value: &T) -> bool {
        let (left, rest) = split(self.root.take(), value, false);
        let (found, right) = split(rest, value, true);
        self.root = merge(left, right);
        found.is_some()
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match value.cmp(&node.value) {
                Ordering::Less => node.children[0].as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.children[1].as_deref(),
            };
        }
        false
    }

    /// Number of elements strictly less than `key`.
    pub fn order_of_key(&self, key: &T) -> usize {
        let mut rank = 0;
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            if node.value < *key {
                rank += size(&node.children[0]) + 1;
                cur = node.children[1].as_deref();
            } else {
                cur = node.children[0].as_deref();
            }
        }
        rank
    }
}

pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn descend(&mut self, mut cur: Option<&'a Node<T>>) {
        while let Some(node) = cur {
            self.stack.push(node);
            cur = node.children[0].as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.descend(node.children[1].as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Ord> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
