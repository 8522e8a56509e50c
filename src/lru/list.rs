// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Arena-backed doubly linked recency list.
//!
//! Nodes live in a `Vec<Option<Node>>` and link to each other by slot
//! index, so there are no ownership cycles. Vacated slots go on a free
//! list and are reused by later inserts; a slot index stays valid for the
//! whole life of the entry stored in it, which is what lets the key index
//! hold it as a handle.
//!
//! ```text
//!   head ──► [slot 2] ◄──► [slot 0] ◄──► [slot 1] ◄── tail
//!             (MRU)                        (LRU)
//! ```

use crate::entry::CacheEntry;

#[derive(Debug)]
struct Node<V> {
    entry: CacheEntry<V>,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug)]
pub(crate) struct RecencyList<V> {
    slots: Vec<Option<Node<V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Vec<usize>,
    len: usize,
}

impl<V> RecencyList<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Slot of the least recently used entry.
    #[cfg(test)]
    pub(crate) fn back(&self) -> Option<usize> {
        self.tail
    }

    pub(crate) fn get(&self, idx: usize) -> Option<&CacheEntry<V>> {
        self.node(idx).map(|n| &n.entry)
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut CacheEntry<V>> {
        self.node_mut(idx).map(|n| &mut n.entry)
    }

    /// Insert at the head and return the slot holding the entry.
    pub(crate) fn push_front(&mut self, entry: CacheEntry<V>) -> usize {
        let node = Node {
            entry,
            prev: None,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        self.link_front(idx);
        self.len += 1;
        idx
    }

    /// Returns `None` if `idx` does not hold a live node.
    pub(crate) fn move_to_front(&mut self, idx: usize) -> Option<()> {
        if self.head == Some(idx) {
            return self.node(idx).map(|_| ());
        }
        self.unlink(idx)?;
        self.link_front(idx);
        Some(())
    }

    pub(crate) fn remove(&mut self, idx: usize) -> Option<CacheEntry<V>> {
        self.unlink(idx)?;
        let node = self.slots.get_mut(idx)?.take()?;
        self.free.push(idx);
        self.len -= 1;
        Some(node.entry)
    }

    /// Remove the tail, returning its former slot and the entry.
    pub(crate) fn pop_back(&mut self) -> Option<(usize, CacheEntry<V>)> {
        let idx = self.tail?;
        self.remove(idx).map(|entry| (idx, entry))
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Entries from most to least recently used.
    pub(crate) fn iter(&self) -> Iter<'_, V> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn node(&self, idx: usize) -> Option<&Node<V>> {
        self.slots.get(idx)?.as_ref()
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<V>> {
        self.slots.get_mut(idx)?.as_mut()
    }

    /// Detach `idx` from its neighbours, leaving the node in its slot.
    fn unlink(&mut self, idx: usize) -> Option<()> {
        let (prev, next) = {
            let node = self.node(idx)?;
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.node_mut(p)?.next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n)?.prev = prev,
            None => self.tail = prev,
        }
        Some(())
    }

    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = old_head;
        }
        if let Some(h) = old_head {
            if let Some(head) = self.node_mut(h) {
                head.prev = Some(idx);
            }
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    /// Walk the list in both directions and check it agrees with `len`.
    #[cfg(test)]
    pub(crate) fn check_links(&self) -> bool {
        let forward: Vec<usize> = {
            let mut out = Vec::new();
            let mut cur = self.head;
            while let Some(idx) = cur {
                if out.len() > self.len {
                    return false;
                }
                out.push(idx);
                cur = match self.node(idx) {
                    Some(n) => n.next,
                    None => return false,
                };
            }
            out
        };
        let mut backward: Vec<usize> = {
            let mut out = Vec::new();
            let mut cur = self.tail;
            while let Some(idx) = cur {
                if out.len() > self.len {
                    return false;
                }
                out.push(idx);
                cur = match self.node(idx) {
                    Some(n) => n.prev,
                    None => return false,
                };
            }
            out
        };
        backward.reverse();
        forward.len() == self.len && forward == backward
    }
}

pub(crate) struct Iter<'a, V> {
    list: &'a RecencyList<V>,
    cursor: Option<usize>,
    // Bounds the walk even if links were ever broken.
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a CacheEntry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.entry)
    }
}
