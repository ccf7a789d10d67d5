//! Recency list: the access-order backbone of the LRU cache.
//!
//! A doubly linked sequence of keys stored in a [`SlotArena`] and linked by
//! `SlotId`, head = most recently used, tail = least recently used. Keeping
//! the links as arena handles rather than pointers gives the cache's key
//! index a non-owning reference it can hold safely: a stale `SlotId` is
//! answered with `None`, never a dangling read.
//!
//! ```text
//!   arena (SlotArena<Node<K>>)
//!   ┌────────┬────────────────────────────────────────────┐
//!   │ SlotId │ Node { key, prev, next }                   │
//!   ├────────┼────────────────────────────────────────────┤
//!   │ id_0   │ { key: A, prev: None, next: Some(id_1) }   │
//!   │ id_1   │ { key: B, prev: Some(id_0), next: id_2 }   │
//!   │ id_2   │ { key: C, prev: Some(id_1), next: None }   │
//!   └────────┴────────────────────────────────────────────┘
//!
//!   head ─► [id_0] ◄──► [id_1] ◄──► [id_2] ◄── tail
//!           (MRU)                   (LRU)
//! ```
//!
//! The cache only needs three shapes of mutation, all O(1):
//! - `push_front`: link a fresh key at the MRU position
//! - `move_to_front`: promote a touched key
//! - `pop_back` / `remove`: unlink the eviction victim or an explicit removal

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Doubly linked key sequence ordered from most to least recently used.
#[derive(Debug)]
pub struct RecencyList<K> {
    arena: SlotArena<Node<K>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<K> RecencyList<K> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with node storage reserved for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of linked keys.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list holds no keys.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the most recently used key.
    pub fn front(&self) -> Option<&K> {
        self.head.and_then(|id| self.arena.get(id)).map(|n| &n.key)
    }

    /// Returns the least recently used key, the next eviction victim.
    pub fn back(&self) -> Option<&K> {
        self.tail.and_then(|id| self.arena.get(id)).map(|n| &n.key)
    }

    /// Returns the handle of the tail node.
    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Returns the key stored at `id`, if the node is still linked.
    pub fn key(&self, id: SlotId) -> Option<&K> {
        self.arena.get(id).map(|n| &n.key)
    }

    /// Links `key` at the head (MRU position) and returns its handle.
    pub fn push_front(&mut self, key: K) -> SlotId {
        let id = self.arena.insert(Node {
            key,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => {
                if let Some(node) = self.arena.get_mut(old_head) {
                    node.prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    /// Unlinks and returns the tail (LRU) key.
    pub fn pop_back(&mut self) -> Option<K> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Unlinks the node `id` and returns its key.
    pub fn remove(&mut self, id: SlotId) -> Option<K> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.key)
    }

    /// Promotes `id` to the head; returns `false` if the node is not linked.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.head == Some(id) {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Unlinks every node. Retains arena capacity.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates keys from head (MRU) to tail (LRU).
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Iterates node handles from head to tail.
    pub fn iter_ids(&self) -> IterIds<'_, K> {
        IterIds {
            list: self,
            current: self.head,
        }
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.arena.get_mut(prev_id) {
                    prev_node.next = next;
                }
            },
            None => self.head = next,
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = self.arena.get_mut(next_id) {
                    next_node.prev = prev;
                }
            },
            None => self.tail = prev,
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }
        Some(())
    }

    fn attach_front(&mut self, id: SlotId) {
        let old_head = self.head;
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = old_head;
        } else {
            return;
        }
        match old_head {
            Some(old_id) => {
                if let Some(head_node) = self.arena.get_mut(old_id) {
                    head_node.prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    /// Walks the links in both directions and asserts they agree with the
    /// arena occupancy. Debug builds only; compiles to nothing in release.
    pub(crate) fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        {
            if self.arena.is_empty() {
                debug_assert!(self.head.is_none());
                debug_assert!(self.tail.is_none());
                return;
            }

            let mut count = 0usize;
            let mut last = None;
            let mut current = self.head;
            while let Some(id) = current {
                let node = self.arena.get(id).expect("linked node missing from arena");
                debug_assert_eq!(node.prev, last, "prev link disagrees with traversal");
                count += 1;
                assert!(count <= self.arena.len(), "cycle in recency list");
                last = Some(id);
                current = node.next;
            }
            debug_assert_eq!(last, self.tail);
            debug_assert_eq!(count, self.arena.len());
        }
    }
}

impl<K> Default for RecencyList<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back key iterator, see [`RecencyList::iter`].
pub struct Iter<'a, K> {
    list: &'a RecencyList<K>,
    current: Option<SlotId>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.key)
    }
}

/// Front-to-back handle iterator, see [`RecencyList::iter_ids`].
pub struct IterIds<'a, K> {
    list: &'a RecencyList<K>,
    current: Option<SlotId>,
}

impl<K> Iterator for IterIds<'_, K> {
    type Item = SlotId;

    fn next(&mut self) -> Option<SlotId> {
        let id = self.current?;
        self.current = self.list.arena.get(id).and_then(|n| n.next);
        Some(id)
    }
}
