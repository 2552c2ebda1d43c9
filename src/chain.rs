//! Chain: singly linked list of the entries sharing one bucket.
//!
//! Each node exclusively owns the next one. The chain does not check for
//! duplicate keys on `append`; the table looks a key up before inserting.

use crate::node::Node;

#[derive(Debug)]
pub struct Chain<V> {
    head: Option<Box<Node<V>>>,
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Head-to-tail iterator over the nodes of a [`Chain`].
pub struct Iter<'a, V> {
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Node<V>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        Some(node)
    }
}

impl<V> Chain<V> {
    pub const fn new() -> Self {
        Self { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn head(&self) -> Option<&Node<V>> {
        self.head.as_deref()
    }

    /// Link a new node at the tail.
    pub fn append(&mut self, key: String, value: V) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node::new(key, value)));
    }

    pub fn find(&self, key: &str) -> Option<&Node<V>> {
        self.iter().find(|node| node.key == key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut Node<V>> {
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if node.key == key {
                return Some(node);
            }
            cur = node.next.as_deref_mut();
        }
        None
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Unlink the node holding `key`. Returns whether one was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.unlink(key).is_some()
    }

    fn unlink(&mut self, key: &str) -> Option<Box<Node<V>>> {
        if self.head.as_ref()?.key == key {
            let mut removed = self.head.take()?;
            self.head = removed.next.take();
            return Some(removed);
        }

        // Walk with the predecessor in hand so it can be re-linked.
        let mut prev = self.head.as_mut()?;
        loop {
            let hit = prev.next.as_ref()?.key == key;
            if hit {
                let mut removed = prev.next.take()?;
                prev.next = removed.next.take();
                return Some(removed);
            }
            prev = prev.next.as_mut()?;
        }
    }

    /// Drop every node. Iterative so long chains cannot exhaust the stack.
    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }

    /// Move every entry out in head-to-tail order, leaving the chain empty.
    pub fn drain(&mut self) -> Vec<(String, V)> {
        let mut out = Vec::new();
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            let Node { key, value, .. } = *node;
            out.push((key, value));
        }
        out
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|node| node.key.clone()).collect()
    }

    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|node| node.value.clone()).collect()
    }

    pub fn entries(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.iter()
            .map(|node| (node.key.clone(), node.value.clone()))
            .collect()
    }
}

impl<V> Drop for Chain<V> {
    fn drop(&mut self) {
        self.clear();
    }
}
