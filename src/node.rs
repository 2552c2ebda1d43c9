//! Chain element.

/// One entry of a bucket chain. Owns its successor.
#[derive(Debug)]
pub struct Node<V> {
    pub(crate) key: String,
    pub(crate) value: V,
    pub(crate) next: Option<Box<Node<V>>>,
}

impl<V> Node<V> {
    pub(crate) fn new(key: String, value: V) -> Self {
        Self {
            key,
            value,
            next: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn next(&self) -> Option<&Node<V>> {
        self.next.as_deref()
    }
}
