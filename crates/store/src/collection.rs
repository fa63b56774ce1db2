use stockdesk_core::{DomainError, DomainResult, Entity};

/// Insertion-ordered, id-keyed collection of entities.
///
/// Backed by a `Vec`: listings need stable insertion order, lookups are
/// linear scans, and at the scale this system holds (tens to hundreds of
/// records per family) that beats maintaining an index.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Insert a new entity. The id must not already be present.
    pub fn insert(&mut self, item: T) -> DomainResult<()> {
        if self.contains(item.id()) {
            return Err(DomainError::conflict(format!(
                "duplicate id: {:?}",
                item.id()
            )));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove by id, returning the record when it existed. Later entries
    /// keep their relative order.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
