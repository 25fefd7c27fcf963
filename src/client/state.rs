use uuid::Uuid;

use crate::client::model::CustomerRecord;

/// Local mirror of the server's customer list.
///
/// Only the reconciliation operations below mutate it, so the order seen by
/// a frontend is: server order after a load, then appends for each create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerList {
    items: Vec<CustomerRecord>,
}

impl CustomerList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CustomerRecord] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&CustomerRecord> {
        self.items.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Initial load: take the server list as-is.
    pub fn replace_all(&mut self, items: Vec<CustomerRecord>) {
        self.items = items;
    }

    /// After a create.
    pub fn append(&mut self, record: CustomerRecord) {
        self.items.push(record);
    }

    /// After an update. Keeps the record's position; returns false if the id
    /// is not mirrored locally.
    pub fn replace(&mut self, record: CustomerRecord) -> bool {
        match self.items.iter_mut().find(|c| c.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// After a delete.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|c| c.id != id);
        self.items.len() < before
    }
}
