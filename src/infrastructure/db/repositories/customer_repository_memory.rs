use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::customer_repository::{CustomerChanges, CustomerRepository};
use crate::domain::customers::customer::Customer;

/// Process-local customer store. Rows are kept in insertion order and are
/// lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    rows: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn insert(&self, name: &str, email: &str) -> anyhow::Result<Customer> {
        let now = chrono::Utc::now();
        let customer = Customer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            status: true,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().await.push(customer.clone());
        Ok(customer)
    }

    async fn list(&self) -> anyhow::Result<Vec<Customer>> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Customer>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &CustomerChanges,
    ) -> anyhow::Result<Option<Customer>> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        row.name = changes.name.clone();
        row.email = changes.email.clone();
        row.status = changes.status;
        row.updated_at = chrono::Utc::now().max(row.updated_at);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() < before)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
