use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::customers::customer::Customer;

#[derive(Debug, Clone)]
pub struct CustomerChanges {
    pub name: String,
    pub email: String,
    pub status: bool,
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    // Assigns id, status = true and created_at = updated_at = now
    async fn insert(&self, name: &str, email: &str) -> anyhow::Result<Customer>;

    // Oldest first
    async fn list(&self) -> anyhow::Result<Vec<Customer>>;

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Customer>>;

    // Returns None if no row matched; id and created_at are left untouched
    async fn update(
        &self,
        id: Uuid,
        changes: &CustomerChanges,
    ) -> anyhow::Result<Option<Customer>>;

    // Returns true if a row was removed
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;

    async fn ping(&self) -> anyhow::Result<()>;
}
