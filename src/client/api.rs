use async_trait::async_trait;
use uuid::Uuid;

use crate::client::model::{CustomerRecord, CustomerUpdate, NewCustomer};

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("request to customer api failed")]
    Transport(#[source] reqwest::Error),
    #[error("customer api returned {status}: {message}")]
    Status {
        status: u16,
        code: Option<String>,
        message: String,
    },
}

#[async_trait]
pub trait CustomerApi: Send + Sync {
    async fn list(&self) -> Result<Vec<CustomerRecord>, ClientError>;
    async fn create(&self, req: &NewCustomer) -> Result<CustomerRecord, ClientError>;
    async fn update(&self, id: Uuid, req: &CustomerUpdate) -> Result<CustomerRecord, ClientError>;
    async fn delete(&self, id: Uuid) -> Result<(), ClientError>;
}
