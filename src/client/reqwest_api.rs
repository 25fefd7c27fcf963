use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::client::api::{ClientError, CustomerApi};
use crate::client::model::{CustomerRecord, CustomerUpdate, NewCustomer};

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: String,
    code: Option<String>,
}

pub struct ReqwestCustomerApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestCustomerApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.map_err(ClientError::Transport)?;
        let (message, code) = match serde_json::from_str::<ErrorPayload>(&body) {
            Ok(p) => (p.error, p.code),
            Err(_) => (body, None),
        };
        Err(ClientError::Status {
            status: status.as_u16(),
            code,
            message,
        })
    }
}

#[async_trait]
impl CustomerApi for ReqwestCustomerApi {
    async fn list(&self) -> Result<Vec<CustomerRecord>, ClientError> {
        let resp = self
            .client
            .get(self.url("/customers"))
            .send()
            .await
            .map_err(ClientError::Transport)?;
        Self::check(resp)
            .await?
            .json()
            .await
            .map_err(ClientError::Transport)
    }

    async fn create(&self, req: &NewCustomer) -> Result<CustomerRecord, ClientError> {
        let resp = self
            .client
            .post(self.url("/customer"))
            .json(req)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        Self::check(resp)
            .await?
            .json()
            .await
            .map_err(ClientError::Transport)
    }

    async fn update(&self, id: Uuid, req: &CustomerUpdate) -> Result<CustomerRecord, ClientError> {
        let resp = self
            .client
            .put(self.url("/customer"))
            .query(&[("id", id.to_string())])
            .json(req)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        Self::check(resp)
            .await?
            .json()
            .await
            .map_err(ClientError::Transport)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        let resp = self
            .client
            .delete(self.url("/customer"))
            .query(&[("id", id.to_string())])
            .send()
            .await
            .map_err(ClientError::Transport)?;
        Self::check(resp).await?;
        Ok(())
    }
}
