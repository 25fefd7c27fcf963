use uuid::Uuid;

pub mod create_customer;
pub mod delete_customer;
pub mod list_customers;
pub mod update_customer;

#[derive(thiserror::Error, Debug)]
pub enum CustomerError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("customer {0} does not exist")]
    NotFound(String),
    #[error("customer store failure")]
    Store(#[source] anyhow::Error),
}

impl CustomerError {
    pub fn not_found(id: Uuid) -> Self {
        CustomerError::NotFound(id.to_string())
    }
}

// Empty ids are rejected; anything else that is not a UUID cannot name a row.
pub(crate) enum ParsedId {
    Valid(Uuid),
    Unknown(String),
}

pub(crate) fn parse_id(raw: &str) -> Result<ParsedId, CustomerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CustomerError::InvalidRequest("missing customer id".into()));
    }
    Ok(match Uuid::parse_str(trimmed) {
        Ok(id) => ParsedId::Valid(id),
        Err(_) => ParsedId::Unknown(trimmed.to_string()),
    })
}
