use crate::application::ports::customer_repository::CustomerRepository;
use crate::application::use_cases::customers::{CustomerError, ParsedId, parse_id};

pub struct DeleteCustomer<'a, R: CustomerRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CustomerRepository + ?Sized> DeleteCustomer<'a, R> {
    // Removing an id that is already gone is not an error
    pub async fn execute(&self, raw_id: &str) -> Result<(), CustomerError> {
        let id = match parse_id(raw_id)? {
            ParsedId::Valid(id) => id,
            ParsedId::Unknown(raw) => {
                tracing::debug!(customer_id = %raw, "customer_delete_unknown_id");
                return Ok(());
            }
        };
        let removed = self.repo.delete(id).await.map_err(CustomerError::Store)?;
        tracing::info!(customer_id = %id, removed, "customer_deleted");
        Ok(())
    }
}
