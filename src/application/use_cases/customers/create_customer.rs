use crate::application::dto::customers::CreateCustomerDto;
use crate::application::ports::customer_repository::CustomerRepository;
use crate::application::use_cases::customers::CustomerError;
use crate::domain::customers::customer::Customer;

pub struct CreateCustomer<'a, R: CustomerRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CustomerRepository + ?Sized> CreateCustomer<'a, R> {
    // Presence of name/email is checked by the caller
    pub async fn execute(&self, req: &CreateCustomerDto) -> Result<Customer, CustomerError> {
        let customer = self
            .repo
            .insert(&req.name, &req.email)
            .await
            .map_err(CustomerError::Store)?;
        tracing::info!(customer_id = %customer.id, "customer_created");
        Ok(customer)
    }
}
