use crate::application::ports::customer_repository::CustomerRepository;
use crate::application::use_cases::customers::CustomerError;
use crate::domain::customers::customer::Customer;

pub struct ListCustomers<'a, R: CustomerRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CustomerRepository + ?Sized> ListCustomers<'a, R> {
    pub async fn execute(&self) -> Result<Vec<Customer>, CustomerError> {
        self.repo.list().await.map_err(CustomerError::Store)
    }
}
