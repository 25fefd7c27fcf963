use crate::application::ports::customer_repository::CustomerChanges;

#[derive(Debug, Clone)]
pub struct CreateCustomerDto {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct UpdateCustomerDto {
    pub name: String,
    pub email: String,
    pub status: bool,
}

impl From<UpdateCustomerDto> for CustomerChanges {
    fn from(d: UpdateCustomerDto) -> Self {
        CustomerChanges {
            name: d.name,
            email: d.email,
            status: d.status,
        }
    }
}
