pub mod customer_repository_memory;
pub mod customer_repository_sqlx;
