use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::customer_repository::{CustomerChanges, CustomerRepository};
use crate::domain::customers::customer::Customer;
use crate::infrastructure::db::PgPool;

pub struct SqlxCustomerRepository {
    pub pool: PgPool,
}

impl SqlxCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &PgRow) -> Customer {
    Customer {
        id: r.get("id"),
        name: r.get("name"),
        email: r.get("email"),
        status: r.get("status"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl CustomerRepository for SqlxCustomerRepository {
    async fn insert(&self, name: &str, email: &str) -> anyhow::Result<Customer> {
        let row = sqlx::query(
            r#"INSERT INTO customers (name, email) VALUES ($1, $2)
               RETURNING id, name, email, status, created_at, updated_at"#,
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_row(&row))
    }

    async fn list(&self) -> anyhow::Result<Vec<Customer>> {
        let rows = sqlx::query(
            r#"SELECT id, name, email, status, created_at, updated_at
               FROM customers
               ORDER BY created_at ASC, id ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_row).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Customer>> {
        let row = sqlx::query(
            r#"SELECT id, name, email, status, created_at, updated_at
               FROM customers WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_row))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &CustomerChanges,
    ) -> anyhow::Result<Option<Customer>> {
        let row = sqlx::query(
            r#"UPDATE customers
               SET name = $2, email = $3, status = $4,
                   updated_at = GREATEST(now(), updated_at)
               WHERE id = $1
               RETURNING id, name, email, status, created_at, updated_at"#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(changes.status)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_row))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
