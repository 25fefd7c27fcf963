use crate::application::dto::customers::UpdateCustomerDto;
use crate::application::ports::customer_repository::CustomerRepository;
use crate::application::use_cases::customers::{CustomerError, ParsedId, parse_id};
use crate::domain::customers::customer::Customer;

pub struct UpdateCustomer<'a, R: CustomerRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CustomerRepository + ?Sized> UpdateCustomer<'a, R> {
    /// Overwrites name, email and status of an existing customer.
    ///
    /// The existence check and the write are separate statements. A row
    /// removed in between makes the write match nothing, which is reported
    /// as `NotFound` as well.
    pub async fn execute(
        &self,
        raw_id: &str,
        req: UpdateCustomerDto,
    ) -> Result<Customer, CustomerError> {
        let id = match parse_id(raw_id)? {
            ParsedId::Valid(id) => id,
            ParsedId::Unknown(raw) => return Err(CustomerError::NotFound(raw)),
        };

        let existing = self
            .repo
            .find_by_id(id)
            .await
            .map_err(CustomerError::Store)?
            .ok_or_else(|| CustomerError::not_found(id))?;

        let updated = self
            .repo
            .update(existing.id, &req.into())
            .await
            .map_err(CustomerError::Store)?
            .ok_or_else(|| CustomerError::not_found(id))?;
        tracing::info!(customer_id = %id, status = updated.status, "customer_updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use uuid::Uuid;

    use super::*;
    use crate::application::ports::customer_repository::CustomerChanges;
    use crate::infrastructure::db::repositories::customer_repository_memory::InMemoryCustomerRepository;

    // Deletes the row right after reporting it, so the write finds nothing.
    struct DeletedAfterLookup(InMemoryCustomerRepository);

    #[async_trait]
    impl CustomerRepository for DeletedAfterLookup {
        async fn insert(&self, name: &str, email: &str) -> anyhow::Result<Customer> {
            self.0.insert(name, email).await
        }

        async fn list(&self) -> anyhow::Result<Vec<Customer>> {
            self.0.list().await
        }

        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Customer>> {
            let found = self.0.find_by_id(id).await?;
            self.0.delete(id).await?;
            Ok(found)
        }

        async fn update(
            &self,
            id: Uuid,
            changes: &CustomerChanges,
        ) -> anyhow::Result<Option<Customer>> {
            self.0.update(id, changes).await
        }

        async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
            self.0.delete(id).await
        }

        async fn ping(&self) -> anyhow::Result<()> {
            self.0.ping().await
        }
    }

    fn changes(name: &str, email: &str, status: bool) -> UpdateCustomerDto {
        UpdateCustomerDto {
            name: name.into(),
            email: email.into(),
            status,
        }
    }

    #[tokio::test]
    async fn overwrites_fields_and_keeps_identity() {
        let repo = InMemoryCustomerRepository::new();
        let original = repo.insert("Ana", "ana@x.com").await.unwrap();
        let uc = UpdateCustomer { repo: &repo };

        let updated = uc
            .execute(
                &original.id.to_string(),
                changes("Ana B", "ana.b@x.com", false),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.name, "Ana B");
        assert_eq!(updated.email, "ana.b@x.com");
        assert!(!updated.status);
        assert!(updated.updated_at >= original.updated_at);
        assert_eq!(repo.find_by_id(original.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn empty_id_is_invalid_and_changes_nothing() {
        let repo = InMemoryCustomerRepository::new();
        let original = repo.insert("Ana", "ana@x.com").await.unwrap();
        let uc = UpdateCustomer { repo: &repo };

        for raw in ["", "   "] {
            let err = uc
                .execute(raw, changes("X", "x@x.com", false))
                .await
                .unwrap_err();
            assert!(matches!(err, CustomerError::InvalidRequest(_)));
        }
        assert_eq!(repo.list().await.unwrap(), vec![original]);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_and_changes_nothing() {
        let repo = InMemoryCustomerRepository::new();
        let original = repo.insert("Ana", "ana@x.com").await.unwrap();
        let uc = UpdateCustomer { repo: &repo };

        let err = uc
            .execute(
                &uuid::Uuid::new_v4().to_string(),
                changes("X", "x@x.com", false),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::NotFound(_)));

        let err = uc
            .execute("not-a-uuid", changes("X", "x@x.com", false))
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::NotFound(ref raw) if raw == "not-a-uuid"));

        assert_eq!(repo.list().await.unwrap(), vec![original]);
    }

    #[tokio::test]
    async fn status_can_be_toggled_back_and_forth() {
        let repo = InMemoryCustomerRepository::new();
        let original = repo.insert("Ana", "ana@x.com").await.unwrap();
        let uc = UpdateCustomer { repo: &repo };
        let id = original.id.to_string();

        let inactive = uc
            .execute(&id, changes("Ana", "ana@x.com", false))
            .await
            .unwrap();
        assert!(!inactive.status);
        let active = uc
            .execute(&id, changes("Ana", "ana@x.com", true))
            .await
            .unwrap();
        assert!(active.status);
        assert!(active.updated_at >= inactive.updated_at);
    }

    #[tokio::test]
    async fn row_deleted_between_check_and_write_is_not_found() {
        let repo = DeletedAfterLookup(InMemoryCustomerRepository::new());
        let original = repo.insert("Ana", "ana@x.com").await.unwrap();
        let uc = UpdateCustomer { repo: &repo };

        let err = uc
            .execute(
                &original.id.to_string(),
                changes("Ana B", "ana@x.com", false),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::NotFound(ref raw) if *raw == original.id.to_string()));
        assert!(repo.list().await.unwrap().is_empty());
    }
}
