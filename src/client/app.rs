use uuid::Uuid;

use crate::client::api::{ClientError, CustomerApi};
use crate::client::form::{CustomerForm, Submission};
use crate::client::state::CustomerList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Name or email was blank; nothing was sent.
    Skipped,
    Created(Uuid),
    Updated(Uuid),
    /// The update request failed and the local list was left as it was.
    UpdateFailed(Uuid),
}

/// Drives the customer screen: owns the list mirror and the form and
/// applies server responses to them.
///
/// Failed updates and deletes are logged and leave the list untouched.
/// Failed loads and creates are returned to the caller.
pub struct CustomerApp<A: CustomerApi> {
    api: A,
    customers: CustomerList,
    form: CustomerForm,
}

impl<A: CustomerApi> CustomerApp<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            customers: CustomerList::new(),
            form: CustomerForm::new(),
        }
    }

    pub fn customers(&self) -> &CustomerList {
        &self.customers
    }

    pub fn form(&self) -> &CustomerForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CustomerForm {
        &mut self.form
    }

    pub async fn load(&mut self) -> Result<(), ClientError> {
        let items = self.api.list().await?;
        tracing::debug!(count = items.len(), "customers_loaded");
        self.customers.replace_all(items);
        Ok(())
    }

    /// Submits the form as a create or, in edit mode, an update. The form
    /// is cleared afterwards unless the create request failed.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, ClientError> {
        let Some(submission) = self.form.submission() else {
            return Ok(SubmitOutcome::Skipped);
        };
        let outcome = match submission {
            Submission::Create(req) => {
                let created = self.api.create(&req).await?;
                let id = created.id;
                self.customers.append(created);
                SubmitOutcome::Created(id)
            }
            Submission::Update(id, req) => match self.api.update(id, &req).await {
                Ok(updated) => {
                    tracing::debug!(customer_id = %id, "customer_updated");
                    self.customers.replace(updated);
                    SubmitOutcome::Updated(id)
                }
                Err(e) => {
                    tracing::warn!(customer_id = %id, error = %e, "customer_update_failed");
                    SubmitOutcome::UpdateFailed(id)
                }
            },
        };
        self.form.clear();
        Ok(outcome)
    }

    /// Returns whether the customer was removed locally.
    pub async fn delete(&mut self, id: Uuid) -> bool {
        match self.api.delete(id).await {
            Ok(()) => self.customers.remove(id),
            Err(e) => {
                tracing::warn!(customer_id = %id, error = %e, "customer_delete_failed");
                false
            }
        }
    }

    /// Loads a mirrored record into the form. Unknown ids are ignored.
    pub fn start_editing(&mut self, id: Uuid) -> bool {
        match self.customers.get(id) {
            Some(record) => {
                self.form.start_editing(record);
                true
            }
            None => false,
        }
    }
}
