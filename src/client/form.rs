use uuid::Uuid;

use crate::client::model::{CustomerRecord, CustomerUpdate, NewCustomer};

/// What a form submit turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewCustomer),
    Update(Uuid, CustomerUpdate),
}

/// Input fields of the customer form plus the record being edited, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub status: bool,
    editing: Option<Uuid>,
}

impl CustomerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_editing(&mut self, record: &CustomerRecord) {
        self.name = record.name.clone();
        self.email = record.email.clone();
        self.status = record.status;
        self.editing = Some(record.id);
    }

    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// `None` when name or email is blank.
    pub fn submission(&self) -> Option<Submission> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return None;
        }
        Some(match self.editing {
            Some(id) => Submission::Update(
                id,
                CustomerUpdate {
                    name: self.name.clone(),
                    email: self.email.clone(),
                    status: self.status,
                },
            ),
            None => Submission::Create(NewCustomer {
                name: self.name.clone(),
                email: self.email.clone(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CustomerRecord {
        let now = chrono::Utc::now();
        CustomerRecord {
            id: Uuid::new_v4(),
            name: "Ana".into(),
            email: "ana@x.com".into(),
            status: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn blank_fields_produce_no_submission() {
        let mut form = CustomerForm::new();
        assert_eq!(form.submission(), None);
        form.name = "Ana".into();
        form.email = "  ".into();
        assert_eq!(form.submission(), None);
    }

    #[test]
    fn new_entry_submits_a_create_without_status() {
        let mut form = CustomerForm::new();
        form.name = "Ana".into();
        form.email = "ana@x.com".into();
        form.status = false;

        assert_eq!(
            form.submission(),
            Some(Submission::Create(NewCustomer {
                name: "Ana".into(),
                email: "ana@x.com".into(),
            }))
        );
    }

    #[test]
    fn editing_copies_the_record_and_routes_to_update() {
        let rec = record();
        let mut form = CustomerForm::new();
        form.start_editing(&rec);

        assert_eq!(form.editing(), Some(rec.id));
        assert_eq!(form.name, "Ana");
        assert!(!form.status);

        form.name = "Ana B".into();
        form.status = true;
        assert_eq!(
            form.submission(),
            Some(Submission::Update(
                rec.id,
                CustomerUpdate {
                    name: "Ana B".into(),
                    email: "ana@x.com".into(),
                    status: true,
                }
            ))
        );

        form.clear();
        assert!(!form.is_editing());
        assert_eq!(form, CustomerForm::default());
    }
}
