use uuid::Uuid;

/// A persisted customer record.
///
/// `id` and `created_at` are assigned by the store and never change;
/// `updated_at` moves forward on every successful update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
