use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::dto::customers::{CreateCustomerDto, UpdateCustomerDto};
use crate::application::use_cases::customers::CustomerError;
use crate::application::use_cases::customers::create_customer::CreateCustomer;
use crate::application::use_cases::customers::delete_customer::DeleteCustomer;
use crate::application::use_cases::customers::list_customers::ListCustomers;
use crate::application::use_cases::customers::update_customer::UpdateCustomer;
use crate::bootstrap::app_context::AppContext;
use crate::domain::customers::customer as domain;
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<domain::Customer> for Customer {
    fn from(c: domain::Customer) -> Self {
        Customer {
            id: c.id,
            name: c.name,
            email: c.email,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCustomerRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub status: bool,
}

#[derive(Debug, Deserialize)]
pub struct CustomerIdQuery {
    pub id: Option<String>,
}

fn required(field: &str, value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::Validation(format!("{field} is required"))),
    }
}

#[utoipa::path(get, path = "/customers", tag = "Customers",
    responses((status = 200, description = "All customers, oldest first", body = [Customer])))]
pub async fn list_customers(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let repo = ctx.customer_repo();
    let uc = ListCustomers {
        repo: repo.as_ref(),
    };
    let items = uc.execute().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/customer", tag = "Customers", request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Created customer", body = Customer),
        (status = 400, description = "Missing name or email", body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn create_customer(
    State(ctx): State<AppContext>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    let Json(req) = payload?;
    let dto = CreateCustomerDto {
        name: required("name", req.name)?,
        email: required("email", req.email)?,
    };

    let repo = ctx.customer_repo();
    let uc = CreateCustomer {
        repo: repo.as_ref(),
    };
    let customer = uc.execute(&dto).await?;
    Ok(Json(customer.into()))
}

#[utoipa::path(put, path = "/customer", tag = "Customers", request_body = UpdateCustomerRequest,
    params(("id" = String, Query, description = "Customer ID")),
    responses(
        (status = 200, description = "Updated customer", body = Customer),
        (status = 400, description = "Missing id", body = crate::presentation::http::error::ErrorBody),
        (status = 404, description = "No customer with this id", body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn update_customer(
    State(ctx): State<AppContext>,
    Query(q): Query<CustomerIdQuery>,
    payload: Result<Json<UpdateCustomerRequest>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    let id = q.id.unwrap_or_default();
    // A missing id wins over a malformed body
    if id.trim().is_empty() {
        return Err(CustomerError::InvalidRequest("missing customer id".into()).into());
    }
    let Json(req) = payload?;
    let dto = UpdateCustomerDto {
        name: req.name,
        email: req.email,
        status: req.status,
    };

    let repo = ctx.customer_repo();
    let uc = UpdateCustomer {
        repo: repo.as_ref(),
    };
    let customer = uc.execute(&id, dto).await?;
    Ok(Json(customer.into()))
}

#[utoipa::path(delete, path = "/customer", tag = "Customers",
    params(("id" = String, Query, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer removed or already absent"),
        (status = 400, description = "Missing id", body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn delete_customer(
    State(ctx): State<AppContext>,
    Query(q): Query<CustomerIdQuery>,
) -> Result<StatusCode, ApiError> {
    let id = q.id.unwrap_or_default();
    let repo = ctx.customer_repo();
    let uc = DeleteCustomer {
        repo: repo.as_ref(),
    };
    uc.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/customers", get(list_customers))
        .route(
            "/customer",
            post(create_customer)
                .put(update_customer)
                .delete(delete_customer),
        )
        .with_state(ctx)
}
