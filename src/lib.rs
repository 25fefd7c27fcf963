// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: Postgres and in-memory customer stores
// - presentation: HTTP handlers and routing
// - application: ports, DTOs and customer use cases
// - domain: core models
// - client: HTTP client and the local customer list mirror used by frontends

pub mod application;
pub mod bootstrap;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
