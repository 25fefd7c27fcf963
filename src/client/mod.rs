//! Frontend-side half of the customer contract: an HTTP client for the
//! customer routes and the local list mirror kept in sync with it.

pub mod api;
pub mod app;
pub mod form;
pub mod model;
pub mod reqwest_api;
pub mod state;
