//! HTTP API module for the Notice Engine.
//!
//! This module provides the REST endpoint that reconciles a resignation's
//! notice period against the employee's leave balance.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, ReconciliationRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
