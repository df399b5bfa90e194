pub mod api;
pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod store;

pub use api::{create_router, AppState};
pub use error::ReportingError;
pub use handlers::ReportingService;
