//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, trace, CORS, metrics)
//!     → routes.rs (declarative route table, uniform fallback)
//!     → handlers.rs (resolve → one outbound call → relay)
//!     → error.rs (failures translated to the uniform envelope)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod routes;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use request::{MakeGatewayRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
