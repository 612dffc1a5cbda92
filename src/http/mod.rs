//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign/propagate request ID)
//!     → extract.rs (decode path captures)
//!     → handlers.rs (parse operands, call calc)
//!     → error.rs (domain errors → 400 JSON)
//!     → Send to client
//! ```

pub mod error;
pub mod extract;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
