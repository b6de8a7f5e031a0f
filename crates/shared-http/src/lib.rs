//! # Shared HTTP Transport
//!
//! Outbound port for every HTTP round trip the data layer makes.
//!
//! ## Architecture
//!
//! - **Ports**: `HttpTransport` (driven port), `HttpRequest` / `HttpResponse`
//! - **Adapters**: `ReqwestTransport` (production), `MockTransport` (tests,
//!   behind the `test-utils` feature)
//!
//! Timeouts belong to the transport. Callers never retry: a failed round
//! trip is surfaced as a [`TransportError`].

pub mod adapters;
pub mod errors;
pub mod ports;

pub use adapters::reqwest_transport::{ReqwestTransport, TransportConfig};
#[cfg(any(test, feature = "test-utils"))]
pub use adapters::mock::MockTransport;
pub use errors::TransportError;
pub use ports::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
