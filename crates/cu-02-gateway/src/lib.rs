//! # CU-02: Gateway Client
//!
//! Loads transaction metadata through the gateway's GraphQL endpoint and raw
//! transaction bytes through direct retrieval.
//!
//! ## Architecture
//!
//! - **Domain**: GraphQL wire shapes, `GatewayError`
//! - **Ports**: Inbound `GatewayApi`; outbound is `shared_http::HttpTransport`
//! - **Application**: `GatewayClient` service
//!
//! ## Operations
//!
//! | operation | request |
//! |---|---|
//! | `load_transaction_meta` | `POST {gateway}/graphql` (`transactions(ids:)`) |
//! | `load_transaction_data` | `GET {gateway}/{id}` |
//! | `load_process` / `load_module` | metadata + `Type` tag check |
//! | `load_blocks_meta` | `POST {gateway}/graphql` (`blocks(height:)`, cursor paged) |

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::service::GatewayClient;
pub use config::GatewayConfig;
pub use domain::errors::GatewayError;
pub use domain::graphql::TransactionNode;
pub use ports::inbound::GatewayApi;
