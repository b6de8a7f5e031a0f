//! # CU Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (sort-key codec)
//! └── src/integration/  # Cross-crate flows over a scripted transport
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cu-tests
//! cargo test -p cu-tests integration::hydration
//! cargo bench -p cu-tests
//! ```

pub mod fixtures;
pub mod integration;
