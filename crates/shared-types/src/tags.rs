//! # Tag Vocabulary
//!
//! Protocol-level tag names attached to process and module records, plus the
//! reserved marker the hydrator looks for.

/// Format of the module binary (e.g. `wasm32-unknown-emscripten`).
pub const TAG_MODULE_FORMAT: &str = "Module-Format";
/// Encoding of the evaluation input.
pub const TAG_INPUT_ENCODING: &str = "Input-Encoding";
/// Encoding of the evaluation output.
pub const TAG_OUTPUT_ENCODING: &str = "Output-Encoding";
/// Protocol variant.
pub const TAG_VARIANT: &str = "Variant";
/// Maximum memory a process may allocate.
pub const TAG_MEMORY_LIMIT: &str = "Memory-Limit";
/// Maximum compute a single evaluation may consume.
pub const TAG_COMPUTE_LIMIT: &str = "Compute-Limit";
/// Data protocol identifier.
pub const TAG_DATA_PROTOCOL: &str = "Data-Protocol";
/// Record type (`Process`, `Module`, `Message`, ...).
pub const TAG_TYPE: &str = "Type";
/// MIME type of the record data.
pub const TAG_CONTENT_TYPE: &str = "Content-Type";
/// Sequencer input payload carried on every interaction.
pub const TAG_INPUT: &str = "Input";
/// Reference from a process to the module it runs.
pub const TAG_MODULE: &str = "Module";

/// Marker tag: the message data lives in another transaction whose id is
/// this tag's value.
pub const TAG_LOAD: &str = "Load";

/// `Type` value of a process record.
pub const TYPE_PROCESS: &str = "Process";
/// `Type` value of a module record.
pub const TYPE_MODULE: &str = "Module";

/// Tags every module record is expected to carry.
pub const MODULE_TAGS: &[&str] = &[
    TAG_MODULE_FORMAT,
    TAG_INPUT_ENCODING,
    TAG_OUTPUT_ENCODING,
    TAG_VARIANT,
    TAG_MEMORY_LIMIT,
    TAG_COMPUTE_LIMIT,
    TAG_DATA_PROTOCOL,
    TAG_TYPE,
    TAG_CONTENT_TYPE,
];
