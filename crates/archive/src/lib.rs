//! External observation-archive consumer boundary
//!
//! The dashboard optionally enriches its spectroscopy view with a summary
//! fetched from a third-party archive endpoint. The transport lives with
//! the caller; this crate owns the tolerant side of the boundary: parsing
//! JSON or CSV payloads of unknown shape, aggregating per-molecule hit
//! counts, and providing a local fallback computed from the generated
//! catalog. Failures are logged and contained here; nothing in this crate
//! panics or propagates errors into catalog or spectral computation.

pub mod summary;

pub use summary::{
    MOLECULE_VOCABULARY, MoleculeCount, SummaryError, local_summary, summarize_or_local,
    summarize_payload,
};
