//! This crate is part of [ldcanon],
//! a toolkit for producing canonical forms of [RDF] datasets.
//!
//! This crate provides functions to canonicalize datasets,
//! i.e. to relabel their blank nodes in a way that only depends on the structure of the dataset,
//! and to serialize them as canonical N-Quads.
//!
//! It currently implements the [RDFC-1.0](rdfc10) algorithm
//! (formerly known as URDNA2015).
//!
//! [ldcanon]: https://docs.rs/ldcanon/latest/ldcanon/
//! [RDF]: https://www.w3.org/TR/rdf-primer/

#![deny(missing_docs)]

pub mod hash;
pub mod issuer;
pub mod options;
pub mod permutator;
pub mod rdfc10;

pub use options::C14nOptions;
pub use rdfc10::{canonicalize, normalize, relabel, C14nIdMap};

use thiserror::Error;

/// Canonicalization error.
#[derive(Debug, Error)]
pub enum C14nError {
    /// A literal was found in predicate position
    #[error("Literal used as predicate: {0}")]
    LiteralPredicate(String),
    /// The c14n algorithm does not support this dataset
    #[error("Unsupported feature: {0}")]
    Unsupported(String),
    /// A blank node was left without a canonical identifier
    #[error("No canonical identifier for blank node _:{0}")]
    MissingCanonicalId(String),
    /// The graph was deemed too complex by the configured safeguards of the algorithm
    #[error("Toxic graph detected: {0}")]
    ToxicGraph(String),
    /// A group of undistinguishable blank nodes was processed without issuing any identifier
    #[error("No progress made while {0} blank nodes were still unlabelled")]
    NoProgress(usize),
    /// An IO error occurred while writing the normalized form
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
