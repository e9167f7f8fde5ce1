//! This crate aims to provide a toolkit
//! for producing canonical forms of [RDF] datasets in Rust.
//!
//! RDF is a data model
//! designed to exchange knowledge on the Web
//! in an interoperable way.
//! The same RDF [dataset] can be written in many ways:
//! its statements can come in any order,
//! and its blank nodes can be given any local label.
//! [Canonicalization](c14n) relabels blank nodes
//! in a way that only depends on the structure of the dataset,
//! so that two datasets carrying the same information
//! are serialized as the very same N-Quads document.
//! This can be used to compare, hash or sign linked data.
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [dataset]: api::Dataset
//!
//! # Getting Started
//!
//! ```
//! use ldcanon::c14n::canonicalize;
//! use ldcanon::nquads::parse_str;
//!
//! let d1 = parse_str(r#"
//!     _:alice <http://xmlns.com/foaf/0.1/knows> _:bob .
//!     _:bob <http://xmlns.com/foaf/0.1/name> "Bob" .
//! "#)?;
//! let d2 = parse_str(r#"
//!     _:b <http://xmlns.com/foaf/0.1/name> "Bob" .
//!     _:a <http://xmlns.com/foaf/0.1/knows> _:b .
//! "#)?;
//! assert_eq!(canonicalize(&d1)?, canonicalize(&d2)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use ldcanon_api as api;
pub use ldcanon_c14n as c14n;
pub use ldcanon_isomorphism as isomorphism;
pub use ldcanon_nquads as nquads;
