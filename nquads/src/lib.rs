//! This crate is part of [ldcanon],
//! a toolkit for producing canonical forms of [RDF] datasets.
//!
//! This crate provides the [N-Quads] codec:
//! * a [`parser`] based on [`rio_turtle`](https://docs.rs/rio_turtle/),
//!   producing [`Dataset`](ldcanon_api::Dataset)s;
//! * a [`serializer`] producing *canonical* N-Quads,
//!   i.e. the exact textual form expected by RDF dataset canonicalization
//!   (one space between terms, minimal literal escaping, lines sorted by code point).
//!
//! [ldcanon]: https://docs.rs/ldcanon/latest/ldcanon/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
//! [N-Quads]: https://www.w3.org/TR/n-quads/
#![deny(missing_docs)]

pub mod parser;
pub mod serializer;

pub use parser::{parse_bufread, parse_str};
pub use serializer::{quad_line, to_nquads, write_nquads, write_term};

use thiserror::Error;

/// N-Quads parsing error.
#[derive(Debug, Error)]
pub enum NQuadsError {
    /// The input is not valid N-Quads
    #[error("N-Quads syntax error: {0}")]
    Syntax(#[from] rio_turtle::TurtleError),
    /// A blank node label does not comply with Turtle's BLANK_NODE_LABEL
    #[error(transparent)]
    InvalidBlankNode(#[from] ldcanon_api::InvalidBlankNodeId),
    /// The input is valid, but uses a feature that datasets can not represent
    #[error("Unsupported feature: {0}")]
    Unsupported(String),
}
