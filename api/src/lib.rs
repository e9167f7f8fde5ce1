//! This crate is part of [ldcanon],
//! a toolkit for producing canonical forms of [RDF] datasets.
//!
//! This crate defines the data model shared by the other crates:
//! * [`Node`], the closed set of RDF terms (IRI, blank node, literal);
//! * [`Triple`] and [`Quad`], the statements built from nodes;
//! * [`Dataset`], a collection of named graphs of triples.
//!
//! Unlike more general RDF toolkits, these types are concrete:
//! canonicalization only needs one representation,
//! and nodes are small immutable strings that are cheap to clone.
//!
//! [ldcanon]: https://docs.rs/ldcanon/latest/ldcanon/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
#![deny(missing_docs)]

pub mod dataset;
pub mod node;
pub mod ns;
pub mod quad;
pub mod triple;

pub use dataset::{Dataset, Graph, GraphName};
pub use node::{InvalidBlankNodeId, Node, NodeKind};
pub use quad::{Quad, QuadRef};
pub use triple::{InvalidTriple, Triple};
