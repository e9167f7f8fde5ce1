//! This crate is part of [ldcanon],
//! a toolkit for producing canonical forms of [RDF] datasets.
//!
//! This crate provides function to check if two graphs (resp. two datasets)
//! are [isomorphic], by comparing their canonical forms.
//!
//! [ldcanon]: https://docs.rs/ldcanon/latest/ldcanon/
//! [RDF]: https://www.w3.org/TR/rdf12-primer/
//! [isomorphic]: https://www.w3.org/TR/rdf12-concepts/#graph-isomorphism
#![deny(missing_docs)]

mod dataset;
mod graph;

pub use dataset::{isomorphic_datasets, isomorphic_datasets_with};
pub use graph::isomorphic_graphs;
