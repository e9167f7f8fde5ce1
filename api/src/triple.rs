//! A triple expresses a single fact.
//! It is made of a subject, a predicate and an object.
use crate::node::{Node, NodeKind};
use thiserror::Error;

/// An RDF triple.
///
/// Triples are immutable once built,
/// and compared structurally (field by field).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    subject: Node,
    predicate: Node,
    object: Node,
}

/// This error is raised by [`Triple::checked`] for triples that are not valid RDF.
#[derive(Debug, Error)]
pub enum InvalidTriple {
    /// A literal was used as predicate
    #[error("A literal can not be used as predicate: {0:?}")]
    LiteralPredicate(Node),
    /// A literal was used as subject
    #[error("A literal can not be used as subject: {0:?}")]
    LiteralSubject(Node),
}

impl Triple {
    /// Build a triple.
    ///
    /// The components are not checked:
    /// the dataset producer is trusted to respect the kind constraints of RDF.
    /// See [`Triple::checked`].
    pub fn new(subject: Node, predicate: Node, object: Node) -> Self {
        Triple {
            subject,
            predicate,
            object,
        }
    }

    /// Build a triple, rejecting literals in subject or predicate position.
    ///
    /// Blank nodes are accepted as predicate (generalized RDF, as produced by JSON-LD).
    pub fn checked(subject: Node, predicate: Node, object: Node) -> Result<Self, InvalidTriple> {
        if predicate.kind() == NodeKind::Literal {
            return Err(InvalidTriple::LiteralPredicate(predicate));
        }
        if subject.kind() == NodeKind::Literal {
            return Err(InvalidTriple::LiteralSubject(subject));
        }
        Ok(Triple::new(subject, predicate, object))
    }

    /// The subject of this triple.
    pub fn s(&self) -> &Node {
        &self.subject
    }

    /// The predicate of this triple.
    pub fn p(&self) -> &Node {
        &self.predicate
    }

    /// The object of this triple.
    pub fn o(&self) -> &Node {
        &self.object
    }

    /// The three components of this triple.
    pub fn spo(&self) -> [&Node; 3] {
        [&self.subject, &self.predicate, &self.object]
    }

    /// Consume this triple into its three components.
    pub fn into_spo(self) -> [Node; 3] {
        [self.subject, self.predicate, self.object]
    }

    /// Build a copy of this triple where every node is passed through `f`.
    pub fn map<F: FnMut(&Node) -> Node>(&self, mut f: F) -> Triple {
        Triple::new(f(&self.subject), f(&self.predicate), f(&self.object))
    }
}
