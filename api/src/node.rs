//! I define [`Node`], the closed set of RDF terms,
//! as well as [`NodeKind`] and the validation of blank node labels.
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// A modified production of Turtle's BLANK_NODE_LABEL according to the
    /// [Turtle spec](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL).
    ///
    /// In contrast to the original rule this regular expression does not look
    /// for a leading `_:`. Accordingly it only checks if the label is valid.
    ///
    /// # Rule
    ///
    /// `BLANK_NODE_LABEL ::= (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    static ref BNODE_ID: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
          |
          \u{2e} [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
      )*
      $
    ").unwrap();
}

/// This error is raised when trying to build a blank node from an invalid label.
#[derive(Debug, Error)]
#[error("The given blank node identifier '{0}' does not comply with Turtle's BLANK_NODE_LABEL")]
pub struct InvalidBlankNodeId(pub String);

/// The different kinds of [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
}

/// An RDF term.
///
/// Nodes are ordered by kind first (`Literal < BlankNode < Iri`),
/// then by `value` (byte-wise);
/// literals with the same value are then ordered by `language`
/// and finally by `datatype`, an absent component sorting before a present one.
/// This order comes from the declaration order of the variants and of their fields,
/// so **do not reorder them**.
///
/// NB: this order is used for grouping and tie-breaking,
/// never for the final ordering of canonical N-Quads,
/// which sorts the serialized lines instead.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal).
    ///
    /// `datatype` and `language` are stored as given:
    /// a literal without datatype is *not* equal to the same literal
    /// with an explicit datatype, even `xsd:string`.
    Literal {
        /// The lexical form
        value: String,
        /// The language tag, if any
        language: Option<String>,
        /// The datatype IRI, if explicitly given
        datatype: Option<String>,
    },
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes),
    /// whose label is stored without the leading `_:`.
    BlankNode {
        /// The local label
        value: String,
    },
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs) (or relative IRI reference).
    Iri {
        /// The IRI, without angle brackets
        value: String,
    },
}

impl Node {
    /// Build an IRI node. The IRI is not validated.
    pub fn iri(value: impl Into<String>) -> Self {
        Node::Iri {
            value: value.into(),
        }
    }

    /// Build a blank node. The label is not validated; see [`Node::checked_blank`].
    pub fn blank(value: impl Into<String>) -> Self {
        Node::BlankNode {
            value: value.into(),
        }
    }

    /// Build a blank node, checking that `value` is a valid blank node label.
    pub fn checked_blank(value: impl Into<String>) -> Result<Self, InvalidBlankNodeId> {
        let value = value.into();
        if BNODE_ID.is_match(&value) {
            Ok(Node::BlankNode { value })
        } else {
            Err(InvalidBlankNodeId(value))
        }
    }

    /// Build a simple literal (no datatype, no language tag).
    pub fn literal(value: impl Into<String>) -> Self {
        Node::Literal {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// Build a literal with an explicit datatype.
    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Node::Literal {
            value: value.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }

    /// Build a language-tagged literal.
    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Node::Literal {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    /// The kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Literal { .. } => NodeKind::Literal,
            Node::BlankNode { .. } => NodeKind::BlankNode,
            Node::Iri { .. } => NodeKind::Iri,
        }
    }

    /// Whether this node is an IRI.
    pub fn is_iri(&self) -> bool {
        matches!(self, Node::Iri { .. })
    }

    /// Whether this node is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Node::BlankNode { .. })
    }

    /// Whether this node is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal { .. })
    }

    /// The value of this node:
    /// the IRI, the blank node label, or the lexical form of the literal.
    pub fn value(&self) -> &str {
        match self {
            Node::Literal { value, .. } | Node::BlankNode { value } | Node::Iri { value } => value,
        }
    }

    /// The IRI of this node, if it is an IRI.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri { value } => Some(value),
            _ => None,
        }
    }

    /// The label of this node, if it is a blank node.
    pub fn as_blank_node(&self) -> Option<&str> {
        match self {
            Node::BlankNode { value } => Some(value),
            _ => None,
        }
    }

    /// The explicit datatype of this node, if it is a typed literal.
    pub fn datatype(&self) -> Option<&str> {
        match self {
            Node::Literal { datatype, .. } => datatype.as_deref(),
            _ => None,
        }
    }

    /// The language tag of this node, if it is a language-tagged literal.
    pub fn language(&self) -> Option<&str> {
        match self {
            Node::Literal { language, .. } => language.as_deref(),
            _ => None,
        }
    }
}
