//! A quad expresses a single fact within a context.
//! Quads are like RDF [`triple`](crate::triple)s
//! augmented with an optional graph name.
//!
//! They are the individual statements of an RDF [`dataset`](crate::dataset).
use crate::node::Node;
use crate::triple::Triple;

/// An owned RDF quad.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quad {
    triple: Triple,
    graph: Option<Node>,
}

impl Quad {
    /// Build a quad from a triple and a graph name (`None` for the default graph).
    pub fn new(triple: Triple, graph: Option<Node>) -> Self {
        Quad { triple, graph }
    }

    /// Build a quad from its four components.
    pub fn from_terms(subject: Node, predicate: Node, object: Node, graph: Option<Node>) -> Self {
        Quad::new(Triple::new(subject, predicate, object), graph)
    }

    /// The subject of this quad.
    pub fn s(&self) -> &Node {
        self.triple.s()
    }

    /// The predicate of this quad.
    pub fn p(&self) -> &Node {
        self.triple.p()
    }

    /// The object of this quad.
    pub fn o(&self) -> &Node {
        self.triple.o()
    }

    /// The (optional) graph name
    pub fn g(&self) -> Option<&Node> {
        self.graph.as_ref()
    }

    /// The triple of this quad.
    pub fn triple(&self) -> &Triple {
        &self.triple
    }

    /// Borrow this quad.
    pub fn as_quad_ref(&self) -> QuadRef<'_> {
        QuadRef::new(&self.triple, self.graph.as_ref())
    }

    /// Consume this quad into its triple and graph name.
    pub fn into_parts(self) -> (Triple, Option<Node>) {
        (self.triple, self.graph)
    }
}

/// A borrowed quad, as yielded by [`Dataset::quads`](crate::dataset::Dataset::quads).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuadRef<'a> {
    triple: &'a Triple,
    graph: Option<&'a Node>,
}

impl<'a> QuadRef<'a> {
    /// Pair a triple with a graph name.
    pub fn new(triple: &'a Triple, graph: Option<&'a Node>) -> Self {
        QuadRef { triple, graph }
    }

    /// The subject of this quad.
    pub fn s(&self) -> &'a Node {
        self.triple.s()
    }

    /// The predicate of this quad.
    pub fn p(&self) -> &'a Node {
        self.triple.p()
    }

    /// The object of this quad.
    pub fn o(&self) -> &'a Node {
        self.triple.o()
    }

    /// The (optional) graph name
    pub fn g(&self) -> Option<&'a Node> {
        self.graph
    }

    /// The triple of this quad.
    pub fn triple(&self) -> &'a Triple {
        self.triple
    }

    /// The components of this quad, as subject-predicate-object plus graph name.
    pub fn spog(&self) -> ([&'a Node; 3], Option<&'a Node>) {
        (self.triple.spo(), self.graph)
    }

    /// Iterate over the components of this quad: subject, predicate, object,
    /// followed by the graph name if any.
    pub fn components(&self) -> impl Iterator<Item = &'a Node> {
        self.triple.spo().into_iter().chain(self.graph)
    }

    /// Clone this quad into an owned [`Quad`].
    pub fn to_quad(&self) -> Quad {
        Quad::new(self.triple.clone(), self.graph.cloned())
    }
}

impl<'a> From<&'a Quad> for QuadRef<'a> {
    fn from(q: &'a Quad) -> Self {
        q.as_quad_ref()
    }
}
