//! An RDF dataset is a collection of graphs,
//! each identified by a [`GraphName`].
//!
//! [`Dataset`] keeps its graphs, and the triples of each graph,
//! in insertion order, and never stores the same triple twice in a graph.
//! Insertion order is a convenience for reproducible iteration;
//! it carries no meaning, and canonicalization is insensitive to it.
use std::collections::{HashMap, HashSet};

use crate::node::Node;
use crate::quad::{Quad, QuadRef};
use crate::triple::Triple;

/// The name of a graph in a [`Dataset`]: `None` for the default graph,
/// or an IRI or blank node for a named graph.
pub type GraphName = Option<Node>;

/// An ordered, duplicate-free sequence of triples.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    index: HashSet<Triple>,
}

impl Graph {
    /// Build an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `triple` at the end of this graph.
    ///
    /// Return `false` (and leave the graph unchanged) if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.index.contains(&triple) {
            return false;
        }
        self.index.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Whether `triple` belongs to this graph.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.index.contains(triple)
    }

    /// Iterate over the triples of this graph, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// The number of triples in this graph.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether this graph is empty.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An RDF dataset: an ordered mapping from [`GraphName`] to [`Graph`].
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    graphs: Vec<(GraphName, Graph)>,
    positions: HashMap<GraphName, usize>,
}

impl Dataset {
    /// Build an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `triple` in the graph named `graph_name`,
    /// creating that graph if needed.
    ///
    /// Return `false` if the triple was already present in that graph.
    pub fn insert(&mut self, graph_name: GraphName, triple: Triple) -> bool {
        let pos = match self.positions.get(&graph_name) {
            Some(pos) => *pos,
            None => {
                let pos = self.graphs.len();
                self.positions.insert(graph_name.clone(), pos);
                self.graphs.push((graph_name, Graph::new()));
                pos
            }
        };
        self.graphs[pos].1.insert(triple)
    }

    /// Insert `quad` in this dataset.
    ///
    /// Return `false` if it was already present.
    pub fn insert_quad(&mut self, quad: Quad) -> bool {
        let (triple, graph_name) = quad.into_parts();
        self.insert(graph_name, triple)
    }

    /// The graph named `graph_name`, if any.
    pub fn graph(&self, graph_name: &GraphName) -> Option<&Graph> {
        self.positions
            .get(graph_name)
            .map(|pos| &self.graphs[*pos].1)
    }

    /// Iterate over the names of the graphs of this dataset, in insertion order.
    pub fn graph_names(&self) -> impl Iterator<Item = &GraphName> {
        self.graphs.iter().map(|(name, _)| name)
    }

    /// Iterate over all the quads of this dataset,
    /// graph by graph, in insertion order.
    pub fn quads(&self) -> impl Iterator<Item = QuadRef<'_>> {
        self.graphs.iter().flat_map(|(name, graph)| {
            graph
                .iter()
                .map(move |triple| QuadRef::new(triple, name.as_ref()))
        })
    }

    /// Whether `quad` belongs to this dataset.
    pub fn contains(&self, quad: &Quad) -> bool {
        self.graph(&quad.g().cloned())
            .map(|g| g.contains(quad.triple()))
            .unwrap_or(false)
    }

    /// The number of quads in this dataset.
    pub fn len(&self) -> usize {
        self.graphs.iter().map(|(_, g)| g.len()).sum()
    }

    /// Whether this dataset contains no quad.
    pub fn is_empty(&self) -> bool {
        self.graphs.iter().all(|(_, g)| g.is_empty())
    }

    /// The number of graphs in this dataset.
    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }
}

impl FromIterator<Quad> for Dataset {
    fn from_iter<I: IntoIterator<Item = Quad>>(iter: I) -> Self {
        let mut d = Dataset::new();
        d.extend(iter);
        d
    }
}

impl Extend<Quad> for Dataset {
    fn extend<I: IntoIterator<Item = Quad>>(&mut self, iter: I) {
        for quad in iter {
            self.insert_quad(quad);
        }
    }
}
