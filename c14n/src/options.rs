//! Defines types for configuring canonicalization.

/// The default value of [`C14nOptions::depth_factor`].
pub const DEFAULT_DEPTH_FACTOR: f32 = 1.0;

/// The default value of [`C14nOptions::permutation_limit`].
pub const DEFAULT_PERMUTATION_LIMIT: usize = 6;

/// Canonicalization options.
///
/// The safeguards ([`depth_factor`](Self::depth_factor) and [`permutation_limit`](Self::permutation_limit))
/// stop the algorithm if the computation becomes too complex,
/// in order to secure it against [dataset poisoning](https://www.w3.org/TR/rdf-canon/#dataset-poisoning).
/// The default values are expected to work with any "realistic" dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct C14nOptions {
    depth_factor: f32,
    permutation_limit: usize,
    strict: bool,
}

impl Default for C14nOptions {
    fn default() -> Self {
        C14nOptions {
            depth_factor: DEFAULT_DEPTH_FACTOR,
            permutation_limit: DEFAULT_PERMUTATION_LIMIT,
            strict: false,
        }
    }
}

impl C14nOptions {
    /// Build the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with no safeguard: the algorithm will explore any dataset exhaustively,
    /// however long it takes.
    pub fn unbounded() -> Self {
        C14nOptions {
            depth_factor: f32::INFINITY,
            permutation_limit: usize::MAX,
            strict: false,
        }
    }

    /// The N-degree hash algorithm will not nest more deeply than
    /// `depth_factor`*N, where N is the total number of blank nodes in the dataset.
    pub fn depth_factor(&self) -> f32 {
        self.depth_factor
    }

    /// The N-degree hash algorithm will not try to disambiguate more than
    /// `permutation_limit` undistinguishable blank nodes
    /// (blank nodes with the same immediate neighbourhood).
    pub fn permutation_limit(&self) -> usize {
        self.permutation_limit
    }

    /// If true, only standard RDF is accepted,
    /// i.e. blank nodes in predicate position are rejected.
    /// Otherwise, they are hashed like other blank nodes, in position `p`.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Change the [`depth_factor`](Self::depth_factor)
    pub fn with_depth_factor(mut self, depth_factor: f32) -> Self {
        self.depth_factor = depth_factor;
        self
    }

    /// Change the [`permutation_limit`](Self::permutation_limit)
    pub fn with_permutation_limit(mut self, permutation_limit: usize) -> Self {
        self.permutation_limit = permutation_limit;
        self
    }

    /// Change the [`strict`](Self::strict) flag
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
