//! I provide the implementation of the RDFC-1.0 algorithm described at
//! <https://www.w3.org/TR/rdf-canon/>
//!
//! The algorithm was previously published as URDNA2015;
//! both names designate the same output for standard RDF datasets.

use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::io;

use ldcanon_api::{Dataset, Node, QuadRef, Triple};
use ldcanon_nquads::{quad_line, to_nquads, write_nquads, write_term};

use crate::hash::{hex, HashFunction, Sha256, Sha384};
use crate::issuer::IdentifierIssuer;
use crate::options::C14nOptions;
use crate::permutator::Permutator;
use crate::C14nError;

/// Prefix of the canonical blank node identifiers.
pub const CANONICAL_PREFIX: &str = "c14n";

/// Prefix of the temporary identifiers used by the N-degree hash algorithm.
const TEMPORARY_PREFIX: &str = "b";

/// An identifier map as returned by [`relabel`] and [`relabel_with`],
/// from original blank node labels to canonical ones.
pub type C14nIdMap = BTreeMap<String, String>;

/// Return the canonical N-Quads document of `d`, where
/// + blank nodes are canonically [relabelled](relabel) with
///   the [SHA-256](Sha256) hash function and the default [options](C14nOptions);
/// + lines are sorted in codepoint order.
pub fn canonicalize(d: &Dataset) -> Result<String, C14nError> {
    canonicalize_with::<Sha256>(d, &C14nOptions::default())
}

/// Return the canonical N-Quads document of `d`,
/// using the hash function `H` and the given `options`.
///
/// See also [`canonicalize`], [`relabel_with`].
pub fn canonicalize_with<H: HashFunction>(
    d: &Dataset,
    options: &C14nOptions,
) -> Result<String, C14nError> {
    let (relabelled, _) = relabel_with::<H>(d, options)?;
    Ok(to_nquads(&relabelled))
}

/// Write into `w` the [canonical N-Quads document](canonicalize) of `d`.
///
/// See also [`normalize_with`].
pub fn normalize<W: io::Write>(d: &Dataset, w: W) -> Result<(), C14nError> {
    normalize_with::<Sha256, W>(d, w, &C14nOptions::default())
}

/// Write into `w` a canonical N-Quads representation of `d`,
/// where blank nodes are canonically [relabelled](relabel_sha384)
/// with the [SHA-384](Sha384) hash function.
///
/// See also [`normalize_with`].
pub fn normalize_sha384<W: io::Write>(d: &Dataset, w: W) -> Result<(), C14nError> {
    normalize_with::<Sha384, W>(d, w, &C14nOptions::default())
}

/// Write into `w` a canonical N-Quads representation of `d`, where
/// + blank nodes are canonically [relabelled](relabel_with) with
///   the [hash function](HashFunction) `H` and the given `options`,
/// + lines are sorted in codepoint order.
///
/// Nothing is written if canonicalization fails.
///
/// See also [`normalize`].
pub fn normalize_with<H: HashFunction, W: io::Write>(
    d: &Dataset,
    w: W,
    options: &C14nOptions,
) -> Result<(), C14nError> {
    let (relabelled, _) = relabel_with::<H>(d, options)?;
    write_nquads(&relabelled, w)?;
    Ok(())
}

/// Return a [`Dataset`] isomorphic to `d`,
/// paired with a mapping from original blank node labels to canonical ones.
///
/// This calls [`relabel_with`] with
/// the [SHA-256](Sha256) hash function and the default [options](C14nOptions).
///
/// Implements <https://www.w3.org/TR/rdf-canon/#canon-algorithm>
pub fn relabel(d: &Dataset) -> Result<(Dataset, C14nIdMap), C14nError> {
    relabel_with::<Sha256>(d, &C14nOptions::default())
}

/// Return a [`Dataset`] isomorphic to `d`,
/// paired with a mapping from original blank node labels to canonical ones.
///
/// This calls [`relabel_with`] with
/// the [SHA-384](Sha384) hash function and the default [options](C14nOptions).
pub fn relabel_sha384(d: &Dataset) -> Result<(Dataset, C14nIdMap), C14nError> {
    relabel_with::<Sha384>(d, &C14nOptions::default())
}

/// Return a [`Dataset`] isomorphic to `d`,
/// paired with a mapping from original blank node labels to canonical ones.
///
/// The generic parameter `H` determines which [hash function](HashFunction)
/// the algorithm should use internally
/// (RDFC-1.0 uses [SHA-256](Sha256) by default).
///
/// The `options` set the safeguards against dataset poisoning,
/// and whether blank nodes are accepted as predicates.
///
/// Implements <https://www.w3.org/TR/rdf-canon/#canon-algorithm>;
/// unless [`C14nOptions::strict`] is set,
/// that algorithm is extended to support blank nodes in predicate position.
///
/// See also [`relabel`], [`normalize_with`].
pub fn relabel_with<H: HashFunction>(
    d: &Dataset,
    options: &C14nOptions,
) -> Result<(Dataset, C14nIdMap), C14nError> {
    // Step 1, 2
    let mut state = C14nState::<H>::new(d, options)?;
    log::debug!(
        "canonicalizing {} quads with {} blank nodes",
        state.quads.len(),
        state.b2q.len()
    );
    // Step 3
    let mut h2b = BTreeMap::<H::Output, Vec<&str>>::new();
    for (bnid, quads) in &state.b2q {
        let hash = state.hash_first_degree_quads(bnid, quads);
        h2b.entry(hash).or_default().push(*bnid);
        state.b2h.insert(*bnid, hash);
    }
    // Step 4
    // NB: we are relying on the fact that BTreeMap's elements are sorted
    let mut collisions = vec![];
    for (_, bnids) in h2b {
        debug_assert!(!bnids.is_empty());
        if bnids.len() == 1 {
            state.canonical.issue(bnids[0]);
        } else {
            collisions.push(bnids);
        }
    }
    log::debug!(
        "{} blank nodes with a unique first-degree hash, {} groups to disambiguate",
        state.canonical.len(),
        collisions.len()
    );
    // Step 5
    let mut pending = state.b2q.len() - state.canonical.len();
    for identifier_list in collisions {
        let mut hash_path_list = vec![];
        // Step 5.2
        for i in identifier_list {
            if state.canonical.exists(i) {
                continue;
            }
            let mut issuer = IdentifierIssuer::new(TEMPORARY_PREFIX);
            issuer.issue(i);
            hash_path_list.push(state.hash_n_degree_quads(i, issuer)?);
        }
        if hash_path_list.is_empty() {
            continue;
        }
        // Step 5.3
        hash_path_list.sort_by(|a, b| a.0.cmp(&b.0));
        for (_, issuer) in hash_path_list {
            for bnid in issuer.keys() {
                state.canonical.issue(bnid);
            }
        }
        let remaining = state.b2q.len() - state.canonical.len();
        if remaining >= pending {
            return Err(C14nError::NoProgress(remaining));
        }
        pending = remaining;
    }
    // Step 6
    let relabelled = state.relabel()?;
    Ok((relabelled, state.canonical.into_issued()))
}

struct C14nState<'a, H: HashFunction> {
    quads: Vec<QuadRef<'a>>,
    /// blank node label -> indices in `quads` of the quads mentioning it
    b2q: BTreeMap<&'a str, Vec<usize>>,
    /// memoized results of hash 1st degree
    b2h: BTreeMap<&'a str, H::Output>,
    canonical: IdentifierIssuer,
    options: &'a C14nOptions,
}

impl<'a, H: HashFunction> C14nState<'a, H> {
    fn new(d: &'a Dataset, options: &'a C14nOptions) -> Result<Self, C14nError> {
        // quads rendering to the same N-Quads line (e.g. "a" and "a"^^xsd:string)
        // are hashed once, so that the labels match the emitted document
        let mut lines = BTreeSet::new();
        let quads: Vec<_> = d
            .quads()
            .filter(|quad| lines.insert(quad_line(*quad)))
            .collect();
        let mut b2q = BTreeMap::<&'a str, Vec<usize>>::new();
        for (i, quad) in quads.iter().enumerate() {
            match quad.p() {
                Node::Literal { .. } => {
                    return Err(C14nError::LiteralPredicate(
                        quad_line(*quad).trim_end().to_string(),
                    ))
                }
                Node::BlankNode { .. } if options.strict() => {
                    return Err(C14nError::Unsupported(
                        "RDFC-1.0 does not support blank node as predicate".to_string(),
                    ))
                }
                _ => (),
            }
            for bnid in quad.components().filter_map(Node::as_blank_node) {
                let indices = b2q.entry(bnid).or_default();
                // a quad is listed once, even if the blank node occurs in several positions
                if indices.last() != Some(&i) {
                    indices.push(i);
                }
            }
        }
        Ok(C14nState {
            quads,
            b2q,
            b2h: BTreeMap::new(),
            canonical: IdentifierIssuer::new(CANONICAL_PREFIX),
            options,
        })
    }

    /// Implements <https://www.w3.org/TR/rdf-canon/#hash-1d-quads>
    fn hash_first_degree_quads(&self, bnid: &str, indices: &[usize]) -> H::Output {
        let mut nquads: Vec<_> = indices
            .iter()
            .map(|i| {
                let mut line = String::new();
                for node in self.quads[*i].components() {
                    nq_for_hash(node, &mut line, bnid);
                }
                line.push_str(".\n");
                line
            })
            .collect();
        nquads.sort_unstable();
        let mut hasher = H::initialize();
        for line in nquads {
            hasher.update(&line);
        }
        let ret = hasher.finalize();
        debug_assert!({
            log::trace!("hash-first-degree({})\n-> {}", bnid, hex(&ret));
            true
        });
        ret
    }

    /// Implements <https://www.w3.org/TR/rdf-canon/#hash-related-blank-node>
    fn hash_related_bnode(
        &self,
        related: &str,
        quad: QuadRef,
        issuer: &IdentifierIssuer,
        position: &str,
    ) -> H::Output {
        let mut input = H::initialize();
        input.update(position);
        if position != "g" && position != "p" {
            match quad.p().as_iri() {
                Some(iri) => {
                    input.update("<");
                    input.update(iri);
                    input.update(">");
                }
                None => input.update("_:z"),
            }
        }
        if let Some(canon_id) = self.canonical.get_issued(related) {
            input.update("_:");
            input.update(canon_id);
        } else if let Some(temp_id) = issuer.get_issued(related) {
            input.update("_:");
            input.update(temp_id);
        } else {
            // retrieve memoized value of hash_first_degree_quads for this blank node
            debug_assert!(self.b2h.contains_key(related));
            if let Some(h1d) = self.b2h.get(related) {
                input.update(hex(h1d));
            }
        }
        input.finalize()
    }

    /// Implements <https://www.w3.org/TR/rdf-canon/#hash-nd-quads>
    ///
    /// Each nested invocation of the algorithm is a [`Frame`];
    /// they are kept on an explicit stack, so that the nesting depth is only bounded by
    /// [`C14nOptions::depth_factor`], not by the size of the call stack.
    fn hash_n_degree_quads(
        &self,
        identifier: &'a str,
        issuer: IdentifierIssuer,
    ) -> Result<(H::Output, IdentifierIssuer), C14nError> {
        let max_depth = self.options.depth_factor() * self.b2q.len() as f32;
        let mut parents: Vec<Frame<'a, H>> = vec![];
        let mut current = self.new_frame(identifier, issuer);
        let mut returned = None;
        loop {
            match self.step(&mut current, returned.take())? {
                Step::Recurse(related, issuer) => {
                    if (parents.len() + 1) as f32 > max_depth {
                        return Err(C14nError::ToxicGraph(format!(
                            "too many recursions (limit={} per bnode)",
                            self.options.depth_factor()
                        )));
                    }
                    let child = self.new_frame(related, issuer);
                    parents.push(std::mem::replace(&mut current, child));
                }
                Step::Done => {
                    let identifier = current.identifier;
                    let result = current.finish();
                    debug_assert!({
                        log::trace!(
                            "hash-n-degree({}, {})\n-> {}",
                            identifier,
                            parents.len(),
                            hex(&result.0)
                        );
                        true
                    });
                    match parents.pop() {
                        None => return Ok(result),
                        Some(parent) => {
                            current = parent;
                            returned = Some(result);
                        }
                    }
                }
            }
        }
    }

    /// Steps 1 to 4 of Hash N-Degree Quads.
    fn new_frame(&self, identifier: &'a str, issuer: IdentifierIssuer) -> Frame<'a, H> {
        // Step 1
        let mut hn = BTreeMap::<H::Output, Vec<&'a str>>::new();
        // Step 2, 3
        let indices = self.b2q.get(identifier).into_iter().flatten();
        for quad in indices.map(|i| self.quads[*i]) {
            for (component, position) in quad.components().zip(["s", "p", "o", "g"]) {
                if let Some(bnid) = component.as_blank_node() {
                    if bnid == identifier {
                        continue;
                    }
                    let hash = self.hash_related_bnode(bnid, quad, &issuer, position);
                    hn.entry(hash).or_default().push(bnid);
                }
            }
        }
        Frame {
            identifier,
            groups: hn.into_iter(),
            // Step 4
            data_to_hash: H::initialize(),
            issuer,
            search: None,
        }
    }

    /// Step 5 of Hash N-Degree Quads, run until it completes or needs a nested invocation.
    ///
    /// `returned` is the result of the nested invocation requested by the previous step, if any.
    fn step(
        &self,
        frame: &mut Frame<'a, H>,
        mut returned: Option<(H::Output, IdentifierIssuer)>,
    ) -> Result<Step<'a>, C14nError> {
        loop {
            if frame.search.is_none() {
                let Some((related_hash, blank_nodes)) = frame.groups.next() else {
                    return Ok(Step::Done);
                };
                // Step 5.1
                frame.data_to_hash.update(hex(&related_hash));
                if blank_nodes.len() > self.options.permutation_limit() {
                    return Err(C14nError::ToxicGraph(format!(
                        "Too many permutations ({} nodes, limit set to {})",
                        blank_nodes.len(),
                        self.options.permutation_limit(),
                    )));
                }
                frame.search = Some(GroupSearch {
                    permutator: Permutator::new(blank_nodes),
                    chosen_path: String::new(),
                    chosen_issuer: None,
                    candidate: None,
                });
            }
            let Some(search) = frame.search.as_mut() else {
                continue;
            };

            if let Some(cand) = search.candidate.as_mut() {
                // Step 5.4.5, resumed after a nested invocation
                if let Some((hash, mut issuer)) = returned.take() {
                    if let Some(related) = cand.pending.take() {
                        let (id, _) = issuer.issue(related);
                        cand.path.push_str("_:");
                        cand.path.push_str(id);
                        cand.path.push('<');
                        cand.path.push_str(&hex(&hash));
                        cand.path.push('>');
                    }
                    cand.issuer = issuer;
                    if beaten(&search.chosen_path, &cand.path) {
                        search.candidate = None;
                        continue; // skip to the next permutation
                    }
                }
                if let Some(related) = cand.recursion.next() {
                    cand.pending = Some(related);
                    let issuer = std::mem::take(&mut cand.issuer);
                    return Ok(Step::Recurse(related, issuer));
                }
                // Step 5.4.6
                if let Some(cand) = search.candidate.take() {
                    if search.chosen_path.is_empty() || cand.path < search.chosen_path {
                        search.chosen_path = cand.path;
                        search.chosen_issuer = Some(cand.issuer);
                    }
                }
                continue;
            }

            match search.permutator.next() {
                Some(permutation) => {
                    // Step 5.4.1 to 5.4.4
                    let mut issuer_copy = frame.issuer.clone();
                    let mut path = String::new();
                    let mut recursion_list = vec![];
                    let mut skipped = false;
                    for related in permutation {
                        if let Some(canon_id) = self.canonical.get_issued(related) {
                            path.push_str("_:");
                            path.push_str(canon_id);
                        } else {
                            let (id, new) = issuer_copy.issue(related);
                            path.push_str("_:");
                            path.push_str(id);
                            if new {
                                recursion_list.push(related);
                            }
                        }
                        if beaten(&search.chosen_path, &path) {
                            skipped = true;
                            break;
                        }
                    }
                    if !skipped {
                        search.candidate = Some(Candidate {
                            path,
                            issuer: issuer_copy,
                            recursion: recursion_list.into_iter(),
                            pending: None,
                        });
                    }
                }
                None => {
                    // Step 5.5, 5.6
                    if let Some(search) = frame.search.take() {
                        frame.data_to_hash.update(&search.chosen_path);
                        if let Some(chosen_issuer) = search.chosen_issuer {
                            frame.issuer = chosen_issuer;
                        }
                    }
                }
            }
        }
    }

    /// Implements step 6 of <https://www.w3.org/TR/rdf-canon/#canon-algorithm>
    fn relabel(&self) -> Result<Dataset, C14nError> {
        let mut relabelled = Dataset::new();
        for quad in &self.quads {
            let ([s, p, o], g) = quad.spog();
            let triple = Triple::new(
                self.relabel_node(s)?,
                self.relabel_node(p)?,
                self.relabel_node(o)?,
            );
            let g = g.map(|g| self.relabel_node(g)).transpose()?;
            relabelled.insert(g, triple);
        }
        Ok(relabelled)
    }

    fn relabel_node(&self, node: &Node) -> Result<Node, C14nError> {
        match node.as_blank_node() {
            Some(bnid) => self
                .canonical
                .get_issued(bnid)
                .map(Node::blank)
                .ok_or_else(|| C14nError::MissingCanonicalId(bnid.to_string())),
            None => Ok(node.clone()),
        }
    }
}

/// One invocation of Hash N-Degree Quads, suspended while a nested invocation runs.
struct Frame<'a, H: HashFunction> {
    identifier: &'a str,
    /// related blank nodes, grouped by their related hash, not yet processed
    groups: btree_map::IntoIter<H::Output, Vec<&'a str>>,
    data_to_hash: H,
    issuer: IdentifierIssuer,
    /// the group currently being processed
    search: Option<GroupSearch<'a>>,
}

impl<H: HashFunction> Frame<'_, H> {
    fn finish(self) -> (H::Output, IdentifierIssuer) {
        (self.data_to_hash.finalize(), self.issuer)
    }
}

/// Exploration of the permutations of a group of related blank nodes.
struct GroupSearch<'a> {
    permutator: Permutator<&'a str>,
    chosen_path: String,
    chosen_issuer: Option<IdentifierIssuer>,
    candidate: Option<Candidate<'a>>,
}

/// The path being built for one permutation.
struct Candidate<'a> {
    path: String,
    issuer: IdentifierIssuer,
    recursion: std::vec::IntoIter<&'a str>,
    /// the related blank node whose nested invocation is running
    pending: Option<&'a str>,
}

enum Step<'a> {
    /// Hash N-Degree Quads must be invoked on this blank node with this issuer
    Recurse(&'a str, IdentifierIssuer),
    /// The frame has completed
    Done,
}

/// Whether `path` can no longer become smaller than the `chosen` path.
fn beaten(chosen: &str, path: &str) -> bool {
    !chosen.is_empty() && path.len() >= chosen.len() && path > chosen
}

fn nq_for_hash(node: &Node, buffer: &mut String, ref_bnid: &str) {
    match node.as_blank_node() {
        Some(bnid) if bnid == ref_bnid => buffer.push_str("_:a"),
        Some(_) => buffer.push_str("_:z"),
        None => write_term(node, buffer),
    }
    buffer.push(' ');
}

#[cfg(test)]
mod test;
