use ldcanon_api::{Dataset, Graph};
use ldcanon_c14n::C14nError;

/// Computes whether two graphs are isomorphic.
///
/// Each graph is considered as the default graph of a dataset;
/// see [`isomorphic_datasets`](super::isomorphic_datasets).
pub fn isomorphic_graphs(g1: &Graph, g2: &Graph) -> Result<bool, C14nError> {
    super::isomorphic_datasets(&as_dataset(g1), &as_dataset(g2))
}

fn as_dataset(g: &Graph) -> Dataset {
    let mut d = Dataset::new();
    for t in g {
        d.insert(None, t.clone());
    }
    d
}
