use ldcanon_api::Dataset;
use ldcanon_c14n::hash::Sha256;
use ldcanon_c14n::rdfc10::canonicalize_with;
use ldcanon_c14n::{C14nError, C14nOptions};

/// Computes whether two datasets are isomorphic.
///
/// This calls [`isomorphic_datasets_with`] with the default [options](C14nOptions).
///
/// # Error
/// A [`C14nError`] is returned if either dataset can not be canonicalized,
/// for example if it is deemed toxic by the safeguards of the canonicalization algorithm.
pub fn isomorphic_datasets(d1: &Dataset, d2: &Dataset) -> Result<bool, C14nError> {
    isomorphic_datasets_with(d1, d2, &C14nOptions::default())
}

/// Computes whether two datasets are isomorphic,
/// canonicalizing them with the given `options`.
pub fn isomorphic_datasets_with(
    d1: &Dataset,
    d2: &Dataset,
    options: &C14nOptions,
) -> Result<bool, C14nError> {
    // Datasets must have the same size
    if d1.len() != d2.len() {
        return Ok(false);
    }
    let c1 = canonicalize_with::<Sha256>(d1, options)?;
    let c2 = canonicalize_with::<Sha256>(d2, options)?;
    Ok(c1 == c2)
}
