//! I define [`Permutator`],
//! which enumerates the permutations of a list in lexicographic order.
//!
//! The N-degree hash algorithm of RDFC-1.0 only needs *all* permutations,
//! but a fixed order makes traces reproducible across runs.

/// Iterator over all the permutations of a list of items,
/// in lexicographic order of the items.
///
/// The first permutation is the sorted list, the last one is the reversed sorted list.
/// An empty list, as well as a single-item list, has exactly one permutation.
#[derive(Clone, Debug)]
pub struct Permutator<T> {
    current: Vec<T>,
    done: bool,
}

impl<T: Ord + Clone> Permutator<T> {
    /// Build a permutator over `items`.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut current: Vec<T> = items.into_iter().collect();
        current.sort();
        Permutator {
            current,
            done: false,
        }
    }

    /// Whether [`next`](Iterator::next) will yield another permutation.
    pub fn has_next(&self) -> bool {
        !self.done
    }

    /// Number of items being permuted.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Whether the list being permuted is empty.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

impl<T: Ord + Clone> Iterator for Permutator<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let ret = self.current.clone();
        self.done = !next_permutation(&mut self.current);
        Some(ret)
    }
}

/// Rearrange `items` into the lexicographically next permutation.
///
/// Return `false`, leaving `items` unchanged, if they are in descending order.
fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    // find the longest non-increasing suffix
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    // the suffix is non-empty and contains at least one item greater than the pivot
    let Some(successor) = items.iter().rposition(|x| *x > items[pivot]) else {
        return false;
    };
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}
