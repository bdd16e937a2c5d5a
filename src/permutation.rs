use crate::Permutation;

/// Find all permutations of `0..n` in lexicographic order.
///
/// `n = 0` yields exactly one empty permutation.
pub fn all_permutations(n: usize) -> Vec<Permutation> {
    let mut all = Vec::new();
    for first in 0..n.max(1) {
        for_each_permutation_with_prefix(n, first, |perm| all.push(perm.to_vec()));
        if n == 0 {
            break;
        }
    }
    all
}

/// Visit every permutation of `0..n` whose first element is `first`.
///
/// The canonical search fans out over the first vertex, so each worker walks
/// one of these subtrees. For `n = 0` the `first` argument is ignored and the
/// empty permutation is visited once.
pub fn for_each_permutation_with_prefix<F>(n: usize, first: usize, mut visit: F)
where
    F: FnMut(&[usize]),
{
    if n == 0 {
        visit(&[]);
        return;
    }

    let mut current = vec![0; n];
    let mut used = vec![false; n];
    current[0] = first;
    used[first] = true;

    backtrack(1, n, &mut current, &mut used, &mut visit);
}

/// Recursive backtracking over the unused vertices
fn backtrack<F>(
    position: usize,
    n: usize,
    current: &mut [usize],
    used: &mut [bool],
    visit: &mut F,
) where
    F: FnMut(&[usize]),
{
    if position == n {
        visit(current);
        return;
    }

    for v in 0..n {
        if !used[v] {
            current[position] = v;
            used[v] = true;
            backtrack(position + 1, n, current, used, visit);
            used[v] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::factorial;

    #[test]
    fn test_empty_permutation() {
        assert_eq!(all_permutations(0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_permutation_count_and_order() {
        let perms = all_permutations(3);
        assert_eq!(perms.len(), factorial(3));
        assert_eq!(perms[0], vec![0, 1, 2]);
        assert_eq!(perms[1], vec![0, 2, 1]);
        assert_eq!(perms[5], vec![2, 1, 0]);
    }

    #[test]
    fn test_prefix_subtree() {
        let mut seen = Vec::new();
        for_each_permutation_with_prefix(3, 1, |perm| seen.push(perm.to_vec()));
        assert_eq!(seen, vec![vec![1, 0, 2], vec![1, 2, 0]]);
    }
}
