/// Calculate number of combinations C(n, k) without overflow
pub fn num_combinations(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    if k == 0 || k == n {
        return 1;
    }

    let k = k.min(n - k); // C(n,k) = C(n,n-k)
    let mut result = 1usize;

    for i in 0..k {
        result = result.saturating_mul(n - i) / (i + 1);
    }

    result
}

/// n!, saturating at `usize::MAX`
pub fn factorial(n: usize) -> usize {
    (1..=n).fold(1usize, |acc, i| acc.saturating_mul(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(4), 24);
        assert_eq!(factorial(40), usize::MAX);
    }
}
