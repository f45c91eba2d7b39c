/// Number of entries in the packed upper triangle of a `k x k` matrix,
/// or `None` if that count does not fit in a `usize`
pub fn checked_triangular_number(k: usize) -> Option<usize> {
    // halve the even factor first so k(k+1) is never formed
    if k % 2 == 0 {
        (k / 2).checked_mul(k + 1)
    } else {
        k.checked_mul(k / 2 + 1)
    }
}

/// Number of entries in the packed upper triangle of a `k x k` matrix.
/// Saturates at `usize::MAX`.
pub fn triangular_number(k: usize) -> usize {
    checked_triangular_number(k).unwrap_or(usize::MAX)
}

#[test]
fn test_triangular_number() {
    assert_eq!(triangular_number(0), 0);
    assert_eq!(triangular_number(1), 1);
    assert_eq!(triangular_number(3), 6);
    assert_eq!(triangular_number(10), 55);
}

#[test]
fn test_triangular_number_overflow() {
    assert_eq!(checked_triangular_number(usize::MAX), None);
    assert_eq!(checked_triangular_number(1 << (usize::BITS / 2 + 1)), None);
    assert_eq!(triangular_number(usize::MAX), usize::MAX);

    // largest order whose packed triangle still fits
    let k = (1usize << (usize::BITS / 2)) - 1;
    assert_eq!(checked_triangular_number(k), Some((k / 2 + 1) * k));
}
