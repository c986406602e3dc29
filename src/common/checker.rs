//! This file defines some functions that checks some pre-conditions
//! E.g., probabilities of a leaf

const SIMPLEX_TOLERANCE: f64 = 1e-9;


/// Check whether the given weights form a probability distribution.
#[inline(always)]
pub(crate) fn check_distribution<'a, I>(weights: I)
    where I: IntoIterator<Item = &'a f64>,
{
    let mut sum = 0f64;
    for w in weights {
        assert!(
            (0f64..=1f64).contains(w),
            "probability {w} is out of [0, 1]"
        );
        sum += w;
    }
    assert!(
        (sum - 1f64).abs() < SIMPLEX_TOLERANCE,
        "probabilities sum to {sum}, not 1"
    );
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_distribution() {
        check_distribution(&[0.25, 0.25, 0.5]);
    }

    #[test]
    #[should_panic(expected = "sum to")]
    fn test_distribution_must_sum_to_one() {
        check_distribution(&[0.25, 0.25]);
    }

    #[test]
    #[should_panic(expected = "out of [0, 1]")]
    fn test_negative_weight() {
        check_distribution(&[1.5, -0.5]);
    }
}
