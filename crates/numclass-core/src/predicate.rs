//! Number family predicates.
//!
//! Every predicate is total over `i64`: it never panics and never overflows,
//! whatever the input. Divisor searches use the exact integer square root as
//! their upper bound.

/// Returns `true` if `n` is a prime number.
///
/// Values less than or equal to 1 are never prime. Larger values are checked
/// by trial division with every integer from 2 up to `isqrt(n)`.
///
/// # Examples
///
/// ```
/// use numclass_core::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(7919));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-7));
/// assert!(!is_prime(7920));
/// ```
#[must_use]
pub fn is_prime(n: i64) -> bool {
    let Some(n) = positive_above_one(n) else {
        return false;
    };
    (2..=n.isqrt()).all(|i| n % i != 0)
}

/// Returns `true` if `n` equals the sum of its proper positive divisors.
///
/// Values less than or equal to 1 are never perfect, including 1 itself. The
/// divisor 1 is counted up front and the remaining divisors are collected in
/// pairs `(i, n / i)` for `i` up to `isqrt(n)`, counting a square root once.
///
/// # Examples
///
/// ```
/// use numclass_core::is_perfect;
///
/// assert!(is_perfect(6));
/// assert!(is_perfect(8128));
/// assert!(!is_perfect(1));
/// assert!(!is_perfect(12));
/// ```
#[must_use]
pub fn is_perfect(n: i64) -> bool {
    let Some(n) = positive_above_one(n) else {
        return false;
    };

    let mut divisor_sum = 1_u64;
    for i in 2..=n.isqrt() {
        if n % i != 0 {
            continue;
        }
        let pair = n / i;
        divisor_sum += i;
        if i != pair {
            divisor_sum += pair;
        }
        // Abundant. The accumulator stays below 2n, well inside `u64`.
        if divisor_sum > n {
            return false;
        }
    }
    divisor_sum == n
}

/// Returns `true` if `n` is an Armstrong (narcissistic) number.
///
/// An Armstrong number equals the sum of its decimal digits, each raised to
/// the power of the digit count. Negative values are never Armstrong numbers;
/// every single-digit value `0..=9` is one.
///
/// # Examples
///
/// ```
/// use numclass_core::is_armstrong;
///
/// assert!(is_armstrong(0));
/// assert!(is_armstrong(153));
/// assert!(is_armstrong(9_926_315));
/// assert!(!is_armstrong(10));
/// assert!(!is_armstrong(-5));
/// ```
#[must_use]
pub fn is_armstrong(n: i64) -> bool {
    let Ok(n) = u64::try_from(n) else {
        return false;
    };

    let digits = n.to_string();
    // An `i64` has at most 19 digits.
    #[expect(clippy::cast_possible_truncation)]
    let exponent = digits.len() as u32;
    // 19 * 9^19 does not fit in a `u64`.
    let sum: u128 = digits
        .bytes()
        .map(|b| u128::from(b - b'0').pow(exponent))
        .sum();
    sum == u128::from(n)
}

fn positive_above_one(n: i64) -> Option<u64> {
    u64::try_from(n).ok().filter(|&n| n > 1)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn naive_is_prime(n: i64) -> bool {
        n > 1 && (1..=n).filter(|d| n % d == 0).count() == 2
    }

    fn naive_divisor_sum(n: i64) -> i64 {
        (1..n).filter(|d| n % d == 0).sum()
    }

    #[test]
    fn test_is_prime_known_values() {
        for p in [2, 3, 5, 7, 11, 97, 7919] {
            assert!(is_prime(p), "{p} should be prime");
        }
        for c in [4, 6, 8, 9, 100, 7920] {
            assert!(!is_prime(c), "{c} should not be prime");
        }
    }

    #[test]
    fn test_is_prime_at_most_one() {
        for n in [1, 0, -1, -2, -7, i64::MIN] {
            assert!(!is_prime(n), "{n} should not be prime");
        }
    }

    #[test]
    fn test_is_prime_squares_of_primes() {
        // The loop bound must include isqrt(n) itself.
        for p in [2_i64, 3, 5, 7, 97, 7919] {
            assert!(!is_prime(p * p), "{} should not be prime", p * p);
        }
    }

    #[test]
    fn test_is_prime_large_values() {
        // 2^31 - 1 is a Mersenne prime, 2^31 + 1 is divisible by 3.
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(2_147_483_649));
        assert!(!is_prime(i64::MAX));
    }

    #[test]
    fn test_is_perfect_known_values() {
        for n in [6, 28, 496, 8128, 33_550_336] {
            assert!(is_perfect(n), "{n} should be perfect");
        }
        for n in [5, 12, 100, 2, 4, 8127] {
            assert!(!is_perfect(n), "{n} should not be perfect");
        }
    }

    #[test]
    fn test_is_perfect_at_most_one() {
        // 1 is excluded by its guard, not by the divisor sum.
        for n in [1, 0, -6, -28, i64::MIN] {
            assert!(!is_perfect(n), "{n} should not be perfect");
        }
    }

    #[test]
    fn test_is_perfect_square_divisor_counted_once() {
        // 16: 1 + 2 + 4 + 8 = 15; counting 4 twice would give 19.
        assert!(!is_perfect(16));
        // 25: 1 + 5 = 6.
        assert!(!is_perfect(25));
    }

    #[test]
    fn test_is_perfect_abundant_stops_early() {
        assert!(!is_perfect(963_761_198_400));
        assert!(!is_perfect(i64::MAX - 7));
    }

    #[test]
    fn test_is_armstrong_known_values() {
        for n in 0..=9 {
            assert!(is_armstrong(n), "{n} should be an Armstrong number");
        }
        for n in [153, 370, 371, 407, 1634, 9474, 9_926_315] {
            assert!(is_armstrong(n), "{n} should be an Armstrong number");
        }
        for n in [10, 123, 100, 9475, -5, -153] {
            assert!(!is_armstrong(n), "{n} should not be an Armstrong number");
        }
    }

    #[test]
    fn test_is_armstrong_extreme_values() {
        assert!(!is_armstrong(i64::MAX));
        assert!(!is_armstrong(i64::MIN));
        // Largest 19-digit Armstrong number.
        assert!(is_armstrong(4_929_273_885_928_088_826));
    }

    #[test]
    fn test_is_perfect_matches_naive_divisor_sum() {
        for n in 2..10_000 {
            assert_eq!(is_perfect(n), naive_divisor_sum(n) == n, "n = {n}");
        }
    }

    proptest! {
        #[test]
        fn prop_is_prime_matches_naive(n in -100_i64..5_000) {
            prop_assert_eq!(is_prime(n), naive_is_prime(n));
        }

        #[test]
        fn prop_negative_is_never_armstrong(n in i64::MIN..0) {
            prop_assert!(!is_armstrong(n));
        }

        #[test]
        fn prop_at_most_one_is_neither_prime_nor_perfect(n in i64::MIN..=1) {
            prop_assert!(!is_prime(n));
            prop_assert!(!is_perfect(n));
        }

        #[test]
        fn prop_is_armstrong_is_total(n in any::<i64>()) {
            let _ = is_armstrong(n);
        }

        #[test]
        fn prop_prime_product_is_composite(a in 2_i64..1_000, b in 2_i64..1_000) {
            prop_assert!(!is_prime(a * b));
        }
    }
}
