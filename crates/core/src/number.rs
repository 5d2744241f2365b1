// crates/core/src/number.rs
use num_traits::PrimInt;

/// Whether `number` has exactly two positive divisors.
///
/// Values `<= 1`, negatives included, are never prime and return before any
/// divisor is tried.
pub fn is_prime<N: PrimInt>(number: N) -> bool {
    if number <= N::one() {
        return false;
    }
    divisor_count(number) == 2
}

/// Positive divisors of `number`, counted in pairs `(i, number / i)` up to
/// the square root. Stops early once more than two have been found.
fn divisor_count<N: PrimInt>(number: N) -> usize {
    let mut divisors = 0;
    let mut candidate = N::one();
    // `candidate <= number / candidate` avoids overflowing `candidate * candidate`
    while candidate <= number / candidate {
        if number % candidate == N::zero() {
            divisors += if candidate == number / candidate { 1 } else { 2 };
            if divisors > 2 {
                break;
            }
        }
        candidate = candidate + N::one();
    }
    divisors
}
