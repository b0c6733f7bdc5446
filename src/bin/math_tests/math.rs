//! The functions under test.

/// Computes `number!`, treating everything at or below 1 as having factorial 1.
pub fn factorial(number: i64) -> i64 {
    (2..=number).product()
}

/// Checks whether `number` is prime by trial division.
pub fn is_prime(number: i64) -> bool {
    number > 1 && (2..number).all(|i| number % i != 0)
}

/// Counts the primes strictly below `end`.
pub fn count_primes(end: i64) -> i64 {
    (1..end).filter(|&i| is_prime(i)).count() as i64
}
