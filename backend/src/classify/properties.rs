//! Pure numeric properties over the full `i64` range.

use crate::models::classification::Property;

/// Trial division by every `i` with `i * i <= n`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    // i <= n / i keeps i * i from overflowing
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// True when `n > 1` equals the sum of its proper positive divisors.
///
/// Divisors are collected in pairs `(i, n / i)` up to `sqrt(n)`, which gives the
/// same sum as scanning `1..n`. The scan stops as soon as the sum passes `n`.
pub fn is_perfect(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut sum = 1i128;
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            sum += i128::from(i);
            let pair = n / i;
            if pair != i {
                sum += i128::from(pair);
            }
            if sum > i128::from(n) {
                return false;
            }
        }
        i += 1;
    }
    sum == i128::from(n)
}

/// True when `n >= 0` equals the sum of its digits each raised to the digit count.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let digits = decimal_digits(n.unsigned_abs());
    let power = digits.len() as u32;
    let sum: u128 = digits.iter().map(|&d| u128::from(d).pow(power)).sum();
    sum == n as u128
}

pub fn parity(n: i64) -> Property {
    if n % 2 == 0 {
        Property::Even
    } else {
        Property::Odd
    }
}

/// Sum of the decimal digits of `|n|`.
pub fn digit_sum(n: i64) -> u32 {
    decimal_digits(n.unsigned_abs())
        .into_iter()
        .map(u32::from)
        .sum()
}

/// Armstrong tag first (when it applies), then parity.
pub fn properties(n: i64) -> Vec<Property> {
    let mut props = Vec::with_capacity(2);
    if is_armstrong(n) {
        props.push(Property::Armstrong);
    }
    props.push(parity(n));
    props
}

fn decimal_digits(n: u64) -> Vec<u8> {
    n.to_string().bytes().map(|b| b - b'0').collect()
}
