//! Decimal digit arithmetic.

/// Product of the decimal digits of `n` minus their sum.
///
/// Zero has no digits to speak of and yields `0`. The result is an `i64`
/// because the digit product of a `u32` can exceed `i32::MAX` (ten nines
/// multiply out to `9^10`).
#[must_use]
pub fn subtract_product_and_sum(n: u32) -> i64 {
    if n == 0 {
        return 0;
    }

    let mut n = i64::from(n);
    let mut sum = 0;
    let mut product = 1;
    while n != 0 {
        let digit = n % 10;
        sum += digit;
        product *= digit;
        n /= 10;
    }
    product - sum
}
