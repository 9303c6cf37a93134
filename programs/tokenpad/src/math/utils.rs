use spl_math::uint::U256;

/// Checked arithmetic chaining over `Option<u128>`: a sequence of fallible
/// steps reads as one expression and any overflow collapses to `None`.
pub trait CheckedMath {
    fn checked_add(self, other: u128) -> Option<u128>;
    fn checked_sub(self, other: u128) -> Option<u128>;
    fn checked_mul(self, other: u128) -> Option<u128>;
    fn checked_div(self, other: u128) -> Option<u128>;
}

impl CheckedMath for Option<u128> {
    fn checked_add(self, other: u128) -> Option<u128> {
        self.and_then(|value| value.checked_add(other))
    }

    fn checked_sub(self, other: u128) -> Option<u128> {
        self.and_then(|value| value.checked_sub(other))
    }

    fn checked_mul(self, other: u128) -> Option<u128> {
        self.and_then(|value| value.checked_mul(other))
    }

    fn checked_div(self, other: u128) -> Option<u128> {
        self.and_then(|value| value.checked_div(other))
    }
}

/// Same chaining for `Option<U256>` intermediates.
pub trait CheckedMath256 {
    fn checked_add(self, other: U256) -> Option<U256>;
    fn checked_sub(self, other: U256) -> Option<U256>;
    fn checked_mul(self, other: U256) -> Option<U256>;
    fn checked_div(self, other: U256) -> Option<U256>;
}

impl CheckedMath256 for Option<U256> {
    fn checked_add(self, other: U256) -> Option<U256> {
        self.and_then(|value| value.checked_add(other))
    }

    fn checked_sub(self, other: U256) -> Option<U256> {
        self.and_then(|value| value.checked_sub(other))
    }

    fn checked_mul(self, other: U256) -> Option<U256> {
        self.and_then(|value| value.checked_mul(other))
    }

    fn checked_div(self, other: U256) -> Option<U256> {
        self.and_then(|value| value.checked_div(other))
    }
}

/// `(a * b) / c` with the product widened to 256 bits. Floor division,
/// `None` when `c` is zero or the result does not fit `u128`.
pub fn multiply_divide(a: u128, b: u128, c: u128) -> Option<u128> {
    let result = U256::from(a)
        .checked_mul(U256::from(b))
        .checked_div(U256::from(c))?;

    if result > U256::from(u128::MAX) {
        return None;
    }

    Some(result.as_u128())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_ops_short_circuit_on_overflow() {
        let ok = u128::MAX.checked_div(2).checked_mul(2).checked_add(1);
        assert_eq!(ok, Some(u128::MAX));

        let overflow = u128::MAX.checked_mul(2).checked_add(1);
        assert_eq!(overflow, None);

        let underflow = 1u128.checked_sub(1).checked_sub(1);
        assert_eq!(underflow, None);
    }

    #[test]
    fn multiply_divide_survives_wide_products() {
        // u128::MAX * 4 / 4 overflows naive u128 math but not the widened path
        assert_eq!(multiply_divide(u128::MAX, 4, 4), Some(u128::MAX));
        assert_eq!(multiply_divide(10, 7, 2), Some(35));
        // floor division
        assert_eq!(multiply_divide(10, 7, 4), Some(17));
    }

    #[test]
    fn multiply_divide_rejects_bad_inputs() {
        assert_eq!(multiply_divide(1, 1, 0), None);
        assert_eq!(multiply_divide(u128::MAX, u128::MAX, 1), None);
    }
}
