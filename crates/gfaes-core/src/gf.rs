//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.

/// Low byte of the AES reduction polynomial.
pub const REDUCTION: u8 = 0x1b;

/// Field addition (XOR).
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplies `a` by the field element `x`.
#[inline]
pub fn mult_by_x(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies `a` by `x^n`.
#[inline]
pub fn mult_by_x_times(a: u8, n: u32) -> u8 {
    (0..n).fold(a, |acc, _| mult_by_x(acc))
}

/// Full field multiplication.
///
/// Every set bit `i` of `b` contributes `a * x^i`; the contributions are summed
/// with [`add`]. Each power is derived from the previous one, so the whole
/// product costs eight doublings at most.
pub fn mult(a: u8, b: u8) -> u8 {
    let mut product = 0u8;
    let mut power = a;
    for bit in 0..8 {
        if (b >> bit) & 1 != 0 {
            product = add(product, power);
        }
        power = mult_by_x(power);
    }
    product
}
