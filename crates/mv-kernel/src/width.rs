//! Element and accumulator width contract.
//!
//! Elements are W-bit signed integers (W = 16, carried by the smallest
//! native type that fits). The accumulator must hold the sum of C products
//! of two W-bit values without intermediate overflow, so its required width
//! is `2*W + ceil(log2(C))` bits; `Acc` is the smallest native type at
//! least that wide for the shapes this crate ships.

/// Element type: a W-bit signed integer.
pub type Elem = i16;

/// Accumulator type for multiply-accumulate chains.
pub type Acc = i64;

/// Element width W in bits.
pub const ELEM_BITS: u32 = Elem::BITS;

/// Smallest exponent e with `2^e >= n`, i.e. ceil(log2(n)). Returns 0 for
/// n <= 1.
pub const fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        (n - 1).ilog2() + 1
    }
}

/// Minimum accumulator width, in bits, for summing `c` products of two
/// W-bit values. Must be re-derived whenever `c` or W changes.
pub const fn acc_bits(c: usize) -> u32 {
    2 * ELEM_BITS + ceil_log2(c)
}

/// Narrow a wide accumulator value to the element width.
///
/// Keeps the low W bits and sign-extends them, which is exactly
/// two's-complement wraparound: `((v + 2^(W-1)) mod 2^W) - 2^(W-1)`.
/// No saturation. This is the single truncation point of the system; the
/// kernel applies it once, to the final sum of each output element.
#[inline]
pub const fn narrow(v: Acc) -> Elem {
    let mask: Acc = (1 << ELEM_BITS) - 1;
    let sign: Acc = 1 << (ELEM_BITS - 1);
    (((v & mask) ^ sign) - sign) as Elem
}
