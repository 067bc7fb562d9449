//! Primitive 17.14 operations on the plain `i32` encoding.
//!
//! A fixed-point operand `x`/`y` holds `real * F`.
//! A mixed operand `n` is an unscaled integer.
//! Overflow wraps like native 32 bit arithmetic.

/// Number of fractional bits.
pub const SHIFT: u32 = 14;

/// Scale factor. `1.0` is encoded as `F`.
pub const F: i32 = 1 << SHIFT;

#[inline(always)]
pub const fn int_to_fp(n: i32) -> i32 {
    n.wrapping_mul(F)
}

/// Truncates toward zero.
#[inline(always)]
pub const fn fp_to_int(x: i32) -> i32 {
    x / F
}

/// Rounds to nearest. Ties round away from zero.
#[inline(always)]
pub const fn fp_to_int_round(x: i32) -> i32 {
    if x >= 0 {
        x.wrapping_add(F / 2) / F
    } else {
        x.wrapping_sub(F / 2) / F
    }
}

#[inline(always)]
pub const fn add_fp(x: i32, y: i32) -> i32 {
    x.wrapping_add(y)
}

#[inline(always)]
pub const fn add_mixed(x: i32, n: i32) -> i32 {
    x.wrapping_add(int_to_fp(n))
}

#[inline(always)]
pub const fn sub_fp(x: i32, y: i32) -> i32 {
    x.wrapping_sub(y)
}

#[inline(always)]
pub const fn sub_mixed(x: i32, n: i32) -> i32 {
    x.wrapping_sub(int_to_fp(n))
}

#[inline(always)]
pub const fn mult_fp(x: i32, y: i32) -> i32 {
    // The product is scaled by F^2. Use 64 bit to hold it.
    ((x as i64 * y as i64) / F as i64) as i32
}

#[inline(always)]
pub const fn mult_mixed(x: i32, n: i32) -> i32 {
    x.wrapping_mul(n)
}

/// Panics if `y` is zero.
#[inline(always)]
pub const fn div_fp(x: i32, y: i32) -> i32 {
    debug_assert!(y != 0, "fixed-point division by zero");
    // x is already scaled. Scaling it again needs 64 bit.
    ((x as i64 * F as i64) / y as i64) as i32
}

/// Panics if `n` is zero.
#[inline(always)]
pub const fn div_mixed(x: i32, n: i32) -> i32 {
    debug_assert!(n != 0, "fixed-point division by zero");
    x.wrapping_div(n)
}


// vim: ts=4 sw=4 expandtab
