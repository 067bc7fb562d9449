use crate::raw::{
    self, add_fp, add_mixed, div_fp, div_mixed, fp_to_int, fp_to_int_round, int_to_fp, mult_fp,
    mult_mixed, sub_fp, sub_mixed,
};

/// Signed 17.14 fixed-point number.
///
/// The distinction between fixed-point and plain integer values is carried by
/// the type. The raw encoding is only reachable through [`Fixpt::from_raw`]
/// and [`Fixpt::to_raw`].
///
/// Arithmetic wraps on overflow. Division by zero panics,
/// see [`Fixpt::checked_div`] for a non-panicking variant.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[repr(transparent)]
pub struct Fixpt(i32);

/// Construct a [`Fixpt`] from an integer or from a fraction.
///
/// `fixpt!(3)` is `3.0` and `fixpt!(59 / 60)` is `59/60`.
#[macro_export]
macro_rules! fixpt {
    ($numerator:literal / $denominator:literal) => {
        $crate::Fixpt::from_fraction($numerator, $denominator)
    };
    ($numerator:literal / $denominator:ident) => {
        $crate::Fixpt::from_fraction($numerator, $denominator)
    };
    ($numerator:ident / $denominator:literal) => {
        $crate::Fixpt::from_fraction($numerator, $denominator)
    };
    ($numerator:ident / $denominator:ident) => {
        $crate::Fixpt::from_fraction($numerator, $denominator)
    };
    ($numerator:literal) => {
        $crate::Fixpt::from_int($numerator)
    };
    ($numerator:ident) => {
        $crate::Fixpt::from_int($numerator)
    };
}

#[allow(clippy::should_implement_trait)]
impl Fixpt {
    pub const SHIFT: u32 = raw::SHIFT;
    pub const F: i32 = raw::F;

    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(Self::F);
    pub const MIN: Self = Self(i32::MIN);
    pub const MAX: Self = Self(i32::MAX);

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> i32 {
        self.0
    }

    pub const fn from_int(int: i32) -> Self {
        Self(int_to_fp(int))
    }

    /// `numerator / denominator`, truncated to the fixed-point resolution.
    pub const fn from_fraction(numerator: i32, denominator: i32) -> Self {
        Self::from_int(numerator).div_int(denominator)
    }

    /// Truncates toward zero.
    pub const fn to_int(self) -> i32 {
        fp_to_int(self.0)
    }

    /// Rounds to the nearest integer. Ties round away from zero.
    pub const fn to_int_round(self) -> i32 {
        fp_to_int_round(self.0)
    }

    pub const fn add(self, other: Self) -> Self {
        Self(add_fp(self.0, other.0))
    }

    pub const fn add_int(self, int: i32) -> Self {
        Self(add_mixed(self.0, int))
    }

    pub const fn sub(self, other: Self) -> Self {
        Self(sub_fp(self.0, other.0))
    }

    pub const fn sub_int(self, int: i32) -> Self {
        Self(sub_mixed(self.0, int))
    }

    pub const fn mul(self, other: Self) -> Self {
        Self(mult_fp(self.0, other.0))
    }

    pub const fn mul_int(self, int: i32) -> Self {
        Self(mult_mixed(self.0, int))
    }

    /// Panics if `other` is zero.
    pub const fn div(self, other: Self) -> Self {
        Self(div_fp(self.0, other.0))
    }

    /// Panics if `int` is zero.
    pub const fn div_int(self, int: i32) -> Self {
        Self(div_mixed(self.0, int))
    }

    pub const fn checked_div(self, other: Self) -> Option<Self> {
        if other.0 == 0 {
            None
        } else {
            Some(self.div(other))
        }
    }

    pub const fn checked_div_int(self, int: i32) -> Option<Self> {
        if int == 0 {
            None
        } else {
            Some(self.div_int(int))
        }
    }

    pub const fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    pub const fn abs(self) -> Self {
        if self.0 < 0 { self.neg() } else { self }
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl From<u8> for Fixpt {
    fn from(value: u8) -> Self {
        Self::from_int(value.into())
    }
}

impl From<i8> for Fixpt {
    fn from(value: i8) -> Self {
        Self::from_int(value.into())
    }
}

impl From<u16> for Fixpt {
    fn from(value: u16) -> Self {
        Self::from_int(value.into())
    }
}

impl From<i16> for Fixpt {
    fn from(value: i16) -> Self {
        Self::from_int(value.into())
    }
}

impl core::fmt::Display for Fixpt {
    /// Decimal with four truncated fractional digits, e.g. `-2.5000`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mag = (self.0 as i64).unsigned_abs();
        let int = mag >> Self::SHIFT;
        let frac = ((mag & (Self::F as u64 - 1)) * 10_000) >> Self::SHIFT;
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}{int}.{frac:04}")
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $fix:ident, $int:ident) => {
        impl core::ops::$trait for Fixpt {
            type Output = Self;

            fn $method(self, other: Self) -> Self {
                Fixpt::$fix(self, other)
            }
        }

        impl core::ops::$trait<i32> for Fixpt {
            type Output = Self;

            fn $method(self, other: i32) -> Self {
                Fixpt::$int(self, other)
            }
        }

        impl core::ops::$assign_trait for Fixpt {
            fn $assign_method(&mut self, other: Self) {
                self.0 = Fixpt::$fix(*self, other).0;
            }
        }

        impl core::ops::$assign_trait<i32> for Fixpt {
            fn $assign_method(&mut self, other: i32) {
                self.0 = Fixpt::$int(*self, other).0;
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, add, add_int);
impl_binop!(Sub, sub, SubAssign, sub_assign, sub, sub_int);
impl_binop!(Mul, mul, MulAssign, mul_assign, mul, mul_int);
impl_binop!(Div, div, DivAssign, div_assign, div, div_int);

impl core::ops::Neg for Fixpt {
    type Output = Self;

    fn neg(self) -> Self {
        Fixpt::neg(self)
    }
}


// vim: ts=4 sw=4 expandtab
