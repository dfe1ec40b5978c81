use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::consts::MOD;

/// Integer modulo the prime `M`, always kept in `0..M`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default, Hash)]
#[repr(transparent)]
pub struct ModInt<const M: u64>(u64);

pub type Mint = ModInt<MOD>;

impl<const M: u64> ModInt<M> {
    const CHECK: () = assert!(M > 1 && M <= u32::MAX as u64, "modulus must fit in 32 bits");

    pub const ZERO: Self = ModInt(0);
    pub const ONE: Self = ModInt(1 % M);

    #[inline(always)]
    pub const fn new(v: u64) -> Self {
        let () = Self::CHECK;
        ModInt(v % M)
    }

    #[inline(always)]
    pub const fn value(self) -> u64 {
        self.0
    }

    pub const fn modulus() -> u64 {
        M
    }

    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exp >>= 1;
        }
        acc
    }

    /// Multiplicative inverse by Fermat's little theorem; zero maps to zero.
    pub fn inv(self) -> Self {
        self.pow(M - 2)
    }
}

macro_rules! impl_from_unsigned {
    ($($T: ty)*) => {$(
        impl<const M: u64> From<$T> for ModInt<M> {
            #[inline(always)]
            fn from(v: $T) -> Self {
                ModInt::new((v as u128 % M as u128) as u64)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($T: ty)*) => {$(
        impl<const M: u64> From<$T> for ModInt<M> {
            #[inline(always)]
            fn from(v: $T) -> Self {
                ModInt::new((v as i128).rem_euclid(M as i128) as u64)
            }
        }
    )*};
}

impl_from_unsigned! { u8 u16 u32 u64 u128 usize }
impl_from_signed! { i8 i16 i32 i64 i128 isize }

// implements "&T op U", "T op &U", "&T op &U" from "T op U"
macro_rules! forward_ref_binop {
    ($imp:ident, $method:ident) => {
        impl<'a, const M: u64> $imp<ModInt<M>> for &'a ModInt<M> {
            type Output = ModInt<M>;

            #[inline(always)]
            fn $method(self, other: ModInt<M>) -> ModInt<M> {
                $imp::$method(*self, other)
            }
        }

        impl<const M: u64> $imp<&ModInt<M>> for ModInt<M> {
            type Output = ModInt<M>;

            #[inline(always)]
            fn $method(self, other: &ModInt<M>) -> ModInt<M> {
                $imp::$method(self, *other)
            }
        }

        impl<const M: u64> $imp<&ModInt<M>> for &ModInt<M> {
            type Output = ModInt<M>;

            #[inline(always)]
            fn $method(self, other: &ModInt<M>) -> ModInt<M> {
                $imp::$method(*self, *other)
            }
        }
    };
}

macro_rules! impl_assign_binop {
    ($(($trait: ident, $meth: ident = $other_trait: ident, $other_meth: ident))*) => {$(
        impl<const M: u64> $trait for ModInt<M> {
            #[inline(always)]
            fn $meth(&mut self, rhs: Self) {
                *self = $other_trait::$other_meth(*self, rhs)
            }
        }

        impl<const M: u64> $trait<&ModInt<M>> for ModInt<M> {
            #[inline(always)]
            fn $meth(&mut self, rhs: &ModInt<M>) {
                *self = $other_trait::$other_meth(*self, *rhs)
            }
        }
    )*};
}

impl<const M: u64> Add for ModInt<M> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        let v = self.0 + rhs.0;
        ModInt(if v >= M { v - M } else { v })
    }
}

impl<const M: u64> Sub for ModInt<M> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ModInt(if self.0 >= rhs.0 { self.0 - rhs.0 } else { self.0 + M - rhs.0 })
    }
}

impl<const M: u64> Mul for ModInt<M> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        // both sides are below 2^32
        ModInt(self.0 * rhs.0 % M)
    }
}

impl<const M: u64> Div for ModInt<M> {
    type Output = Self;

    #[inline(always)]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl<const M: u64> Neg for ModInt<M> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);
forward_ref_binop!(Mul, mul);
forward_ref_binop!(Div, div);

impl_assign_binop! {
    (AddAssign, add_assign = Add, add)
    (SubAssign, sub_assign = Sub, sub)
    (MulAssign, mul_assign = Mul, mul)
    (DivAssign, div_assign = Div, div)
}

impl<const M: u64> Sum for ModInt<M> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, const M: u64> Sum<&'a ModInt<M>> for ModInt<M> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<const M: u64> Product for ModInt<M> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

impl<'a, const M: u64> Product<&'a ModInt<M>> for ModInt<M> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

impl<const M: u64> fmt::Display for ModInt<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<const M: u64> fmt::Debug for ModInt<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type M7 = ModInt<7>;

    #[test]
    fn arithmetic_wraps() {
        let a = M7::new(5);
        let b = M7::new(4);
        assert_eq!((a + b).value(), 2);
        assert_eq!((b - a).value(), 6);
        assert_eq!((a * b).value(), 6);
        assert_eq!((-a).value(), 2);
        assert_eq!((-M7::ZERO).value(), 0);
    }

    #[test]
    fn division_inverts() {
        for v in 1..7 {
            let x = M7::new(v);
            assert_eq!(x * x.inv(), M7::ONE);
            assert_eq!(x / x, M7::ONE);
        }
    }

    #[test]
    fn from_negative() {
        assert_eq!(Mint::from(-1_i64).value(), MOD - 1);
        assert_eq!(Mint::from(MOD as i64 * 3 + 2).value(), 2);
        assert_eq!(Mint::from(u128::MAX).value(), (u128::MAX % MOD as u128) as u64);
    }

    #[test]
    fn pow_matches_repeated_mul() {
        let x = Mint::new(123_456_789);
        let mut acc = Mint::ONE;
        for e in 0..20 {
            assert_eq!(x.pow(e), acc);
            acc *= x;
        }
        assert_eq!(Mint::new(2).pow(MOD - 1), Mint::ONE);
    }

    #[test]
    fn sum_and_product() {
        let xs: Vec<Mint> = (1..=10_u64).map(Mint::from).collect();
        assert_eq!(xs.iter().sum::<Mint>().value(), 55);
        assert_eq!(xs.iter().product::<Mint>().value(), 3_628_800);
        assert_eq!((&xs[0] + &xs[1]).value(), 3);
    }
}
