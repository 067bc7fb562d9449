use proptest::prelude::*;
use sched_fixpt::{
    F, Fixpt,
    raw::{
        add_fp, add_mixed, div_fp, fp_to_int, fp_to_int_round, int_to_fp, mult_fp, sub_fp,
        sub_mixed,
    },
};

// Integer range that survives scaling by F.
const INT_RANGE: core::ops::Range<i32> = -(1 << 17)..(1 << 17);

// Operand range for which sums and differences stay representable.
const FP_RANGE: core::ops::Range<i32> = (i32::MIN / 2)..(i32::MAX / 2);

proptest! {
    #[test]
    fn prop_int_roundtrip(n in INT_RANGE) {
        prop_assert_eq!(fp_to_int(int_to_fp(n)), n);
        prop_assert_eq!(fp_to_int_round(int_to_fp(n)), n);
        prop_assert_eq!(Fixpt::from_int(n).to_int(), n);
    }
}

proptest! {
    #[test]
    fn prop_round_half_away_from_zero(n in 0..(1 << 17) - 1) {
        prop_assert_eq!(fp_to_int_round(int_to_fp(n) + F / 2), n + 1);
        prop_assert_eq!(fp_to_int_round(int_to_fp(n) + F / 2 - 1), n);
        prop_assert_eq!(fp_to_int_round(-int_to_fp(n) - F / 2), -n - 1);
        prop_assert_eq!(fp_to_int_round(-int_to_fp(n) - F / 2 + 1), -n);
    }
}

proptest! {
    #[test]
    fn prop_truncates_toward_zero(x in (i32::MIN + 1)..=i32::MAX) {
        let t = fp_to_int(x);
        prop_assert!((t as i64 * F as i64).abs() <= (x as i64).abs());
        prop_assert_eq!(fp_to_int(x.wrapping_neg()), t.wrapping_neg());
    }
}

proptest! {
    #[test]
    fn prop_round_is_nearest(x in (i32::MIN + F)..(i32::MAX - F)) {
        let r = fp_to_int_round(x) as i64;
        let dist = (r * F as i64 - x as i64).abs();
        prop_assert!(dist <= F as i64 / 2);
    }
}

proptest! {
    #[test]
    fn prop_additive_identity_and_inverse(x in any::<i32>()) {
        prop_assert_eq!(add_fp(x, int_to_fp(0)), x);
        prop_assert_eq!(sub_fp(x, x), int_to_fp(0));
        let x = Fixpt::from_raw(x);
        prop_assert_eq!(x + Fixpt::ZERO, x);
        prop_assert_eq!(x - x, Fixpt::ZERO);
    }
}

proptest! {
    #[test]
    fn prop_multiplicative_identity(x in any::<i32>()) {
        prop_assert_eq!(mult_fp(x, int_to_fp(1)), x);
        prop_assert_eq!(Fixpt::from_raw(x) * Fixpt::ONE, Fixpt::from_raw(x));
        prop_assert_eq!(div_fp(x, int_to_fp(1)), x);
    }
}

proptest! {
    #[test]
    fn prop_mixed_equivalence(x in FP_RANGE, n in -(1 << 15)..(1 << 15)) {
        prop_assert_eq!(add_mixed(x, n), add_fp(x, int_to_fp(n)));
        prop_assert_eq!(sub_mixed(x, n), sub_fp(x, int_to_fp(n)));
        let fx = Fixpt::from_raw(x);
        prop_assert_eq!(fx + n, fx + Fixpt::from_int(n));
        prop_assert_eq!(fx - n, fx - Fixpt::from_int(n));
        prop_assert_eq!(fx * n, Fixpt::from_raw(x.wrapping_mul(n)));
    }
}

proptest! {
    #[test]
    fn prop_int_mul_div_inverse(a in -300..300i32, b in 1..300i32) {
        let p = Fixpt::from_int(a) * Fixpt::from_int(b);
        prop_assert_eq!(p, Fixpt::from_int(a * b));
        prop_assert_eq!((p / Fixpt::from_int(b)).to_int(), a);
        prop_assert_eq!(p.div_int(b), Fixpt::from_int(a));
    }
}

proptest! {
    #[test]
    fn prop_add_commutative(x in any::<i32>(), y in any::<i32>()) {
        let (x, y) = (Fixpt::from_raw(x), Fixpt::from_raw(y));
        prop_assert_eq!(x + y, y + x);
        prop_assert_eq!(x * y, y * x);
    }
}

proptest! {
    #[test]
    fn prop_checked_div_matches_div(x in any::<i32>(), y in any::<i32>()) {
        let (fx, fy) = (Fixpt::from_raw(x), Fixpt::from_raw(y));
        if y == 0 {
            prop_assert_eq!(fx.checked_div(fy), None);
            prop_assert_eq!(fx.checked_div_int(y), None);
        } else {
            prop_assert_eq!(fx.checked_div(fy), Some(fx / fy));
            prop_assert_eq!(fx.checked_div_int(y), Some(fx / y));
        }
    }
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(int_to_fp(3), 49152);
    assert_eq!(fp_to_int(49152), 3);
    assert_eq!(fp_to_int_round(49152 + 8192), 4);
    assert_eq!(fp_to_int_round(-49152 - 8192), -4);
    assert_eq!(mult_fp(int_to_fp(2), int_to_fp(3)), int_to_fp(6));
    let q = div_fp(int_to_fp(10), int_to_fp(4));
    assert_eq!(q, int_to_fp(2) + F / 2);
    assert_eq!(fp_to_int(q), 2);
    assert_eq!(
        fp_to_int(div_fp(mult_fp(int_to_fp(6), int_to_fp(7)), int_to_fp(7))),
        6
    );
}

// vim: ts=4 sw=4 expandtab
