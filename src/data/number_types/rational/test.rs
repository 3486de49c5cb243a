use std::str::FromStr;

use num_traits::{FromPrimitive, One, Zero};

use crate::data::number_types::rational::{ParseRationalError, RationalBig};
use crate::RB;

#[test]
fn eq() {
    assert_eq!(RB!(1, 1), RB!(2, 2));
    assert_ne!(RB!(2, 1), RB!(2, 2));
    assert_eq!(RB!(-1, 1), RB!(2, -2));
    assert_eq!(RB!(0, 1), RB!(-0, 2));
    assert_eq!(-RB!(0), RationalBig::zero());
}

#[test]
#[should_panic]
fn panic_divide_zero_by_zero() {
    let _result = RB!(0, 0);
}

#[test]
fn field_operations_are_exact() {
    assert_eq!(RB!(3, 2) + RB!(6, 4), RB!(3));
    assert_eq!(RB!(1, 3) + RB!(1, 3) + RB!(1, 3), RationalBig::one());
    assert_eq!(RB!(3, 2) - &RB!(6, 4), RB!(0));
    assert_eq!(&RB!(2, 3) * &RB!(3, 4), RB!(1, 2));
    assert_eq!(RB!(1, 10) / RB!(1, 3), RB!(3, 10));
    assert_eq!(-&RB!(5, 7), RB!(-5, 7));

    let mut x = RB!(0);
    for _ in 0..1000 {
        x += RB!(1, 10);
    }
    assert_eq!(x, RB!(100));
    x -= &RB!(1, 2);
    x *= RB!(2);
    x /= &RB!(199);
    assert_eq!(x, RB!(1));

    let total: RationalBig = vec![RB!(1, 2), RB!(1, 3), RB!(1, 6)].into_iter().sum();
    assert_eq!(total, RB!(1));
}

#[test]
fn ordering() {
    assert!(RB!(1, 3) < RB!(1, 2));
    assert!(RB!(-1, 2) < RB!(-1, 3));
    assert!(RB!(-1, 1_000_000) < RB!(0));
    assert_eq!(RB!(3, 7).max(RB!(2, 5)), RB!(3, 7));
    assert_eq!(RB!(3, 7).min(RB!(2, 5)), RB!(2, 5));
}

#[test]
fn from_primitive() {
    assert_eq!(RationalBig::from_i64(-4), Some(RB!(-4)));
    assert_eq!(RationalBig::from_u64(4), Some(RB!(4)));
    assert_eq!(RationalBig::from_f64(0.25), Some(RB!(1, 4)));
    assert_eq!(RationalBig::from_f64(-25.5), Some(RB!(-51, 2)));
    // Binary representation is converted exactly, so not equal to the decimal value.
    assert_ne!(RationalBig::from_f64(0.1), Some(RB!(1, 10)));
    assert_eq!(RationalBig::from_f64(f64::NAN), None);
    assert_eq!(RationalBig::from_f64(f64::INFINITY), None);
    assert_eq!(RationalBig::from_f64(f64::NEG_INFINITY), None);
}

#[test]
fn to_f64() {
    assert_eq!(RB!(1, 4).to_f64(), Some(0.25));
    let value = RB!(1, 3).to_f64().unwrap();
    assert!((value - 1f64 / 3f64).abs() < f64::EPSILON);
}

#[test]
fn from_str() {
    assert_eq!(RationalBig::from_str("3"), Ok(RB!(3)));
    assert_eq!(RationalBig::from_str("-3"), Ok(RB!(-3)));
    assert_eq!(RationalBig::from_str("+3"), Ok(RB!(3)));
    assert_eq!(RationalBig::from_str("-3/4"), Ok(RB!(-3, 4)));
    assert_eq!(RationalBig::from_str("6/8"), Ok(RB!(3, 4)));
    assert_eq!(RationalBig::from_str("0.125"), Ok(RB!(1, 8)));
    assert_eq!(RationalBig::from_str("-0.5"), Ok(RB!(-1, 2)));
    assert_eq!(RationalBig::from_str(".5"), Ok(RB!(1, 2)));
    assert_eq!(RationalBig::from_str("1e-6"), Ok(RB!(1, 1_000_000)));
    assert_eq!(RationalBig::from_str("2.5E3"), Ok(RB!(2500)));
    assert_eq!(RationalBig::from_str(" 7 "), Ok(RB!(7)));

    assert_eq!(RationalBig::from_str("1e10000"), Ok(RationalBig::from_str(&format!("1{}", "0".repeat(10_000))).unwrap()));
    assert_eq!(RationalBig::from_str("25e-10000"), Ok(RB!(25) / RationalBig::from_str("1e10000").unwrap()));

    let out_of_range = ["1.5e-2147483648", "1e999999999", "1e10001", "1.5e-10000", "1e2147483647"];
    for literal in ["", ".", "-", "1.2.3", "--1", "abc", "1/0", "1e", "0x10"].into_iter().chain(out_of_range) {
        assert!(RationalBig::from_str(literal).is_err(), "{}", literal);
    }
    assert_eq!(
        RationalBig::from_str("abc").unwrap_err().to_string(),
        "can't parse \"abc\" as a rational number",
    );
    let _: ParseRationalError = RationalBig::from_str("x").unwrap_err();
}

#[test]
fn display() {
    assert_eq!(RB!(3, 2).to_string(), "3/2");
    assert_eq!(RB!(-4, 2).to_string(), "-2");
    assert_eq!(RB!(0, 3).to_string(), "0");
}
