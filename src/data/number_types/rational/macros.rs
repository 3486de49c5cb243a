/// Shorthand for creating a rational number, mostly in tests.
///
/// A single argument is an integer, two arguments are a numerator and a denominator.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::data::number_types::rational::RationalBig::new($value, 1)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::RationalBig::new($numer, $denom)
    };
}
