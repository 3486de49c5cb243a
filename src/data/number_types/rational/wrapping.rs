//! # Wrapping existing methods
//!
//! Standard operations on `RationalBig`, simply wrapping the operations already defined on the
//! inner type. Every binary operation is provided for all four owned and borrowed combinations.
use std::fmt;

use crate::data::number_types::rational::RationalBig;

macro_rules! wrap_operation {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl std::ops::$trait for RationalBig {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self(std::ops::$trait::$method(self.0, rhs.0))
            }
        }

        impl std::ops::$trait<&RationalBig> for RationalBig {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self::Output {
                Self(std::ops::$trait::$method(self.0, &rhs.0))
            }
        }

        impl std::ops::$trait<RationalBig> for &RationalBig {
            type Output = RationalBig;

            fn $method(self, rhs: RationalBig) -> Self::Output {
                RationalBig(std::ops::$trait::$method(&self.0, rhs.0))
            }
        }

        impl std::ops::$trait for &RationalBig {
            type Output = RationalBig;

            fn $method(self, rhs: Self) -> Self::Output {
                RationalBig(std::ops::$trait::$method(&self.0, &rhs.0))
            }
        }

        impl std::ops::$assign_trait for RationalBig {
            fn $assign_method(&mut self, rhs: Self) {
                std::ops::$assign_trait::$assign_method(&mut self.0, rhs.0)
            }
        }

        impl std::ops::$assign_trait<&RationalBig> for RationalBig {
            fn $assign_method(&mut self, rhs: &Self) {
                std::ops::$assign_trait::$assign_method(&mut self.0, &rhs.0)
            }
        }
    }
}

wrap_operation!(Add, add, AddAssign, add_assign);
wrap_operation!(Sub, sub, SubAssign, sub_assign);
wrap_operation!(Mul, mul, MulAssign, mul_assign);
wrap_operation!(Div, div, DivAssign, div_assign);

mod neg {
    use std::ops::Neg;

    use crate::data::number_types::rational::RationalBig;

    impl Neg for RationalBig {
        type Output = Self;

        fn neg(self) -> Self::Output {
            Self(self.0.neg())
        }
    }

    impl Neg for &RationalBig {
        type Output = RationalBig;

        fn neg(self) -> Self::Output {
            RationalBig(Neg::neg(&self.0))
        }
    }
}

mod sum {
    use std::iter::Sum;

    use crate::data::number_types::rational::RationalBig;

    impl Sum for RationalBig {
        fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
            Self(iter.map(|item| item.0).sum())
        }
    }

    impl<'a> Sum<&'a RationalBig> for RationalBig {
        fn sum<I: Iterator<Item=&'a RationalBig>>(iter: I) -> Self {
            Self(iter.map(|item| &item.0).sum())
        }
    }
}

mod identities {
    use num::BigRational;
    use num_traits::{One, Zero};

    use crate::data::number_types::rational::RationalBig;

    impl Zero for RationalBig {
        fn zero() -> Self {
            Self(BigRational::zero())
        }

        fn set_zero(&mut self) {
            self.0.set_zero()
        }

        fn is_zero(&self) -> bool {
            self.0.is_zero()
        }
    }

    impl One for RationalBig {
        fn one() -> Self {
            Self(BigRational::one())
        }
    }
}

impl fmt::Display for RationalBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
