/// The number of bytes of an encoded BN254 scalar.
pub const BN254_SCALAR_LEN: usize = 32;

/// Forward a binary operator of the wrapped arkworks types, on values and on
/// references, optionally with its assigning form.
macro_rules! impl_binary_ops {
    ($lhs:ty, $rhs:ty, $op:ident, $method:ident) => {
        impl $op<$rhs> for $lhs {
            type Output = $lhs;

            #[inline]
            fn $method(self, rhs: $rhs) -> $lhs {
                Self($op::$method(self.0, &rhs.0))
            }
        }

        impl<'a> $op<&'a $rhs> for $lhs {
            type Output = $lhs;

            #[inline]
            fn $method(self, rhs: &'a $rhs) -> $lhs {
                Self($op::$method(self.0, &rhs.0))
            }
        }
    };
    ($lhs:ty, $rhs:ty, $op:ident, $method:ident, $assign_op:ident, $assign_method:ident) => {
        impl_binary_ops!($lhs, $rhs, $op, $method);

        impl<'a> $assign_op<&'a $rhs> for $lhs {
            #[inline]
            fn $assign_method(&mut self, rhs: &'a $rhs) {
                $assign_op::$assign_method(&mut self.0, &rhs.0)
            }
        }
    };
}

mod fr;
pub use fr::*;

mod curves;
pub use curves::*;

mod pairing;
pub use pairing::*;
