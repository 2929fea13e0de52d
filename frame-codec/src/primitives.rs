use fill_array::fill;

use crate::{error, Wire};

macro_rules! impl_number {
    ($TYPE:ty, $SIZE:expr) => {
        impl Wire for $TYPE {
            const SIZE: usize = $SIZE;

            fn write_iter<'a>(
                &self,
                dst: impl IntoIterator<Item = &'a mut u8>,
            ) -> Result<(), error::EndOfInput> {
                let mut dst = dst.into_iter();

                // multi-byte fields are little-endian on the wire
                for byte in self.to_le_bytes() {
                    *dst.next().ok_or(error::EndOfInput)? = byte;
                }

                Ok(())
            }

            fn read_iter<'a>(
                src: impl IntoIterator<Item = &'a u8>,
            ) -> Result<Self, error::EndOfInput> {
                let mut src = src.into_iter();

                // all byte patterns are valid
                let bytes = fill![*src.next().ok_or(error::EndOfInput)?; $SIZE];

                Ok(Self::from_le_bytes(bytes))
            }
        }
    };
}

// NOTE: a wrong size here is a compile-time
// error through `from_le_bytes`
impl_number!(u8, 1);
impl_number!(u16, 2);
impl_number!(u32, 4);
impl_number!(u64, 8);
impl_number!(i8, 1);
impl_number!(i16, 2);
impl_number!(i32, 4);
impl_number!(i64, 8);
