//! Fixed-layout, little-endian frame fields.
//!
//! Every type implementing [`Wire`] occupies exactly [`Wire::SIZE`]
//! bytes on the wire. Composite layouts are derived with
//! `#[derive(Wire)]`, which lays fields out in declaration order
//! with no padding.

#![no_std]

pub mod primitives;

// export proc macro
pub use frame_macros::Wire;

pub mod error {
    /// The byte iterator ran out before the
    /// layout was fully read or written.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct EndOfInput;
}

/// This trait defines a packed binary layout
/// with a size known at compile time.
///
/// Layouts are read from and written to byte
/// iterators so that the caller decides where
/// the bytes live (a frame buffer, a sub-slice, ...).
pub trait Wire: Sized {
    /// The exact number of bytes this layout occupies.
    const SIZE: usize;

    /// Write the implementer type to the
    /// destination bytes.
    ///
    /// Fails only if `dst` yields fewer than `SIZE` bytes.
    fn write_iter<'a>(
        &self,
        dst: impl IntoIterator<Item = &'a mut u8>,
    ) -> Result<(), error::EndOfInput>;

    /// Read the implementer type from the
    /// source bytes.
    ///
    /// Fails only if `src` yields fewer than `SIZE` bytes.
    fn read_iter<'a>(src: impl IntoIterator<Item = &'a u8>) -> Result<Self, error::EndOfInput>;
}

#[cfg(test)]
mod tests {
    // rust analyzer cannot cope with recursive crate import
    use crate as frame_codec; // for the proc macro
    use frame_codec::{error, Wire};

    #[derive(Debug, PartialEq, Wire)]
    struct Foo {
        a: u8,
        b: i16,
        c: u32,
    }

    #[derive(Debug, PartialEq, Wire)]
    struct Nothing;

    #[derive(Debug, PartialEq, Wire)]
    struct Bar(u8, Nothing, i32);

    #[derive(Debug, PartialEq, Wire)]
    struct Nested {
        head: u16,
        foo: Foo,
        tail: Bar,
    }

    mod size {
        use super::*;

        #[test]
        fn structs() {
            assert_eq!(0, Nothing::SIZE);
            assert_eq!(7, Foo::SIZE);
            assert_eq!(5, Bar::SIZE);
            assert_eq!(2 + 7 + 5, Nested::SIZE);
        }
    }

    mod layout {
        use super::*;

        #[test]
        fn field_order() {
            let mut buf = [0u8; 7];

            Foo {
                a: 0xaa,
                b: -2,
                c: 0xdeadbeef,
            }
            .write_iter(buf.iter_mut())
            .unwrap();

            assert_eq!([0xaa, 0xfe, 0xff, 0xef, 0xbe, 0xad, 0xde], buf);
        }

        #[test]
        fn nested() {
            let test_nested = Nested {
                head: 0x0102,
                foo: Foo {
                    a: 3,
                    b: 0x0504,
                    c: 0x09080706,
                },
                tail: Bar(10, Nothing, 0x0e0d0c0b),
            };

            let mut buf = [0u8; 14];
            test_nested.write_iter(buf.iter_mut()).unwrap();

            assert_eq!([2, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14], buf);
            assert_eq!(test_nested, Nested::read_iter(buf.iter()).unwrap());
        }

        #[test]
        fn unit_touches_nothing() {
            let mut buf = [0x55u8; 2];

            Nothing.write_iter(buf.iter_mut()).unwrap();

            assert_eq!([0x55, 0x55], buf);
            assert_eq!(Nothing, Nothing::read_iter([0u8; 0].iter()).unwrap());
        }

        #[test]
        fn trailing_bytes_ignored() {
            let buf = [1, 2, 0, 0, 0, 0xff, 0xff];

            let bar = Bar::read_iter(buf.iter()).unwrap();

            assert_eq!(Bar(1, Nothing, 2), bar);
        }
    }

    mod short {
        use super::*;

        #[test]
        fn write() {
            let mut buf = [0u8; 6];

            assert_eq!(
                Err(error::EndOfInput),
                Foo { a: 1, b: 2, c: 3 }.write_iter(buf.iter_mut())
            );
        }

        #[test]
        fn read() {
            let buf = [0u8; 4];

            assert_eq!(Err(error::EndOfInput), Bar::read_iter(buf.iter()));
        }
    }
}
