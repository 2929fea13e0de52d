use proc_macro::TokenStream;

mod wire;

/// Generates the implementation block for conforming to `Wire`.
///
/// Fields are laid out in declaration order with no padding, and
/// `Wire::SIZE` is the sum of the field sizes.
///
/// # Note
///
/// Requires `frame_codec` to be in scope with that name.
#[proc_macro_derive(Wire)]
pub fn wire(item: TokenStream) -> TokenStream {
    wire::derive(item)
}
