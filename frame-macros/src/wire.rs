use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Fields, Index};

fn layout_struct(s: &DataStruct) -> (TokenStream2, TokenStream2) {
    match &s.fields {
        Fields::Unit => (
            quote! {
                let _ = dst;

                Ok(())
            },
            quote! {
                let _ = src;

                Ok(Self)
            },
        ),
        Fields::Unnamed(fields) => {
            let attr_tags: Vec<_> = (0..fields.unnamed.len()).map(Index::from).collect();
            let types: Vec<_> = fields.unnamed.iter().map(|field| &field.ty).collect();

            (
                quote! {
                    let mut dst = dst.into_iter();

                    #(
                        frame_codec::Wire::write_iter(&self.#attr_tags, &mut dst)?;
                    )*

                    Ok(())
                },
                quote! {
                    let mut src = src.into_iter();

                    Ok(
                        Self(
                            #(
                                <#types as frame_codec::Wire>::read_iter(&mut src)?,
                            )*
                        )
                    )
                },
            )
        }
        Fields::Named(fields) => {
            let attr_idents: Vec<_> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let types: Vec<_> = fields.named.iter().map(|field| &field.ty).collect();

            (
                quote! {
                    let mut dst = dst.into_iter();

                    #(
                        frame_codec::Wire::write_iter(&self.#attr_idents, &mut dst)?;
                    )*

                    Ok(())
                },
                quote! {
                    let mut src = src.into_iter();

                    Ok(
                        Self {
                            #(
                                #attr_idents: <#types as frame_codec::Wire>::read_iter(&mut src)?,
                            )*
                        }
                    )
                },
            )
        }
    }
}

fn size_of_struct(s: &DataStruct) -> TokenStream2 {
    let types: Vec<_> = s.fields.iter().map(|field| &field.ty).collect();

    quote! { 0 #( + <#types as frame_codec::Wire>::SIZE )* }
}

pub fn derive(item: TokenStream) -> TokenStream {
    let item: DeriveInput = match syn::parse(item) {
        Ok(item) => item,
        Err(err) => return err.to_compile_error().into(),
    };

    let s = match &item.data {
        Data::Struct(s) => s,
        _ => {
            return syn::Error::new_spanned(&item.ident, "Wire layouts can only be derived for structs.")
                .to_compile_error()
                .into()
        }
    };

    let implementer = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();

    let size = size_of_struct(s);
    let (write_body, read_body) = layout_struct(s);

    quote! {
        impl #impl_generics frame_codec::Wire for #implementer #ty_generics #where_clause {
            const SIZE: usize = #size;

            fn write_iter<'a>(&self, dst: impl IntoIterator<Item = &'a mut u8>) -> Result<(), frame_codec::error::EndOfInput> {
                #write_body
            }

            fn read_iter<'a>(src: impl IntoIterator<Item = &'a u8>) -> Result<Self, frame_codec::error::EndOfInput> {
                #read_body
            }
        }
    }
    .into()
}
