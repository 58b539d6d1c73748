use darling::util::Ignored;
use darling::{ast, Error, FromDeriveInput, FromField};
use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{parse_macro_input, parse_quote, DeriveInput};

#[proc_macro_derive(Encode, attributes(bigend))]
pub fn derive_encode(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    ContainerReceiver::from_derive_input(&input)
        .and_then(|receiver| receiver.validate())
        .map(|data| data.encode_impl().into_token_stream())
        .unwrap_or_else(|error| error.write_errors())
        .into()
}

#[proc_macro_derive(Decode, attributes(bigend))]
pub fn derive_decode(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    ContainerReceiver::from_derive_input(&input)
        .and_then(|receiver| receiver.validate())
        .map(|data| data.decode_impl().into_token_stream())
        .unwrap_or_else(|error| error.write_errors())
        .into()
}

#[derive(FromDeriveInput)]
#[darling(attributes(bigend))]
struct ContainerReceiver {
    ident: syn::Ident,
    generics: syn::Generics,
    data: ast::Data<Ignored, FieldReceiver>,

    #[darling(default)]
    crate_path: Option<syn::Path>,
}

#[derive(FromField)]
struct FieldReceiver {
    ident: Option<syn::Ident>,
    ty: syn::Type,
}

struct ContainerData {
    ident: syn::Ident,
    generics: syn::Generics,
    crate_path: syn::Path,
    field: FieldData,
}

struct FieldData {
    member: syn::Member,
    ty: syn::Type,
}

impl ContainerReceiver {
    fn validate(&self) -> Result<ContainerData, Error> {
        let ident = self.ident.clone();
        let generics = self.generics.clone();
        let crate_path = self
            .crate_path
            .clone()
            .unwrap_or_else(|| parse_quote!(bigend));

        let fields = match &self.data {
            ast::Data::Struct(fields) => fields,
            ast::Data::Enum(_) => {
                return Err(Error::custom(
                    "enums are not supported, only structs with a single field",
                )
                .with_span(&self.ident));
            }
        };

        let field = match fields.fields.as_slice() {
            [field] => field,
            _ => {
                return Err(Error::custom(format!(
                    "expected a struct with exactly one field, found {}",
                    fields.fields.len()
                ))
                .with_span(&self.ident));
            }
        };

        let member = match &field.ident {
            Some(ident) => syn::Member::Named(ident.clone()),
            None => syn::Member::Unnamed(syn::Index::from(0)),
        };

        Ok(ContainerData {
            ident,
            generics,
            crate_path,
            field: FieldData {
                member,
                ty: field.ty.clone(),
            },
        })
    }
}

impl ContainerData {
    fn encode_impl(&self) -> TokenStream {
        let Self {
            ident,
            crate_path,
            field: FieldData { member, ty },
            ..
        } = self;
        let (impl_generics, ident_generics, where_clause) = self.generics.split_for_impl();

        quote! {
            impl #impl_generics #crate_path::Encode for #ident #ident_generics
                #where_clause
            {
                fn encode(&self) -> ::std::vec::Vec<u8> {
                    <#ty as #crate_path::Encode>::encode(&self.#member)
                }
            }
        }
    }

    fn decode_impl(&self) -> TokenStream {
        let Self {
            ident,
            crate_path,
            field: FieldData { member, ty },
            ..
        } = self;
        let (impl_generics, ident_generics, where_clause) = self.generics.split_for_impl();
        let bytes_binding = quote!(__bigend_bytes);

        quote! {
            impl #impl_generics #crate_path::Decode for #ident #ident_generics
                #where_clause
            {
                fn decode(#bytes_binding: &[u8]) -> Self {
                    Self {
                        #member: <#ty as #crate_path::Decode>::decode(#bytes_binding),
                    }
                }
            }
        }
    }
}
