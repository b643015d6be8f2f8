//! Code generation for `#[derive(Reflect)]`

use crate::parse::{ContainerAttrs, FieldAttrs, Hook, TagSource};
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_quote, Data, DeriveInput, Index};

pub(crate) fn generate_reflect(input: &DeriveInput) -> syn::Result<TokenStream> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "#[derive(Reflect)] supports structs only",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "#[derive(Reflect)] supports structs only",
            ));
        }
    };

    let container = ContainerAttrs::from_attributes(&input.attrs)?;
    let name = &input.ident;
    let name_str = name.unraw().to_string();

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::tagval::Reflect));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut fields = Vec::new();
    for (index, field) in data.fields.iter().enumerate() {
        let attrs = FieldAttrs::from_attributes(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let (member, field_name) = match &field.ident {
            Some(ident) => (quote!(#ident), ident.unraw().to_string()),
            None => {
                let index = Index::from(index);
                (quote!(#index), index.index.to_string())
            }
        };
        let tag = tag_tokens(&attrs.tag);

        fields.push(quote! {
            .field(#field_name, #tag, &self.#member)
        });
    }

    let hook = hook_tokens(container.hook);

    Ok(quote! {
        impl #impl_generics ::tagval::Reflect for #name #ty_generics #where_clause {
            fn reflect(&self) -> ::tagval::Value<'_> {
                ::tagval::Value::Struct(
                    ::tagval::StructValue::new(#name_str)
                        #(#fields)*
                )
            }

            #hook
        }
    })
}

fn tag_tokens(tag: &TagSource) -> TokenStream {
    match tag {
        TagSource::None => quote!(::tagval::StructTag::empty()),
        TagSource::Pairs(pairs) => {
            let keys = pairs.iter().map(|(key, _)| key);
            let values = pairs.iter().map(|(_, value)| value);
            quote!(::tagval::StructTag::pairs(&[#((#keys, #values)),*]))
        }
        TagSource::Raw(text) => quote!(::tagval::StructTag::raw(#text)),
    }
}

fn hook_tokens(hook: Hook) -> TokenStream {
    match hook {
        Hook::None => TokenStream::new(),
        Hook::Validate => quote! {
            fn as_validate(&self) -> ::core::option::Option<&dyn ::tagval::Validate> {
                ::core::option::Option::Some(self)
            }
        },
        Hook::ValidateMut => quote! {
            fn validate_copy(
                &self,
            ) -> ::core::option::Option<::core::result::Result<(), ::tagval::BoxError>> {
                let mut copy = ::core::clone::Clone::clone(self);
                ::core::option::Option::Some(::tagval::ValidateMut::validate(&mut copy))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: DeriveInput) -> String {
        generate_reflect(&input).unwrap().to_string()
    }

    #[test]
    fn test_named_fields() {
        let output = expand(parse_quote! {
            struct User {
                #[tag(validate = "gte=18")]
                age: u8,
                #[reflect(skip)]
                cache: Vec<u8>,
                name: String,
            }
        });
        assert!(output.contains("StructValue :: new (\"User\")"));
        assert!(output.contains(". field (\"age\" , :: tagval :: StructTag :: pairs"));
        assert!(output.contains("(\"validate\" , \"gte=18\")"));
        assert!(output.contains(". field (\"name\" , :: tagval :: StructTag :: empty ()"));
        assert!(!output.contains("cache"));
    }

    #[test]
    fn test_tuple_fields_are_named_by_index() {
        let output = expand(parse_quote! {
            struct Pair(#[tag = "validate:\"gt=0\""] i32, i32);
        });
        assert!(output.contains(". field (\"0\" , :: tagval :: StructTag :: raw"));
        assert!(output.contains("& self . 1"));
    }

    #[test]
    fn test_generics_get_reflect_bound() {
        let output = expand(parse_quote! {
            struct Wrapper<T> {
                inner: T,
            }
        });
        assert!(output.contains("impl < T : :: tagval :: Reflect >"));
    }

    #[test]
    fn test_hooks() {
        let output = expand(parse_quote! {
            #[reflect(validate)]
            struct Checked {}
        });
        assert!(output.contains("fn as_validate"));

        let output = expand(parse_quote! {
            #[reflect(validate_mut)]
            struct Normalised {}
        });
        assert!(output.contains("fn validate_copy"));
        assert!(output.contains("Clone :: clone (self)"));
    }

    #[test]
    fn test_enums_and_unions_are_rejected() {
        let input: DeriveInput = parse_quote! {
            enum Choice { A, B }
        };
        assert!(generate_reflect(&input).is_err());

        let input: DeriveInput = parse_quote! {
            union Bits { a: u32, b: f32 }
        };
        assert!(generate_reflect(&input).is_err());
    }
}
