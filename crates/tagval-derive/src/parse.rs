//! Parsing of `#[tag(...)]` and `#[reflect(...)]` attributes

use syn::ext::IdentExt;
use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Meta};

/// Where a field's tag comes from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) enum TagSource {
    #[default]
    None,
    Pairs(Vec<(String, String)>),
    Raw(String),
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FieldAttrs {
    pub tag: TagSource,
    pub skip: bool,
}

/// Custom validation hook wired into the generated impl.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Hook {
    #[default]
    None,
    Validate,
    ValidateMut,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ContainerAttrs {
    pub hook: Hook,
}

impl FieldAttrs {
    pub(crate) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if attr.path().is_ident("tag") {
                result.parse_tag(attr)?;
            } else if attr.path().is_ident("reflect") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        result.skip = true;
                        Ok(())
                    } else {
                        Err(meta.error("unknown field attribute, expected `skip`"))
                    }
                })?;
            }
        }

        Ok(result)
    }

    fn parse_tag(&mut self, attr: &Attribute) -> syn::Result<()> {
        match &attr.meta {
            Meta::NameValue(name_value) => {
                let text = match &name_value.value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(text),
                        ..
                    }) => text.value(),
                    other => {
                        return Err(syn::Error::new_spanned(other, "expected a string literal"));
                    }
                };
                if self.tag != TagSource::None {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "raw `#[tag = \"...\"]` cannot be combined with other tag attributes",
                    ));
                }
                self.tag = TagSource::Raw(text);
                Ok(())
            }
            Meta::List(_) => {
                let mut pairs = match std::mem::take(&mut self.tag) {
                    TagSource::None => Vec::new(),
                    TagSource::Pairs(pairs) => pairs,
                    TagSource::Raw(_) => {
                        return Err(syn::Error::new_spanned(
                            attr,
                            "`#[tag(...)]` cannot be combined with a raw `#[tag = \"...\"]`",
                        ));
                    }
                };
                attr.parse_nested_meta(|meta| {
                    let key = match meta.path.get_ident() {
                        Some(ident) => ident.unraw().to_string(),
                        None => return Err(meta.error("expected a tag key")),
                    };
                    let value: LitStr = meta.value()?.parse()?;
                    pairs.push((key, value.value()));
                    Ok(())
                })?;
                self.tag = TagSource::Pairs(pairs);
                Ok(())
            }
            Meta::Path(_) => Err(syn::Error::new_spanned(
                attr,
                "expected `#[tag(key = \"value\")]` or `#[tag = \"key:\\\"value\\\"\"]`",
            )),
        }
    }
}

impl ContainerAttrs {
    pub(crate) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("reflect") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                let hook = if meta.path.is_ident("validate") {
                    Hook::Validate
                } else if meta.path.is_ident("validate_mut") {
                    Hook::ValidateMut
                } else {
                    return Err(meta.error(
                        "unknown container attribute, expected `validate` or `validate_mut`",
                    ));
                };

                if result.hook != Hook::None && result.hook != hook {
                    return Err(meta.error("`validate` and `validate_mut` are exclusive"));
                }
                result.hook = hook;
                Ok(())
            })?;
        }

        Ok(result)
    }
}
