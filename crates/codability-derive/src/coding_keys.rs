use crate::lower;
use codability_core::{Diagnostic, FieldKeyMapping, synthesize};
use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, Error, LitStr};

// derive_coding_keys
pub fn derive_coding_keys(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream, Error> {
    let body = lower::lower_body(input)?;
    let arg = lower::coding_keys_arg(input)?;
    let value = arg.as_ref().map(LitStr::value);

    let out = synthesize(&body, value.as_deref())
        .map_err(|diag| diagnostic_error(&diag, input, arg.as_ref()))?;

    let warning = out
        .warning
        .as_ref()
        .map(warning_shim)
        .unwrap_or_default();
    let decl = render(input, &out.mapping);

    Ok(quote! {
        #decl
        #warning
    })
}

/// Render the key enum and trait impls for a validated mapping.
///
/// One variant per field in declaration order; the enum carries the
/// effective keys, so the override-string order never leaks into output.
fn render(input: &DeriveInput, mapping: &FieldKeyMapping) -> TokenStream {
    let ident = &input.ident;
    let vis = &input.vis;
    let enum_ident = format_ident!("{ident}CodingKeys");
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let variants: Vec<_> = mapping
        .iter()
        .map(|(field, _)| format_ident!("{}", field.to_case(Case::Pascal)))
        .collect();
    let field_names: Vec<_> = mapping.iter().map(|(field, _)| field.to_string()).collect();
    let keys: Vec<_> = mapping.iter().map(|(_, key)| key.to_string()).collect();

    quote! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #vis enum #enum_ident {
            #(#variants,)*
        }

        impl ::codability::CodingKey for #enum_ident {
            const ALL: &'static [Self] = &[#(Self::#variants),*];

            fn field_name(self) -> &'static str {
                match self {
                    #(Self::#variants => #field_names,)*
                }
            }

            fn coding_key(self) -> &'static str {
                match self {
                    #(Self::#variants => #keys,)*
                }
            }
        }

        impl #impl_generics ::codability::HasCodingKeys for #ident #ty_generics #where_clause {
            type Keys = #enum_ident;
        }
    }
}

/// Surface a non-fatal diagnostic without suppressing the expansion.
/// Stable proc macros have no warning channel, so the shim leans on the
/// deprecation lint: the generated constant is used once, at its
/// definition site, which fires exactly one warning at the macro call.
fn warning_shim(diag: &Diagnostic) -> TokenStream {
    let note = diag.message();

    quote! {
        const _: () = {
            #[deprecated(note = #note)]
            const EMPTY_CODING_KEYS: () = ();
            EMPTY_CODING_KEYS
        };
    }
}

/// Convert a core diagnostic into a spanned compile error. Errors point at
/// the argument literal when one exists, else at the type name; the
/// suggested rewrite becomes a help line.
fn diagnostic_error(diag: &Diagnostic, input: &DeriveInput, arg: Option<&LitStr>) -> Error {
    let message = match &diag.suggested_rewrite {
        Some(rewrite) => format!("{}\nhelp: replace the attribute with {rewrite}", diag.message()),
        None => diag.message(),
    };

    match arg {
        Some(lit) => Error::new_spanned(lit, message),
        None => Error::new_spanned(&input.ident, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(item: TokenStream) -> String {
        derive_coding_keys(item).to_string()
    }

    #[test]
    fn renders_overridden_and_identity_cases() {
        let out = expand_str(quote! {
            #[coding_keys("name=firstName, last_name=surname")]
            struct Person {
                name: String,
                last_name: String,
                age: u32,
            }
        });

        assert!(out.contains("enum PersonCodingKeys"));
        assert!(out.contains("Name"));
        assert!(out.contains("LastName"));
        assert!(out.contains("\"firstName\""));
        assert!(out.contains("\"surname\""));
        assert!(out.contains("\"age\""));
        assert!(!out.contains("compile_error"));
    }

    #[test]
    fn blank_argument_expands_with_deprecation_shim() {
        let out = expand_str(quote! {
            #[coding_keys("")]
            struct Person {
                name: String,
            }
        });

        assert!(out.contains("enum PersonCodingKeys"));
        assert!(out.contains("deprecated"));
        assert!(out.contains("empty coding key string"));
        assert!(!out.contains("compile_error"));
    }

    #[test]
    fn missing_attribute_is_an_error_with_help() {
        let out = expand_str(quote! {
            struct Person {
                name: String,
            }
        });

        assert!(out.contains("compile_error"));
        assert!(out.contains("CodingKeys needs a coding key string"));
        assert!(out.contains("replace the attribute with"));
    }

    #[test]
    fn unknown_property_is_a_compile_error() {
        let out = expand_str(quote! {
            #[coding_keys("aa=Apple")]
            struct Person {
                a: String,
            }
        });

        assert!(out.contains("compile_error"));
        assert!(out.contains("not a stored instance property"));
        assert!(!out.contains("enum PersonCodingKeys"));
    }

    #[test]
    fn shadowed_key_is_a_compile_error() {
        let out = expand_str(quote! {
            #[coding_keys("a=b")]
            struct Person {
                a: String,
                b: String,
            }
        });

        assert!(out.contains("compile_error"));
        assert!(out.contains("no key override"));
    }

    #[test]
    fn tuple_struct_is_rejected() {
        let out = expand_str(quote! {
            #[coding_keys("a=Apple")]
            struct Pair(String, String);
        });

        assert!(out.contains("compile_error"));
        assert!(out.contains("structs with named fields"));
    }

    #[test]
    fn enum_is_rejected() {
        let out = expand_str(quote! {
            #[coding_keys("a=Apple")]
            enum Kind {
                A,
            }
        });

        assert!(out.contains("compile_error"));
        assert!(out.contains("structs with named fields"));
    }

    #[test]
    fn zero_field_struct_renders_an_empty_enum() {
        let out = expand_str(quote! {
            #[coding_keys("")]
            struct Unit {}
        });

        assert!(out.contains("enum UnitCodingKeys"));
        assert!(!out.contains("compile_error"));
    }
}
