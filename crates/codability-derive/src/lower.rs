use codability_core::{FieldDescriptor, Member, TypeBody};
use quote::ToTokens;
use syn::{Data, DeriveInput, Error, Fields, LitStr};

/// Lower a struct declaration into the core member model.
///
/// Rust structs carry no computed or static members, so every named field
/// lowers to a stored instance field. The declared type rides along as
/// token text; named fields have no default-value syntax.
pub fn lower_body(input: &DeriveInput) -> Result<TypeBody, Error> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "CodingKeys can only be derived for structs with named fields",
        ));
    };

    let Fields::Named(named) = &data.fields else {
        return Err(Error::new_spanned(
            &data.fields,
            "CodingKeys can only be derived for structs with named fields",
        ));
    };

    let members = named
        .named
        .iter()
        .map(|field| {
            let ident = field.ident.as_ref().expect("named field");
            let descriptor = FieldDescriptor::new(ident.to_string())
                .with_type(field.ty.to_token_stream().to_string());

            Member::Field(descriptor)
        })
        .collect();

    Ok(TypeBody::new(members))
}

/// Find the `#[coding_keys("…")]` helper attribute and pull out its string
/// literal. An absent attribute is `None`; a present attribute with
/// anything other than a single string literal is a spanned parse error.
pub fn coding_keys_arg(input: &DeriveInput) -> Result<Option<LitStr>, Error> {
    let Some(attr) = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("coding_keys"))
    else {
        return Ok(None);
    };

    attr.parse_args::<LitStr>().map(Some)
}
