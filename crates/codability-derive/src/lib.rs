use proc_macro::TokenStream;

mod coding_keys;
mod lower;

#[proc_macro_derive(CodingKeys, attributes(coding_keys))]
pub fn derive_coding_keys(input: TokenStream) -> TokenStream {
    coding_keys::derive_coding_keys(input.into()).into()
}
