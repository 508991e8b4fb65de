//! Rendering `syn` syntax back into normalised type strings

use proc_macro2::TokenStream;
use quote::ToTokens;

use crate::domain::value_objects::type_ref::normalize_type;

/// `Option < String >` -> `Option<String>`
pub fn render_type(ty: &syn::Type) -> String {
    let tokens: TokenStream = ty.to_token_stream();
    normalize_type(&tokens.to_string())
}

/// Return type of a signature, `None` for `-> ()` / no arrow
pub fn render_return(output: &syn::ReturnType) -> Option<String> {
    match output {
        syn::ReturnType::Default => None,
        syn::ReturnType::Type(_, ty) => match ty.as_ref() {
            syn::Type::Tuple(tuple) if tuple.elems.is_empty() => None,
            other => Some(render_type(other)),
        },
    }
}

/// Last identifier of a type path (`crate::domain::Invoice` -> `Invoice`)
pub fn last_ident(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => {
            path.path.segments.last().map(|s| s.ident.to_string())
        }
        _ => None,
    }
}
