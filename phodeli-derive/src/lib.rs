//! Derive macro implementation used by `phodeli-core`.
//!
//! `phodeli-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit` and `crate::MeasureError`, so it is intended to be used by `phodeli-core` (or by crates that expose
//! an identical crate-root API).
//!
//! # Generated impls
//!
//! For a fieldless unit enum `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit` (`ALL`, `symbol`, `name`)
//! - `core::fmt::Display for MyUnit` (writes the symbol)
//! - `core::str::FromStr for MyUnit` (accepts the symbol, or the name ignoring ASCII case)
//! - an inherent `const fn ratio(self) -> f64` when every variant declares a `ratio`
//!
//! # Attributes
//!
//! Every variant carries a `#[unit(...)]` attribute:
//!
//! - `symbol = "mm"`: printed unit symbol, unique within the enum (required)
//! - `name = "millimeters"`: long name used for parsing (defaults to the lower-cased variant name)
//! - `ratio = 0.001`: conversion factor to the canonical unit of the measure (all variants or none)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Token,
};

/// Derive `crate::Unit`, `Display` and `FromStr` for a fieldless unit enum.
///
/// Every variant must be annotated with `#[unit(symbol = "...")]`, optionally adding `name` and `ratio`.
///
/// This macro is intended for use by `phodeli-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "`Unit` can only be derived for fieldless enums",
            ))
        }
    };

    let mut variants: Vec<(Ident, UnitAttribute)> = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "unit variants must not carry fields",
            ));
        }
        let attr = parse_unit_attribute(&variant.attrs, &variant.ident)?;
        variants.push((variant.ident.clone(), attr));
    }

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "`Unit` requires at least one variant",
        ));
    }

    for (i, (_, attr)) in variants.iter().enumerate() {
        let symbol = attr.symbol.value();
        if variants[..i]
            .iter()
            .any(|(_, earlier)| earlier.symbol.value() == symbol)
        {
            return Err(syn::Error::new(
                attr.symbol.span(),
                format!("duplicate unit symbol `{}`", symbol),
            ));
        }
    }

    let idents: Vec<&Ident> = variants.iter().map(|(ident, _)| ident).collect();
    let symbols: Vec<&LitStr> = variants.iter().map(|(_, attr)| &attr.symbol).collect();
    let names: Vec<LitStr> = variants
        .iter()
        .map(|(ident, attr)| {
            attr.name.clone().unwrap_or_else(|| {
                LitStr::new(&ident.to_string().to_lowercase(), ident.span())
            })
        })
        .collect();

    let ratios: Vec<&Expr> = variants
        .iter()
        .filter_map(|(_, attr)| attr.ratio.as_ref())
        .collect();
    let ratio_impl = if ratios.is_empty() {
        TokenStream2::new()
    } else if ratios.len() == variants.len() {
        quote! {
            impl #name {
                #[doc = "Conversion factor from this unit to the canonical unit of its measure."]
                #[inline]
                pub const fn ratio(self) -> f64 {
                    match self {
                        #( Self::#idents => #ratios, )*
                    }
                }
            }
        }
    } else {
        return Err(syn::Error::new_spanned(
            name,
            "`ratio` must be given for every variant or for none",
        ));
    };

    let expanded = quote! {
        impl crate::Unit for #name {
            const ALL: &'static [Self] = &[ #( Self::#idents ),* ];

            #[inline]
            fn symbol(self) -> &'static str {
                match self {
                    #( Self::#idents => #symbols, )*
                }
            }

            #[inline]
            fn name(self) -> &'static str {
                match self {
                    #( Self::#idents => #names, )*
                }
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(<Self as crate::Unit>::symbol(*self))
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = crate::MeasureError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                let trimmed = s.trim();
                #(
                    if trimmed == #symbols {
                        return ::core::result::Result::Ok(Self::#idents);
                    }
                )*
                #(
                    if trimmed.eq_ignore_ascii_case(#names) {
                        return ::core::result::Result::Ok(Self::#idents);
                    }
                )*
                ::core::result::Result::Err(crate::MeasureError::UnknownUnit(trimmed.to_owned()))
            }
        }

        #ratio_impl
    };

    Ok(expanded)
}

/// Parsed contents of a variant's `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    name: Option<LitStr>,
    ratio: Option<Expr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut name: Option<LitStr> = None;
        let mut ratio: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "name" => {
                    name = Some(input.parse()?);
                }
                "ratio" => {
                    ratio = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;

        Ok(UnitAttribute {
            symbol,
            name,
            ratio,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute], variant: &Ident) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        variant.span(),
        format!("missing #[unit(...)] attribute on variant `{}`", variant),
    ))
}
