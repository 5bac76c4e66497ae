//! Derive macro implementation used by `measura-core`.
//!
//! `measura-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::Quantity` and `crate::QuantityError`, so it is intended to be used by `measura-core` (or by
//! crates that expose an identical crate-root API).
//!
//! Most users should depend on `measura` instead and use the predefined domains.
//!
//! # Generated impls
//!
//! For a unit enumeration `MyUnit`, the derive emits the whole unit registry of that domain:
//!
//! - `crate::Unit for MyUnit` (coefficient table, names, symbols and accepted spellings as exhaustive `match`es)
//! - alias tags as associated constants (`MyUnit::Ft == MyUnit::Feet`)
//! - `core::fmt::Display` and `core::str::FromStr` for `MyUnit`
//! - `serde::Serialize` / `serde::Deserialize` for `MyUnit`, behind the expanding crate's `serde` feature
//! - a literal-factory trait implemented for `f64` and `i64` (`50.miles()`)
//!
//! # Attributes
//!
//! The enum carries a domain attribute:
//!
//! - `dimension = "length"`: human readable domain name used in error messages
//! - `base = Meters`: the variant whose ratio is `1.0`
//! - `literals = LengthLiterals`: name of the generated literal-factory trait
//! - `compact` (optional flag): render quantities as `<value><symbol>` instead of `<value> <label>`
//!
//! Every variant carries a unit attribute:
//!
//! - `ratio = 0.3048`: base units per one unit of this variant
//! - `symbol = "ft"`: conventional abbreviation
//! - `aliases = ["foot", "ft"]` (optional): additional accepted spellings, matched ignoring ASCII case
//! - `abbreviations = ["KG"]` (optional): additional accepted spellings, matched exactly like the symbol
//! - `tags = [Foot, Ft]` (optional): alias tags emitted as associated constants

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Token,
};

/// Derive the unit registry of a domain for a unit enumeration.
///
/// The enum must carry `#[unit(dimension = ..., base = ..., literals = ...)]` and every variant must carry
/// `#[unit(ratio = ..., symbol = ...)]`.
///
/// This macro is intended for use by `measura-core`.
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
    let vis = &input.vis;

    let domain = parse_domain_attribute(&input.attrs)?;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "`Unit` can only be derived for enums",
            ))
        }
    };

    let mut units = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "unit variants must not carry fields",
            ));
        }
        let attr = parse_unit_attribute(&variant.attrs, &variant.ident)?;
        units.push(UnitDef::new(variant.ident.clone(), attr));
    }

    if units.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "a unit enumeration needs at least one unit",
        ));
    }
    if !units.iter().any(|unit| unit.ident == domain.base) {
        return Err(syn::Error::new(
            domain.base.span(),
            format!("base unit `{}` is not a variant of `{}`", domain.base, name),
        ));
    }
    check_unique_spellings(&units)?;
    check_unique_literals(&units)?;

    let dimension = &domain.dimension;
    let base = &domain.base;
    let compact = domain.compact;
    let literals = &domain.literals;

    let variants: Vec<&Ident> = units.iter().map(|unit| &unit.ident).collect();
    let ratios: Vec<&Expr> = units.iter().map(|unit| &unit.ratio).collect();
    let names: Vec<&str> = units.iter().map(|unit| unit.name.as_str()).collect();
    let labels: Vec<&str> = units.iter().map(|unit| unit.label.as_str()).collect();
    let symbols: Vec<&LitStr> = units.iter().map(|unit| &unit.symbol).collect();

    let alias_arms = units.iter().map(|unit| {
        let variant = &unit.ident;
        let spellings = &unit.spellings;
        quote! { Self::#variant => &[#(#spellings),*], }
    });
    let abbreviation_arms = units.iter().map(|unit| {
        let variant = &unit.ident;
        let abbreviations = &unit.abbreviations;
        quote! { Self::#variant => &[#(#abbreviations),*], }
    });

    let tag_consts = units.iter().flat_map(|unit| {
        let variant = &unit.ident;
        unit.tags.iter().map(move |tag| {
            let doc = format!("Alias tag for [`{}::{}`].", name, variant);
            quote! {
                #[doc = #doc]
                #[allow(non_upper_case_globals)]
                pub const #tag: Self = Self::#variant;
            }
        })
    });

    let display_method = if compact {
        quote! { symbol }
    } else {
        quote! { label }
    };

    let mut methods = Vec::new();
    let mut targets = Vec::new();
    let mut method_docs = Vec::new();
    for unit in &units {
        for literal in &unit.literals {
            method_docs.push(format!(
                "Creates a quantity of `self` {} ([`{}::{}`]).",
                unit.label, name, unit.ident
            ));
            methods.push(literal.clone());
            targets.push(unit.ident.clone());
        }
    }
    let trait_doc = format!(
        "Literal constructors for [`{}`] quantities, one per unit name and alias (`50.{}()`).\n\n\
         Keyword spellings are raw identifiers (`12.r#in()`). Spellings that are not lowercase ASCII \
         identifiers (`KiB`, `m²`, `sq ft`) have no constructor; reach them through `FromStr` or \
         `Quantity::parse`.",
        name,
        snake_case(&base.to_string())
    );

    let expanded = quote! {
        impl crate::Unit for #name {
            const DIMENSION: &'static str = #dimension;
            const BASE: Self = Self::#base;
            const ALL: &'static [Self] = &[#(Self::#variants),*];
            const COMPACT: bool = #compact;

            #[inline]
            fn ratio(self) -> f64 {
                match self {
                    #(Self::#variants => (#ratios),)*
                }
            }

            fn name(self) -> &'static str {
                match self {
                    #(Self::#variants => #names,)*
                }
            }

            fn label(self) -> &'static str {
                match self {
                    #(Self::#variants => #labels,)*
                }
            }

            fn symbol(self) -> &'static str {
                match self {
                    #(Self::#variants => #symbols,)*
                }
            }

            fn aliases(self) -> &'static [&'static str] {
                match self {
                    #(#alias_arms)*
                }
            }

            fn abbreviations(self) -> &'static [&'static str] {
                match self {
                    #(#abbreviation_arms)*
                }
            }
        }

        impl #name {
            #(#tag_consts)*
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(crate::Unit::#display_method(*self))
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = crate::QuantityError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as crate::Unit>::from_name(s).ok_or_else(|| {
                    crate::QuantityError::unknown_unit(<Self as crate::Unit>::DIMENSION, s)
                })
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(crate::Unit::name(*self))
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                crate::quantity::deserialize_unit(deserializer)
            }
        }

        #[doc = #trait_doc]
        #vis trait #literals {
            #(
                #[doc = #method_docs]
                fn #methods(self) -> crate::Quantity<#name>;
            )*
        }

        impl #literals for f64 {
            #(
                #[inline]
                fn #methods(self) -> crate::Quantity<#name> {
                    crate::Quantity::new(self, #name::#targets)
                }
            )*
        }

        impl #literals for i64 {
            #(
                #[inline]
                fn #methods(self) -> crate::Quantity<#name> {
                    crate::Quantity::new(self as f64, #name::#targets)
                }
            )*
        }
    };

    Ok(expanded)
}

/// One variant of the unit enumeration, with every spelling resolved.
struct UnitDef {
    ident: Ident,
    ratio: Expr,
    symbol: LitStr,
    name: String,
    label: String,
    /// Every string `FromStr` accepts for this unit, canonical name first.
    spellings: Vec<String>,
    /// The symbol and the declared abbreviations; `FromStr` only takes these verbatim.
    abbreviations: Vec<String>,
    /// Method names of the literal-factory trait.
    literals: Vec<Ident>,
    tags: Vec<Ident>,
}

impl UnitDef {
    fn new(ident: Ident, attr: UnitAttribute) -> Self {
        let name = snake_case(&ident.to_string());
        let label = name.replace('_', " ");

        let mut abbreviations: Vec<String> = Vec::new();
        for spelling in core::iter::once(attr.symbol.value())
            .chain(attr.abbreviations.iter().map(LitStr::value))
        {
            if !abbreviations.contains(&spelling) {
                abbreviations.push(spelling);
            }
        }

        let mut spellings: Vec<String> = Vec::new();
        let candidates = [name.clone(), label.clone()]
            .into_iter()
            .chain(attr.aliases.iter().map(LitStr::value))
            .chain(abbreviations.iter().cloned());
        for spelling in candidates {
            if !spellings.contains(&spelling) {
                spellings.push(spelling);
            }
        }

        let literals = spellings
            .iter()
            .filter_map(|spelling| literal_ident(spelling, ident.span()))
            .collect();

        UnitDef {
            ident,
            ratio: attr.ratio,
            symbol: attr.symbol,
            name,
            label,
            spellings,
            abbreviations,
            literals,
            tags: attr.tags,
        }
    }
}

/// Parsed contents of the enum-level `#[unit(...)]` attribute.
struct DomainAttribute {
    dimension: LitStr,
    base: Ident,
    literals: Ident,
    compact: bool,
}

impl Parse for DomainAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut dimension: Option<LitStr> = None;
        let mut base: Option<Ident> = None;
        let mut literals: Option<Ident> = None;
        let mut compact = false;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "compact" => {
                    compact = true;
                }
                "dimension" => {
                    input.parse::<Token![=]>()?;
                    dimension = Some(input.parse()?);
                }
                "base" => {
                    input.parse::<Token![=]>()?;
                    base = Some(input.parse()?);
                }
                "literals" => {
                    input.parse::<Token![=]>()?;
                    literals = Some(input.parse()?);
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

        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let base = base
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `base`"))?;
        let literals = literals.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `literals`")
        })?;

        Ok(DomainAttribute {
            dimension,
            base,
            literals,
            compact,
        })
    }
}

/// Parsed contents of a variant-level `#[unit(...)]` attribute.
struct UnitAttribute {
    ratio: Expr,
    symbol: LitStr,
    aliases: Vec<LitStr>,
    abbreviations: Vec<LitStr>,
    tags: Vec<Ident>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut ratio: Option<Expr> = None;
        let mut symbol: Option<LitStr> = None;
        let mut aliases: Vec<LitStr> = Vec::new();
        let mut abbreviations: Vec<LitStr> = Vec::new();
        let mut tags: Vec<Ident> = Vec::new();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "ratio" => {
                    ratio = Some(input.parse()?);
                }
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "aliases" => {
                    let content;
                    syn::bracketed!(content in input);
                    let list = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
                    aliases.extend(list);
                }
                "abbreviations" => {
                    let content;
                    syn::bracketed!(content in input);
                    let list = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
                    abbreviations.extend(list);
                }
                "tags" => {
                    let content;
                    syn::bracketed!(content in input);
                    let list = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?;
                    tags.extend(list);
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

        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;
        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;

        Ok(UnitAttribute {
            ratio,
            symbol,
            aliases,
            abbreviations,
            tags,
        })
    }
}

fn parse_domain_attribute(attrs: &[Attribute]) -> syn::Result<DomainAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<DomainAttribute>();
        }
    }

    Err(syn::Error::new(
        Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

fn parse_unit_attribute(attrs: &[Attribute], variant: &Ident) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        variant.span(),
        format!("missing #[unit(...)] attribute on `{}`", variant),
    ))
}

/// `SquareFeet` -> `square_feet`.
fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// The literal-factory method name for a spelling, if it has one.
///
/// Only lowercase ASCII identifiers qualify. Keywords come out raw (`in` -> `r#in`); mixed-case symbols (`KiB`)
/// stay parse-only.
fn literal_ident(spelling: &str, span: Span) -> Option<Ident> {
    let mut chars = spelling.chars();
    let starts_lowercase = matches!(chars.next(), Some(c) if c.is_ascii_lowercase());
    let identifier_chars = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if !starts_lowercase || !identifier_chars {
        return None;
    }
    if syn::parse_str::<Ident>(spelling).is_ok() {
        Some(Ident::new(spelling, span))
    } else if matches!(spelling, "self" | "super" | "crate") {
        // Path keywords cannot be raw identifiers.
        None
    } else {
        Some(Ident::new_raw(spelling, span))
    }
}

fn check_unique_spellings(units: &[UnitDef]) -> syn::Result<()> {
    for (i, unit) in units.iter().enumerate() {
        for other in &units[i + 1..] {
            if let Some(spelling) = unit
                .spellings
                .iter()
                .find(|spelling| other.spellings.contains(spelling))
            {
                return Err(syn::Error::new(
                    other.ident.span(),
                    format!(
                        "spelling `{}` is claimed by both `{}` and `{}`",
                        spelling, unit.ident, other.ident
                    ),
                ));
            }
        }
    }
    Ok(())
}

fn check_unique_literals(units: &[UnitDef]) -> syn::Result<()> {
    let mut seen: Vec<(String, &Ident)> = Vec::new();
    for unit in units {
        for literal in &unit.literals {
            let literal = literal.to_string();
            if let Some((_, owner)) = seen.iter().find(|(name, _)| *name == literal) {
                return Err(syn::Error::new(
                    unit.ident.span(),
                    format!(
                        "literal `{}` is claimed by both `{}` and `{}`",
                        literal, owner, unit.ident
                    ),
                ));
            }
            seen.push((literal, &unit.ident));
        }
    }
    Ok(())
}
