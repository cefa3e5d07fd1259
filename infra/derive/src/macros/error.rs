use fxhash::{FxHashMap, FxHashSet};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Type, Variant};

const DERIVES: [&str; 5] = ["Debug", "Clone", "PartialEq", "Eq", "Error"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum FieldShape {
    Text,
    OptionalText,
    Other,
}

impl FieldShape {
    const fn is_text(self) -> bool {
        matches!(self, Self::Text | Self::OptionalText)
    }
}

struct FieldMeta<'a> {
    ident: &'a Ident,
    shape: FieldShape,
}

struct VariantMeta<'a> {
    ident: &'a Ident,
    fields: Vec<FieldMeta<'a>>,
    cfg_attrs: Vec<Attribute>,
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let vis = &input.vis;

    let Data::Enum(data) = &input.data else {
        return syn::Error::new(Span::call_site(), "gvm_error can only be applied to enums")
            .to_compile_error();
    };
    if data.variants.is_empty() {
        return syn::Error::new(name.span(), "gvm_error requires at least one variant")
            .to_compile_error();
    }

    let variants: Vec<VariantMeta<'_>> = match data.variants.iter().map(parse_variant).collect() {
        Ok(v) => v,
        Err(err) => return err,
    };
    let accessor_fields = match text_field_names(&variants) {
        Ok(names) => names,
        Err(err) => return err,
    };

    let derived_traits = derived_trait_names(&input);
    let derive_tokens: Vec<TokenStream> = DERIVES
        .iter()
        .filter(|t| !derived_traits.contains(**t))
        .map(|t| match *t {
            "Error" => quote! { ::thiserror::Error },
            other => {
                let ident = Ident::new(other, Span::call_site());
                quote! { #ident }
            },
        })
        .collect();
    let extra_derives = if derive_tokens.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#derive_tokens),*)] }
    };

    let accessors = accessor_fields.iter().map(|field| generate_accessor(vis, field, &variants));
    let variant_name = generate_variant_name(vis, &variants);

    quote! {
        #extra_derives
        #input

        /// Result alias carrying this crate's error type.
        #vis type Result<T, E = #name> = ::std::result::Result<T, E>;

        impl #name {
            #(#accessors)*
            #variant_name
        }
    }
}

fn parse_variant(v: &Variant) -> Result<VariantMeta<'_>, TokenStream> {
    let fields = match &v.fields {
        Fields::Named(fields) => fields,
        Fields::Unnamed(_) => {
            return Err(syn::Error::new(
                v.ident.span(),
                "gvm_error requires named fields, found a tuple variant",
            )
            .to_compile_error());
        },
        Fields::Unit => {
            return Err(syn::Error::new(
                v.ident.span(),
                "gvm_error requires named fields, found a unit variant",
            )
            .to_compile_error());
        },
    };

    if let Some(field) = find_source_field(fields) {
        let span = field.ident.as_ref().map_or_else(Span::call_site, Ident::span);
        return Err(syn::Error::new(span, "gvm_error values do not wrap other errors")
            .to_compile_error());
    }

    let fields = fields
        .named
        .iter()
        .filter_map(|field| {
            field.ident.as_ref().map(|ident| FieldMeta { ident, shape: field_shape(&field.ty) })
        })
        .collect();
    let cfg_attrs = v.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).cloned().collect();

    Ok(VariantMeta { ident: &v.ident, fields, cfg_attrs })
}

fn find_source_field(fields: &syn::FieldsNamed) -> Option<&syn::Field> {
    fields.named.iter().find(|field| {
        let is_source_name = field.ident.as_ref().is_some_and(|ident| ident == "source");
        is_source_name || field_has_attr(field, "source") || field_has_attr(field, "from")
    })
}

/// Collects the text field names in declaration order, rejecting names whose
/// shape is text in one variant and something else in another.
fn text_field_names<'a>(variants: &[VariantMeta<'a>]) -> Result<Vec<&'a Ident>, TokenStream> {
    let mut seen: FxHashMap<String, bool> = FxHashMap::default();
    let mut ordered = Vec::new();

    for field in variants.iter().flat_map(|v| v.fields.iter()) {
        let key = field.ident.to_string();
        match seen.get(&key) {
            Some(&is_text) if is_text != field.shape.is_text() => {
                return Err(syn::Error::new(
                    field.ident.span(),
                    format!("field `{key}` must be text in every variant or in none"),
                )
                .to_compile_error());
            },
            Some(_) => {},
            None => {
                seen.insert(key, field.shape.is_text());
                if field.shape.is_text() {
                    ordered.push(field.ident);
                }
            },
        }
    }

    Ok(ordered)
}

fn generate_accessor(
    vis: &syn::Visibility,
    field: &Ident,
    variants: &[VariantMeta<'_>],
) -> TokenStream {
    let arms = variants.iter().filter_map(|v| {
        let meta = v.fields.iter().find(|f| f.ident == field)?;
        let cfg_attrs = &v.cfg_attrs;
        let ident = v.ident;
        let value = match meta.shape {
            FieldShape::Text => {
                quote! { ::std::option::Option::Some(::std::convert::AsRef::<str>::as_ref(#field)) }
            },
            _ => quote! { #field.as_deref() },
        };
        Some(quote! { #(#cfg_attrs)* Self::#ident { #field, .. } => #value, })
    });
    let doc = format!("Returns the `{field}` text, or `None` when the variant has none.");

    quote! {
        #[doc = #doc]
        #[must_use]
        #[allow(unreachable_patterns)]
        #vis fn #field(&self) -> ::std::option::Option<&str> {
            match self {
                #(#arms)*
                _ => ::std::option::Option::None,
            }
        }
    }
}

fn generate_variant_name(vis: &syn::Visibility, variants: &[VariantMeta<'_>]) -> TokenStream {
    let arms = variants.iter().map(|v| {
        let cfg_attrs = &v.cfg_attrs;
        let ident = v.ident;
        let label = ident.to_string();
        quote! { #(#cfg_attrs)* Self::#ident { .. } => #label, }
    });

    quote! {
        /// Returns the name of the variant, suitable for log fields.
        #[must_use]
        #vis const fn variant_name(&self) -> &'static str {
            match self {
                #(#arms)*
            }
        }
    }
}

fn field_has_attr(field: &syn::Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

fn derived_trait_names(input: &DeriveInput) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in &input.attrs {
        if !attr.path().is_ident("derive") {
            continue;
        }

        let _ = attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.segments.last().map(|seg| seg.ident.to_string()) {
                traits.insert(ident);
            }
            Ok(())
        });
    }

    traits
}

fn field_shape(ty: &Type) -> FieldShape {
    if is_cow_str(ty) {
        return FieldShape::Text;
    }
    let Type::Path(path) = ty else {
        return FieldShape::Other;
    };
    let Some(segment) = path.path.segments.last() else {
        return FieldShape::Other;
    };
    if segment.ident != "Option" {
        return FieldShape::Other;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return FieldShape::Other;
    };
    match args.args.first() {
        Some(syn::GenericArgument::Type(inner)) if is_cow_str(inner) => FieldShape::OptionalText,
        _ => FieldShape::Other,
    }
}

fn is_cow_str(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if segment.ident != "Cow" {
        return false;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };
    let mut args_iter = args.args.iter();
    let Some(syn::GenericArgument::Lifetime(lt)) = args_iter.next() else {
        return false;
    };
    if lt.ident != "static" {
        return false;
    }
    let Some(syn::GenericArgument::Type(Type::Path(str_path))) = args_iter.next() else {
        return false;
    };
    let Some(str_seg) = str_path.path.segments.last() else {
        return false;
    };
    str_seg.ident == "str"
}
