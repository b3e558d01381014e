//! 宏工具函数

use proc_macro2::Span;
use syn::{Field, Ident, Lit, Meta, Type};

/// 从 `Autowired<T>` 字段类型中提取目标类型 `T`
pub fn extract_autowired_target(ty: &Type) -> Option<&Type> {
    match ty {
        Type::Path(type_path) => {
            let segment = type_path.path.segments.last()?;
            if segment.ident != "Autowired" {
                return None;
            }
            match &segment.arguments {
                syn::PathArguments::AngleBracketed(args) => match args.args.first()? {
                    syn::GenericArgument::Type(inner) => Some(inner),
                    _ => None,
                },
                _ => None,
            }
        }
        _ => None,
    }
}

/// 检查字段是否有特定属性
pub fn field_has_attribute(field: &Field, attr_name: &str) -> bool {
    field.attrs.iter().any(|attr| {
        attr.path()
            .get_ident()
            .map(|ident| ident == attr_name)
            .unwrap_or(false)
    })
}

/// 从字段属性中按键提取字符串值
///
/// 例如 `#[autowired(name = "target")]` 中提取 `name` 的值
pub fn extract_string_from_field_attr(field: &Field, attr_name: &str, key: &str) -> Option<String> {
    for attr in &field.attrs {
        if !attr
            .path()
            .get_ident()
            .map(|ident| ident == attr_name)
            .unwrap_or(false)
        {
            continue;
        }
        if let Meta::List(_) = attr.meta {
            let mut result = None;
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(key) {
                    let value = meta.value()?;
                    let lit: Lit = value.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        result = Some(lit_str.value());
                    }
                }
                Ok(())
            });
            if result.is_some() {
                return result;
            }
        }
    }
    None
}

/// 生成 Bean 注册函数的标识符
pub fn generate_registration_ident(struct_name: &str) -> Ident {
    Ident::new(
        &format!("__register_bean_{}", struct_name.to_lowercase()),
        Span::call_site(),
    )
}
