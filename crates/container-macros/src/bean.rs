//! Bean 注册宏实现

use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Expr, Fields, Ident, ItemStruct, Lit, Meta, Result, Token, Type};

use crate::utils;

/// Bean 配置参数
#[derive(Debug, Clone, Default)]
pub struct BeanArgs {
    /// 自定义 Bean 名称
    pub name: Option<String>,
    /// 额外暴露的 trait 列表
    pub implements: Vec<syn::Path>,
    /// 零参工厂函数路径
    pub factory: Option<syn::Path>,
}

impl Parse for BeanArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = BeanArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("name") {
                        if let Expr::Lit(expr_lit) = &nv.value {
                            if let Lit::Str(lit_str) = &expr_lit.lit {
                                args.name = Some(lit_str.value());
                                continue;
                            }
                        }
                        return Err(syn::Error::new_spanned(&nv.value, "name 参数需要字符串字面量"));
                    } else if nv.path.is_ident("factory") {
                        if let Expr::Lit(expr_lit) = &nv.value {
                            if let Lit::Str(lit_str) = &expr_lit.lit {
                                args.factory = Some(lit_str.parse()?);
                                continue;
                            }
                        }
                        return Err(syn::Error::new_spanned(
                            &nv.value,
                            "factory 参数需要函数路径字符串",
                        ));
                    }
                    return Err(syn::Error::new_spanned(nv.path, "未知的 bean 参数"));
                }
                Meta::List(list) => {
                    if list.path.is_ident("implements") {
                        let traits = list
                            .parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)?;
                        args.implements.extend(traits);
                    } else {
                        return Err(syn::Error::new_spanned(list.path, "未知的 bean 参数"));
                    }
                }
                Meta::Path(path) => {
                    return Err(syn::Error::new_spanned(path, "未知的 bean 参数"));
                }
            }
        }

        Ok(args)
    }
}

/// 自动装配字段描述
struct AutowiredField {
    /// 字段标识符
    ident: Ident,
    /// 显式目标 Bean 名称
    explicit_name: Option<String>,
    /// `Autowired<T>` 中的目标类型 `T`
    target_type: Type,
}

/// 实现 `#[bean]` 宏
pub fn bean_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let bean_args = if args.is_empty() {
        BeanArgs::default()
    } else {
        match syn::parse::<BeanArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let mut input_struct = parse_macro_input!(input as ItemStruct);

    if !input_struct.generics.params.is_empty() {
        return syn::Error::new_spanned(&input_struct.generics, "带泛型参数的类型不支持标注为 Bean")
            .to_compile_error()
            .into();
    }

    let autowired_fields = match collect_autowired_fields(&mut input_struct) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    let struct_name = &input_struct.ident;
    let struct_name_string = struct_name.to_string();

    // Bean trait 实现：显式名称由宏参数覆盖
    let bean_trait_impl = match &bean_args.name {
        Some(name) => quote! {
            impl container_common::Bean for #struct_name {
                fn explicit_name() -> Option<&'static str> {
                    Some(#name)
                }
            }
        },
        None => quote! {
            impl container_common::Bean for #struct_name {}
        },
    };

    let explicit_name_tokens = match &bean_args.name {
        Some(name) => quote! { Some(#name) },
        None => quote! { None },
    };

    // 零参构造函数：默认走 Default，factory 参数指定可失败的工厂
    let constructor_tokens = match &bean_args.factory {
        Some(path) => quote! {
            ::std::sync::Arc::new(|| {
                #path()
                    .map(|instance| {
                        ::std::sync::Arc::new(instance) as container_common::SharedInstance
                    })
                    .map_err(::std::convert::Into::into)
            })
        },
        None => quote! {
            ::std::sync::Arc::new(|| {
                ::std::result::Result::Ok(
                    ::std::sync::Arc::new(<#struct_name as ::std::default::Default>::default())
                        as container_common::SharedInstance,
                )
            })
        },
    };

    // 暴露类型列表：自身具体类型 + implements(...) 声明的每个 trait
    let mut provide_entries = Vec::new();
    provide_entries.push(quote! {
        container_common::ProvidedType::new(
            container_common::TypeInfo::of::<#struct_name>(),
            ::std::sync::Arc::new(|instance| {
                instance
                    .clone()
                    .downcast::<#struct_name>()
                    .ok()
                    .map(|typed| {
                        ::std::boxed::Box::new(typed) as ::std::boxed::Box<dyn ::std::any::Any>
                    })
            }),
        )
    });
    for trait_path in &bean_args.implements {
        provide_entries.push(quote! {
            container_common::ProvidedType::new(
                container_common::TypeInfo::of::<dyn #trait_path>(),
                ::std::sync::Arc::new(|instance| {
                    instance
                        .clone()
                        .downcast::<#struct_name>()
                        .ok()
                        .map(|typed| {
                            ::std::boxed::Box::new(typed as ::std::sync::Arc<dyn #trait_path>)
                                as ::std::boxed::Box<dyn ::std::any::Any>
                        })
                }),
            )
        });
    }

    // 字段注入点：注入代码展开在结构体定义处，可以访问私有字段
    let mut injector_entries = Vec::new();
    for field in &autowired_fields {
        let field_ident = &field.ident;
        let field_name_string = field_ident.to_string();
        let explicit_tokens = match &field.explicit_name {
            Some(name) => quote! { Some(#name) },
            None => quote! { None },
        };
        let target_type = &field.target_type;
        injector_entries.push(quote! {
            container_common::FieldInjector::new(
                #field_name_string,
                #explicit_tokens,
                container_common::TypeInfo::of::<#target_type>(),
                ::std::sync::Arc::new(|owner, value| {
                    let owner = owner.downcast_ref::<#struct_name>().ok_or_else(|| {
                        container_common::InjectionError::OwnerTypeMismatch {
                            expected: #struct_name_string.to_string(),
                        }
                    })?;
                    let value = value
                        .downcast::<::std::sync::Arc<#target_type>>()
                        .map_err(|_| container_common::InjectionError::TargetTypeMismatch {
                            expected: ::std::any::type_name::<#target_type>().to_string(),
                        })?;
                    owner.#field_ident.install(*value)
                }),
            )
        });
    }

    // 启动时向全局登记表提交注册项
    let registration_fn_name = utils::generate_registration_ident(&struct_name_string);
    let registration_code = quote! {
        #[ctor::ctor]
        fn #registration_fn_name() {
            let constructor: container_common::BeanConstructor = #constructor_tokens;

            container_common::submit_bean_registration(container_common::BeanRegistration {
                type_info: container_common::TypeInfo::of::<#struct_name>(),
                module_path: module_path!(),
                explicit_name: #explicit_name_tokens,
                constructor,
                provides: vec![#(#provide_entries),*],
                injectors: vec![#(#injector_entries),*],
            });
        }
    };

    let expanded = quote! {
        #input_struct

        #bean_trait_impl

        #registration_code
    };

    TokenStream::from(expanded)
}

/// 收集并剥离结构体中的 `#[autowired]` 字段标记
fn collect_autowired_fields(input: &mut ItemStruct) -> Result<Vec<AutowiredField>> {
    let mut collected = Vec::new();

    match &mut input.fields {
        Fields::Named(fields) => {
            for field in fields.named.iter_mut() {
                if !utils::field_has_attribute(field, "autowired") {
                    continue;
                }
                let explicit_name =
                    utils::extract_string_from_field_attr(field, "autowired", "name");
                field.attrs.retain(|attr| !attr.path().is_ident("autowired"));

                let ident = match &field.ident {
                    Some(ident) => ident.clone(),
                    None => continue,
                };
                let target_type = match utils::extract_autowired_target(&field.ty) {
                    Some(inner) => inner.clone(),
                    None => {
                        return Err(syn::Error::new_spanned(
                            &field.ty,
                            "autowired 字段类型必须是 Autowired<T>",
                        ))
                    }
                };
                collected.push(AutowiredField {
                    ident,
                    explicit_name,
                    target_type,
                });
            }
        }
        Fields::Unnamed(fields) => {
            for field in &fields.unnamed {
                if utils::field_has_attribute(field, "autowired") {
                    return Err(syn::Error::new_spanned(field, "autowired 仅支持具名字段"));
                }
            }
        }
        Fields::Unit => {}
    }

    Ok(collected)
}
