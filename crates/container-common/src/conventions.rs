//! 约定规范定义
//!
//! 提供 Bean 命名和命名空间匹配的约定规范

use crate::metadata::TypeInfo;

/// 命名约定规范
#[derive(Debug)]
pub struct NamingConventions;

impl NamingConventions {
    /// 推导默认 Bean 名称：类型简单名首字母小写
    pub fn derive_bean_name(type_name: &str) -> String {
        let mut chars = type_name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// 解析 Bean 名称：非空的显式名称优先，否则按约定推导
    pub fn resolve_bean_name(explicit: Option<&str>, type_info: &TypeInfo) -> String {
        match explicit {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => Self::derive_bean_name(&type_info.name),
        }
    }

    /// 判断模块路径是否位于指定命名空间之下
    ///
    /// 按 `::` 段边界匹配：`a::b` 覆盖 `a::b` 与 `a::b::c`，不覆盖 `a::bc`
    pub fn module_in_namespace(module_path: &str, namespace: &str) -> bool {
        module_path == namespace
            || module_path
                .strip_prefix(namespace)
                .map_or(false, |rest| rest.starts_with("::"))
    }
}
