//! 元数据定义
//!
//! 提供 Bean 类型的元数据信息

use std::any::TypeId;

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型简单名称（不含模块路径）
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 完整类型路径
    pub full_path: String,
}

impl TypeInfo {
    /// 从类型获取类型信息
    ///
    /// 同时支持具体类型和 trait object（例如 `TypeInfo::of::<dyn MyTrait>()`）
    pub fn of<T: ?Sized + 'static>() -> Self {
        let full_path = std::any::type_name::<T>();
        Self {
            name: Self::simple_name_of(full_path).to_string(),
            id: TypeId::of::<T>(),
            full_path: full_path.to_string(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        &self.name
    }

    /// 从完整类型路径提取简单名称
    ///
    /// 去掉 `dyn ` 前缀与泛型参数，保留最后一个路径段
    fn simple_name_of(full_path: &str) -> &str {
        let trimmed = full_path.strip_prefix("dyn ").unwrap_or(full_path);
        let without_generics = trimmed.split('<').next().unwrap_or(trimmed);
        without_generics
            .rsplit("::")
            .next()
            .unwrap_or(without_generics)
    }
}
