//! Bean 标记 trait 定义

use crate::conventions::NamingConventions;
use crate::metadata::TypeInfo;

/// Bean 标记 trait
///
/// 由 `#[bean]` 宏自动实现；显式名称通过宏参数 `name = "..."` 覆盖
pub trait Bean: Send + Sync + 'static {
    /// 标注上显式指定的 Bean 名称
    fn explicit_name() -> Option<&'static str>
    where
        Self: Sized,
    {
        None
    }

    /// 解析后的 Bean 名称：显式名称优先，否则取类型简单名首字母小写
    fn bean_name() -> String
    where
        Self: Sized,
    {
        NamingConventions::resolve_bean_name(Self::explicit_name(), &Self::type_info())
    }

    /// 类型信息
    fn type_info() -> TypeInfo
    where
        Self: Sized,
    {
        TypeInfo::of::<Self>()
    }
}
