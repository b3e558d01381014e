//! Bean 注册项定义
//!
//! 编译期登记表中的一行，由 `#[bean]` 宏生成的启动函数在进程启动时提交。
//! 登记表取代了运行时反射：每一项携带类型元数据、零参构造函数、
//! 类型投影函数和字段注入点，正好是原来由运行时自省提供的那些信息。

use crate::errors::InjectionError;
use crate::metadata::TypeInfo;
use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// 共享的 Bean 实例句柄
///
/// 实例一经分配就不再重新分配，容器内外传递的都是同一份引用
pub type SharedInstance = Arc<dyn Any + Send + Sync>;

/// Bean 零参构造函数类型
pub type BeanConstructor =
    Arc<dyn Fn() -> Result<SharedInstance, Box<dyn Error + Send + Sync>> + Send + Sync>;

/// 类型投影函数类型
///
/// 将共享实例转换为某个暴露类型的 `Arc<T>` 句柄（装箱返回，由调用方拆箱）
pub type TypeProjection = Arc<dyn Fn(&SharedInstance) -> Option<Box<dyn Any>> + Send + Sync>;

/// 字段安装函数类型
///
/// 把已投影的目标句柄装入宿主实例的 `Autowired` 字段
pub type FieldInstaller =
    Arc<dyn Fn(&SharedInstance, Box<dyn Any>) -> Result<(), InjectionError> + Send + Sync>;

/// Bean 对外暴露的类型
///
/// 一个 Bean 总是暴露自身具体类型；`implements(...)` 中声明的每个 trait
/// 也各生成一项。类型兼容性查询就是在这张表上做显式匹配
#[derive(Clone)]
pub struct ProvidedType {
    /// 暴露类型信息
    pub type_info: TypeInfo,
    /// 投影函数
    pub project: TypeProjection,
}

impl ProvidedType {
    /// 创建新的暴露类型
    pub fn new(type_info: TypeInfo, project: TypeProjection) -> Self {
        Self { type_info, project }
    }
}

impl fmt::Debug for ProvidedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvidedType")
            .field("type_info", &self.type_info)
            .field("project", &"<function>")
            .finish()
    }
}

/// 字段注入点
#[derive(Clone)]
pub struct FieldInjector {
    /// 字段名称
    pub field_name: &'static str,
    /// 标注上显式指定的目标 Bean 名称
    pub explicit_name: Option<&'static str>,
    /// 字段声明的目标类型
    pub target_type: TypeInfo,
    /// 安装函数
    pub install: FieldInstaller,
}

impl FieldInjector {
    /// 创建新的字段注入点
    pub fn new(
        field_name: &'static str,
        explicit_name: Option<&'static str>,
        target_type: TypeInfo,
        install: FieldInstaller,
    ) -> Self {
        Self {
            field_name,
            explicit_name,
            target_type,
            install,
        }
    }
}

impl fmt::Debug for FieldInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInjector")
            .field("field_name", &self.field_name)
            .field("explicit_name", &self.explicit_name)
            .field("target_type", &self.target_type)
            .field("install", &"<function>")
            .finish()
    }
}

/// Bean 注册项
#[derive(Clone)]
pub struct BeanRegistration {
    /// 类型信息
    pub type_info: TypeInfo,
    /// 定义所在模块路径（扫描时的命名空间依据）
    pub module_path: &'static str,
    /// 标注上显式指定的 Bean 名称
    pub explicit_name: Option<&'static str>,
    /// 零参构造函数
    pub constructor: BeanConstructor,
    /// 对外暴露的类型列表（含自身具体类型）
    pub provides: Vec<ProvidedType>,
    /// 字段注入点列表（按声明顺序）
    pub injectors: Vec<FieldInjector>,
}

impl fmt::Debug for BeanRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanRegistration")
            .field("type_info", &self.type_info)
            .field("module_path", &self.module_path)
            .field("explicit_name", &self.explicit_name)
            .field("provides", &self.provides)
            .field("injectors", &self.injectors)
            .field("constructor", &"<function>")
            .finish()
    }
}
