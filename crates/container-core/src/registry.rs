//! Bean 注册表
//!
//! 名称到 Bean 定义的映射；扫描和实例化阶段一次性构建，
//! 装配阶段只通过实例内部的 `Autowired` 单元写入字段，
//! 进入就绪状态后整体只读，条目不会被移除

use container_common::{FieldInjector, ProvidedType, SharedInstance, TypeInfo};
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Bean 定义
#[derive(Clone)]
pub struct BeanDefinition {
    /// Bean 名称（注册表主键）
    pub name: String,
    /// 声明类型信息
    pub type_info: TypeInfo,
    /// 共享实例句柄；构造后不再重新分配
    pub instance: SharedInstance,
    /// 对外暴露的类型列表
    pub provides: Vec<ProvidedType>,
    /// 字段注入点列表（按声明顺序）
    pub injectors: Vec<FieldInjector>,
}

impl BeanDefinition {
    /// 判断该 Bean 是否可以按指定类型暴露
    ///
    /// 这是显式的多态匹配：自身具体类型和声明实现的每个 trait 都算兼容
    pub fn is_assignable_to(&self, type_id: TypeId) -> bool {
        self.provides
            .iter()
            .any(|provided| provided.type_info.id == type_id)
    }

    /// 将实例按指定类型投影为共享句柄
    pub fn project_as<T: ?Sized + 'static>(&self) -> Option<Arc<T>> {
        let provided = self
            .provides
            .iter()
            .find(|provided| provided.type_info.id == TypeId::of::<T>())?;
        let boxed = (provided.project)(&self.instance)?;
        boxed.downcast::<Arc<T>>().ok().map(|typed| *typed)
    }
}

impl fmt::Debug for BeanDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanDefinition")
            .field("name", &self.name)
            .field("type_info", &self.type_info)
            .field("provides", &self.provides)
            .field("injectors", &self.injectors)
            .field("instance", &"<instance>")
            .finish()
    }
}

/// Bean 注册表
#[derive(Debug, Default)]
pub struct BeanRegistry {
    /// Bean 名称，按注册顺序
    names: Vec<String>,
    /// 名称到定义的映射
    entries: HashMap<String, BeanDefinition>,
}

impl BeanRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入 Bean 定义
    ///
    /// 名称唯一性由扫描阶段保证（重名在扫描时即被拒绝）
    pub(crate) fn insert(&mut self, definition: BeanDefinition) {
        self.names.push(definition.name.clone());
        self.entries.insert(definition.name.clone(), definition);
    }

    /// 按名称查找 Bean 定义
    pub fn get(&self, name: &str) -> Option<&BeanDefinition> {
        self.entries.get(name)
    }

    /// 是否存在指定名称的 Bean
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// 按注册顺序遍历全部 Bean 定义
    pub fn iter(&self) -> impl Iterator<Item = &BeanDefinition> {
        self.names.iter().filter_map(|name| self.entries.get(name))
    }

    /// 注册的 Bean 数量
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// 注册表是否为空
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// 全部 Bean 名称（注册顺序）
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
