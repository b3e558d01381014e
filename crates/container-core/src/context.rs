//! 应用上下文
//!
//! 装配完成后的容器与查询接口

use crate::factory::BeanFactory;
use crate::registry::{BeanDefinition, BeanRegistry};
use crate::scanner::BeanScanner;
use crate::wiring::WiringResolver;
use container_common::{ContainerError, NoSuchBeanError, NoUniqueBeanError, TypeInfo};
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// 上下文装配阶段
///
/// 严格单向推进：`Scanning → Instantiating → Wiring → Ready`，
/// 全部在构造调用内同步执行。任一阶段失败都会使整个调用失败，
/// 调用方拿到的要么是就绪的上下文，要么是错误，不存在部分装配的中间态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextPhase {
    /// 扫描：发现候选类型并解析名称
    Scanning,
    /// 实例化：调用零参构造函数并填充注册表
    Instantiating,
    /// 装配：解析依赖并注入字段
    Wiring,
    /// 就绪：注册表只读，可以查询
    Ready,
}

/// Bean 查询接口
pub trait BeanLookup {
    /// 按类型查找唯一的 Bean
    ///
    /// 类型兼容性是协变的：具体类型本身和 `implements(...)` 声明的
    /// trait 都算匹配。恰好一个匹配返回实例句柄；零个匹配返回
    /// [`NoSuchBeanError`]；多于一个返回 [`NoUniqueBeanError`]
    fn get_bean<T: ?Sized + 'static>(&self) -> Result<Arc<T>, ContainerError>;

    /// 按名称和类型查找 Bean
    ///
    /// 先按名称精确匹配再校验类型兼容性；没有命中返回 [`NoSuchBeanError`]
    fn get_bean_named<T: ?Sized + 'static>(&self, name: &str) -> Result<Arc<T>, ContainerError>;

    /// 查找全部类型兼容的 Bean
    ///
    /// 返回名称到实例的映射；没有匹配时返回空映射而不是错误
    fn get_all_beans<T: ?Sized + 'static>(&self) -> HashMap<String, Arc<T>>;
}

/// 应用上下文
///
/// 就绪后注册表在逻辑上不可变：不再有结构性插入或删除，实例身份不再
/// 变化。上下文通过所有权转移或 `Arc` 共享发布给其他线程时，Rust 的
/// 所有权模型本身就保证了装配结果对读取方可见，多线程并发查询是安全的
pub struct ApplicationContext {
    registry: BeanRegistry,
    phase: ContextPhase,
}

impl ApplicationContext {
    /// 扫描指定命名空间并完成装配
    ///
    /// 依次执行扫描、实例化、装配三个阶段；任何阶段失败都会中止整个
    /// 调用，调用方不会拿到部分装配的上下文
    pub fn scan(namespace: &str) -> Result<Self, ContainerError> {
        info!("开始装配应用上下文, 命名空间: {}", namespace);

        debug!("进入阶段: {:?}", ContextPhase::Scanning);
        let candidates = BeanScanner::new(namespace).scan()?;

        debug!("进入阶段: {:?}", ContextPhase::Instantiating);
        let registry = BeanFactory::instantiate(candidates)?;

        debug!("进入阶段: {:?}", ContextPhase::Wiring);
        WiringResolver::wire(&registry)?;

        info!("应用上下文装配完成, 共 {} 个 Bean", registry.len());
        Ok(Self {
            registry,
            phase: ContextPhase::Ready,
        })
    }

    /// 当前装配阶段；成功返回的上下文总是 [`ContextPhase::Ready`]
    pub fn phase(&self) -> ContextPhase {
        self.phase
    }

    /// 注册的 Bean 数量
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// 上下文是否为空
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// 是否存在指定名称的 Bean
    pub fn contains_bean(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// 全部 Bean 名称（注册顺序）
    pub fn bean_names(&self) -> &[String] {
        self.registry.names()
    }

    /// 只读访问注册表
    pub fn registry(&self) -> &BeanRegistry {
        &self.registry
    }

    /// 按类型收集全部兼容的 Bean 定义
    fn assignable_definitions(&self, type_id: TypeId) -> Vec<&BeanDefinition> {
        self.registry
            .iter()
            .filter(|definition| definition.is_assignable_to(type_id))
            .collect()
    }
}

impl BeanLookup for ApplicationContext {
    fn get_bean<T: ?Sized + 'static>(&self) -> Result<Arc<T>, ContainerError> {
        let matches = self.assignable_definitions(TypeId::of::<T>());
        match matches.as_slice() {
            [] => Err(NoSuchBeanError::ByType {
                type_name: TypeInfo::of::<T>().name,
            }
            .into()),
            [single] => single.project_as::<T>().ok_or_else(|| {
                NoSuchBeanError::ByType {
                    type_name: TypeInfo::of::<T>().name,
                }
                .into()
            }),
            _ => Err(NoUniqueBeanError {
                type_name: TypeInfo::of::<T>().name,
                candidates: matches
                    .iter()
                    .map(|definition| definition.name.clone())
                    .collect(),
            }
            .into()),
        }
    }

    fn get_bean_named<T: ?Sized + 'static>(&self, name: &str) -> Result<Arc<T>, ContainerError> {
        self.registry
            .get(name)
            .and_then(|definition| definition.project_as::<T>())
            .ok_or_else(|| {
                NoSuchBeanError::ByNameAndType {
                    name: name.to_string(),
                    type_name: TypeInfo::of::<T>().name,
                }
                .into()
            })
    }

    fn get_all_beans<T: ?Sized + 'static>(&self) -> HashMap<String, Arc<T>> {
        self.registry
            .iter()
            .filter_map(|definition| {
                definition
                    .project_as::<T>()
                    .map(|instance| (definition.name.clone(), instance))
            })
            .collect()
    }
}
