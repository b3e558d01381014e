//! 依赖自动装配
//!
//! 在注册表上执行一次字段注入。所有实例在装配开始前已经全部分配完毕，
//! 注入的是共享句柄而非拷贝，所以互相依赖的 Bean 也能在同一轮中完成装配：
//! 先被注入的一方持有的句柄，会在对方稍后完成注入时一并呈现装配后的状态。
//! 这一别名行为是有意保留的，不做拓扑排序，也不做循环检测。

use crate::registry::BeanRegistry;
use container_common::{ConfigurationError, ContainerError, NamingConventions, NoSuchBeanError};
use tracing::debug;

/// 依赖装配器
#[derive(Debug, Default)]
pub struct WiringResolver;

impl WiringResolver {
    /// 对注册表中的全部 Bean 执行字段注入
    ///
    /// 按注册顺序逐个 Bean、按声明顺序逐个字段处理；目标名称取标注上的
    /// 显式名称，否则按字段声明类型的简单名推导（与 Bean 命名同一条规则）
    pub fn wire(registry: &BeanRegistry) -> Result<(), ContainerError> {
        for definition in registry.iter() {
            for injector in &definition.injectors {
                let target_name = NamingConventions::resolve_bean_name(
                    injector.explicit_name,
                    &injector.target_type,
                );
                let target = registry.get(&target_name).ok_or_else(|| {
                    NoSuchBeanError::WiringTarget {
                        target_name: target_name.clone(),
                    }
                })?;
                let provided = target
                    .provides
                    .iter()
                    .find(|provided| provided.type_info.id == injector.target_type.id)
                    .ok_or_else(|| {
                        ConfigurationError::injection_refused(
                            injector.field_name,
                            definition.type_info.name.clone(),
                            format!(
                                "目标 Bean {} 未按类型 {} 暴露",
                                target_name, injector.target_type.name
                            ),
                        )
                    })?;
                let projected = (provided.project)(&target.instance).ok_or_else(|| {
                    ConfigurationError::injection_refused(
                        injector.field_name,
                        definition.type_info.name.clone(),
                        format!("目标 Bean {} 的实例投影失败", target_name),
                    )
                })?;
                (injector.install)(&definition.instance, projected).map_err(|error| {
                    ConfigurationError::injection_refused(
                        injector.field_name,
                        definition.type_info.name.clone(),
                        error.to_string(),
                    )
                })?;
                debug!(
                    "注入字段: {}.{} <- {}",
                    definition.type_info.name, injector.field_name, target_name
                );
            }
        }
        Ok(())
    }
}
