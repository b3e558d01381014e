//! Bean 实例工厂
//!
//! 为每个候选调用零参构造函数并填充注册表；每个类型只实例化一次

use crate::registry::{BeanDefinition, BeanRegistry};
use crate::scanner::ScannedBean;
use container_common::ConfigurationError;
use tracing::debug;

/// Bean 实例工厂
#[derive(Debug, Default)]
pub struct BeanFactory;

impl BeanFactory {
    /// 实例化全部候选并构建注册表
    ///
    /// 任何一个构造函数失败都会使整个调用失败，不会返回部分填充的注册表
    pub fn instantiate(candidates: Vec<ScannedBean>) -> Result<BeanRegistry, ConfigurationError> {
        let mut registry = BeanRegistry::new();

        for candidate in candidates {
            let ScannedBean { name, registration } = candidate;
            let instance = (registration.constructor)().map_err(|error| {
                ConfigurationError::construction_failed(
                    registration.type_info.name.clone(),
                    error.to_string(),
                )
            })?;
            debug!("实例化 Bean: {} ({})", name, registration.type_info.name);
            registry.insert(BeanDefinition {
                name,
                type_info: registration.type_info,
                instance,
                provides: registration.provides,
                injectors: registration.injectors,
            });
        }

        Ok(registry)
    }
}
