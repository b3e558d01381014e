//! 组件扫描器
//!
//! 在编译期登记表中发现指定命名空间下的 Bean 候选并解析名称

use container_common::{
    registered_beans, BeanRegistration, ConfigurationError, NamingConventions,
};
use tracing::{debug, info, warn};

/// 已解析名称的 Bean 候选
#[derive(Debug, Clone)]
pub struct ScannedBean {
    /// 解析后的 Bean 名称
    pub name: String,
    /// 登记表中的注册项
    pub registration: BeanRegistration,
}

/// 组件扫描器
///
/// 输入是一个命名空间（模块路径，例如 `"my_app::components"`）；
/// 输出是按登记顺序排列的候选列表，顺序在单次运行内是确定的
#[derive(Debug, Clone)]
pub struct BeanScanner {
    namespace: String,
}

impl BeanScanner {
    /// 创建指向指定命名空间的扫描器
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// 扫描目标命名空间
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// 扫描命名空间并解析 Bean 名称
    ///
    /// 解析出的名称在候选集中必须唯一，重名直接拒绝而不是后者覆盖前者
    pub fn scan(&self) -> Result<Vec<ScannedBean>, ConfigurationError> {
        if self.namespace.trim().is_empty() {
            return Err(ConfigurationError::ScanTargetMissing);
        }

        let mut scanned: Vec<ScannedBean> = Vec::new();
        for registration in registered_beans() {
            if !NamingConventions::module_in_namespace(registration.module_path, &self.namespace) {
                continue;
            }
            let name = NamingConventions::resolve_bean_name(
                registration.explicit_name,
                &registration.type_info,
            );
            if let Some(existing) = scanned.iter().find(|candidate| candidate.name == name) {
                return Err(ConfigurationError::DuplicateBeanName {
                    name,
                    first_type: existing.registration.type_info.name.clone(),
                    second_type: registration.type_info.name.clone(),
                });
            }
            debug!("发现 Bean: {} ({})", name, registration.type_info.full_path);
            scanned.push(ScannedBean { name, registration });
        }

        if scanned.is_empty() {
            warn!("命名空间 {} 下未发现任何 Bean", self.namespace);
        } else {
            info!(
                "扫描命名空间 {} 完成, 发现 {} 个 Bean",
                self.namespace,
                scanned.len()
            );
        }
        Ok(scanned)
    }
}
