//! # Container Common
//!
//! 这个 crate 提供了 Chuntian IoC 容器的公共数据模型和工具。
//!
//! ## 核心组件
//!
//! - [`Bean`] - Bean 标记 trait
//! - [`Autowired`] - 自动装配字段单元
//! - [`BeanRegistration`] - 编译期登记表的注册项
//! - [`NamingConventions`] - Bean 命名约定规范
//!
//! ## 设计原则
//!
//! - 基于编译期登记表的组件发现，不依赖运行时反射
//! - 实例一次分配、按引用共享，装配完成后注册表只读
//! - 约定优于配置

pub mod autowired;
pub mod component;
pub mod conventions;
pub mod errors;
pub mod metadata;
pub mod registration;

pub use autowired::*;
pub use component::*;
pub use conventions::*;
pub use errors::*;
pub use metadata::*;
pub use registration::*;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

/// 全局 Bean 登记表
static BEAN_REGISTRATIONS: Lazy<RwLock<Vec<BeanRegistration>>> =
    Lazy::new(|| RwLock::new(Vec::new()));

/// 提交一条 Bean 注册项
///
/// 由 `#[bean]` 宏生成的启动函数在进程启动时调用
pub fn submit_bean_registration(registration: BeanRegistration) {
    debug!(
        "提交 Bean 注册: {} ({})",
        registration.type_info.name, registration.module_path
    );
    BEAN_REGISTRATIONS.write().push(registration);
}

/// 获取当前登记表的快照（按提交顺序）
pub fn registered_beans() -> Vec<BeanRegistration> {
    BEAN_REGISTRATIONS.read().clone()
}
