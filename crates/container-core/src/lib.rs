//! # Container Core
//!
//! Chuntian IoC 容器的装配流水线与查询引擎。
//!
//! ## 核心组件
//!
//! - [`BeanScanner`] - 组件扫描器，在编译期登记表中发现候选类型
//! - [`BeanFactory`] - Bean 实例工厂，每个类型只实例化一次
//! - [`WiringResolver`] - 依赖装配器，按名称或声明类型注入字段
//! - [`BeanRegistry`] - Bean 注册表，装配完成后只读
//! - [`ApplicationContext`] - 应用上下文，暴露按类型/按名称的查询
//!
//! ## 使用示例
//!
//! ```ignore
//! use container_core::{bean, ApplicationContext, Autowired, BeanLookup};
//!
//! #[derive(Debug, Default)]
//! #[bean]
//! pub struct MessageRepository;
//!
//! #[derive(Debug, Default)]
//! #[bean(name = "greeter")]
//! pub struct GreetingService {
//!     #[autowired]
//!     repository: Autowired<MessageRepository>,
//! }
//!
//! let context = ApplicationContext::scan("my_app::components")?;
//! let service = context.get_bean::<GreetingService>()?;
//! ```

pub mod context;
pub mod factory;
pub mod registry;
pub mod scanner;
pub mod wiring;

pub use context::*;
pub use factory::*;
pub use registry::*;
pub use scanner::*;
pub use wiring::*;

pub use container_common::{
    Autowired, Bean, BeanRegistration, ConfigurationError, ContainerError, ContainerResult,
    InjectionError, NamingConventions, NoSuchBeanError, NoUniqueBeanError, SharedInstance,
    TypeInfo,
};
pub use container_macros::bean;
