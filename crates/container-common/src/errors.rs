//! 错误类型定义

use thiserror::Error;

/// 容器装配错误类型
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("未指定要扫描的命名空间")]
    ScanTargetMissing,

    #[error("Bean 名称重复: {name}, 冲突类型: {first_type} 与 {second_type}")]
    DuplicateBeanName {
        name: String,
        first_type: String,
        second_type: String,
    },

    #[error("Bean 实例创建失败: {type_name}, 原因: {message}")]
    ConstructionFailed { type_name: String, message: String },

    #[error("字段注入失败: {field_name}, 所属类型: {type_name}, 原因: {message}")]
    InjectionRefused {
        field_name: String,
        type_name: String,
        message: String,
    },
}

impl ConfigurationError {
    /// 创建实例创建失败错误
    pub fn construction_failed(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConstructionFailed {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// 创建字段注入失败错误
    pub fn injection_refused(
        field_name: impl Into<String>,
        type_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InjectionRefused {
            field_name: field_name.into(),
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

/// Bean 缺失错误类型
#[derive(Error, Debug)]
pub enum NoSuchBeanError {
    #[error("找不到类型为 {type_name} 的 Bean")]
    ByType { type_name: String },

    #[error("找不到名称为 {name} 且类型为 {type_name} 的 Bean")]
    ByNameAndType { name: String, type_name: String },

    #[error("找不到用于自动装配的 Bean: {target_name}")]
    WiringTarget { target_name: String },
}

/// Bean 不唯一错误类型
#[derive(Error, Debug)]
#[error("类型为 {type_name} 的 Bean 不唯一, 候选: {candidates:?}")]
pub struct NoUniqueBeanError {
    /// 查询的类型名称
    pub type_name: String,
    /// 按类型匹配到的全部 Bean 名称
    pub candidates: Vec<String>,
}

/// 字段注入底层错误类型
#[derive(Error, Debug)]
pub enum InjectionError {
    #[error("目标实例无法转换为字段声明类型: {expected}")]
    TargetTypeMismatch { expected: String },

    #[error("宿主实例类型不匹配: {expected}")]
    OwnerTypeMismatch { expected: String },

    #[error("字段已经完成注入")]
    AlreadyInstalled,
}

/// 容器错误类型
#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("配置错误: {source}")]
    Configuration {
        #[from]
        source: ConfigurationError,
    },

    #[error("Bean 缺失: {source}")]
    NoSuchBean {
        #[from]
        source: NoSuchBeanError,
    },

    #[error("Bean 不唯一: {source}")]
    NoUniqueBean {
        #[from]
        source: NoUniqueBeanError,
    },
}

/// 结果类型别名
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
pub type ContainerResult<T> = Result<T, ContainerError>;
