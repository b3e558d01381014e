//! 自动装配字段单元

use crate::errors::InjectionError;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// 自动装配字段单元
///
/// 声明为 `Autowired<T>` 的字段在容器装配阶段被注入目标 Bean 的共享句柄。
/// 注入通过内部可变性完成，装配器不需要宿主实例的可变引用；又因为装入的
/// 是共享句柄而非拷贝，互相依赖的两个 Bean 可以在同一轮装配中先后完成注入，
/// 先拿到句柄的一方会在对方完成注入后看到其装配后的状态。
///
/// `T` 可以是具体 Bean 类型，也可以是 trait object
/// （例如 `Autowired<dyn MessageSource>`，trait 需要 `Send + Sync` 超 trait）。
pub struct Autowired<T: ?Sized> {
    cell: OnceCell<Arc<T>>,
}

impl<T: ?Sized> Autowired<T> {
    /// 创建未注入的字段单元
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// 安装共享句柄；字段只允许注入一次
    pub fn install(&self, value: Arc<T>) -> Result<(), InjectionError> {
        self.cell
            .set(value)
            .map_err(|_| InjectionError::AlreadyInstalled)
    }

    /// 获取已注入的实例引用
    ///
    /// # Panics
    ///
    /// 在容器完成装配之前调用会 panic；从已装配好的上下文中取出的
    /// Bean 不会出现这种情况
    pub fn get(&self) -> &T {
        match self.cell.get() {
            Some(value) => value,
            None => panic!("autowired 字段尚未完成注入"),
        }
    }

    /// 尝试获取已注入的共享句柄
    pub fn try_get(&self) -> Option<&Arc<T>> {
        self.cell.get()
    }

    /// 字段是否已完成注入
    pub fn is_wired(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: ?Sized> Default for Autowired<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Autowired<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wired() {
            f.write_str("Autowired(wired)")
        } else {
            f.write_str("Autowired(empty)")
        }
    }
}
