//! # Container Macros
//!
//! 这个 crate 提供了用于编译期 Bean 注册的过程宏。
//!
//! ## 核心宏
//!
//! - [`macro@bean`] - Bean 注册宏
//!
//! ## 使用示例
//!
//! ```ignore
//! use container_core::{bean, Autowired};
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
//! ```

use proc_macro::TokenStream;

mod bean;
mod utils;

/// Bean 注册宏
///
/// 这个宏会为结构体实现 `Bean` trait，并生成一个在程序启动时运行的注册
/// 函数，向全局登记表提交一条 [`BeanRegistration`]。结构体中标注
/// `#[autowired]` 的 `Autowired<T>` 字段各生成一个字段注入点，注入代码
/// 展开在结构体定义处，因此私有字段同样可以注入。
///
/// [`BeanRegistration`]: container_common::BeanRegistration
///
/// # 参数
///
/// - `name = "custom_name"` - 自定义 Bean 名称（默认取类型简单名首字母小写）
/// - `implements(TraitA, TraitB)` - 额外按这些 trait 暴露该 Bean；
///   trait 需要声明 `Send + Sync` 超 trait
/// - `factory = "path::to_fn"` - 用可失败的零参工厂函数代替 `Default` 构造；
///   函数签名为 `fn() -> Result<Self, E>`，`E` 可转换为
///   `Box<dyn std::error::Error + Send + Sync>`
///
/// 字段标注：
///
/// - `#[autowired]` - 按字段声明类型推导目标 Bean 名称
/// - `#[autowired(name = "target")]` - 按显式名称装配
///
/// # 示例
///
/// ```ignore
/// #[derive(Debug, Default)]
/// #[bean(name = "FirstExample", implements(CustomInterface))]
/// pub struct ExampleOne;
/// ```
#[proc_macro_attribute]
pub fn bean(args: TokenStream, input: TokenStream) -> TokenStream {
    bean::bean_impl(args, input)
}
