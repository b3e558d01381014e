//! # 示例应用程序
//!
//! 演示如何使用 Chuntian IoC 容器完成组件注册、自动装配与查询

use container_core::{ApplicationContext, BeanLookup};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod components {
    //! 示例组件定义

    use container_core::{bean, Autowired};

    /// 问候语来源
    pub trait GreetingSource: Send + Sync {
        /// 问候语文本
        fn greeting(&self) -> String;
    }

    #[derive(Debug, Default)]
    #[bean(implements(GreetingSource))]
    pub struct StaticGreetingSource;

    impl GreetingSource for StaticGreetingSource {
        fn greeting(&self) -> String {
            "你好, Chuntian".to_string()
        }
    }

    /// 问候服务
    #[derive(Debug, Default)]
    #[bean(name = "greeter")]
    pub struct GreetingService {
        #[autowired(name = "staticGreetingSource")]
        source: Autowired<dyn GreetingSource>,
    }

    impl GreetingService {
        /// 组合问候语
        pub fn greet(&self, who: &str) -> String {
            format!("{}! 欢迎 {}", self.source.get().greeting(), who)
        }
    }
}

use components::{GreetingService, GreetingSource};

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("启动示例应用");

    // 扫描组件并装配上下文
    let context = ApplicationContext::scan("example_app::components")?;
    info!("上下文就绪, 共 {} 个 Bean: {:?}", context.len(), context.bean_names());

    demonstrate_typed_lookup(&context)?;
    demonstrate_named_lookup(&context)?;
    demonstrate_bulk_lookup(&context);

    info!("示例应用运行结束");
    Ok(())
}

/// 演示按类型查询
fn demonstrate_typed_lookup(context: &ApplicationContext) -> anyhow::Result<()> {
    let service = context.get_bean::<GreetingService>()?;
    info!("按类型查询: {}", service.greet("类型查询"));
    Ok(())
}

/// 演示按名称查询
fn demonstrate_named_lookup(context: &ApplicationContext) -> anyhow::Result<()> {
    let service = context.get_bean_named::<GreetingService>("greeter")?;
    info!("按名称查询: {}", service.greet("名称查询"));
    Ok(())
}

/// 演示按类型批量查询
fn demonstrate_bulk_lookup(context: &ApplicationContext) {
    let sources = context.get_all_beans::<dyn GreetingSource>();
    for (name, source) in &sources {
        info!("问候语来源 {}: {}", name, source.greeting());
    }
}
