//! 应用上下文集成测试
//!
//! 覆盖命名解析、按类型/按名称查询和批量查询

use container_core::{ApplicationContext, Bean, BeanLookup, ContextPhase};
use std::sync::Arc;

mod fixtures {
    //! 测试组件定义

    use container_core::bean;

    /// 测试接口
    pub trait CustomInterface: Send + Sync {
        fn label(&self) -> &'static str;
    }

    #[derive(Debug, Default)]
    #[bean(name = "FirstExample", implements(CustomInterface))]
    pub struct ExampleOne;

    impl CustomInterface for ExampleOne {
        fn label(&self) -> &'static str {
            "one"
        }
    }

    #[derive(Debug, Default)]
    #[bean(implements(CustomInterface))]
    pub struct ExampleTwo;

    impl CustomInterface for ExampleTwo {
        fn label(&self) -> &'static str {
            "two"
        }
    }
}

use fixtures::{CustomInterface, ExampleOne, ExampleTwo};

const NAMESPACE: &str = "context_test::fixtures";

fn context() -> ApplicationContext {
    ApplicationContext::scan(NAMESPACE).expect("上下文装配失败")
}

#[test]
fn named_annotation_resolves_explicit_name() {
    assert_eq!(ExampleOne::bean_name(), "FirstExample");
    assert_eq!(ExampleOne::explicit_name(), Some("FirstExample"));
}

#[test]
fn default_name_is_decapitalized_simple_name() {
    assert_eq!(ExampleTwo::bean_name(), "exampleTwo");
    assert_eq!(ExampleTwo::explicit_name(), None);
}

#[test]
fn context_reaches_ready_phase() {
    let context = context();
    assert_eq!(context.phase(), ContextPhase::Ready);
    assert_eq!(context.len(), 2);
    assert!(context.contains_bean("FirstExample"));
    assert!(context.contains_bean("exampleTwo"));
}

#[test]
fn find_bean_by_type() {
    let context = context();
    let bean = context.get_bean::<ExampleOne>().unwrap();
    assert_eq!(bean.label(), "one");
}

#[test]
fn find_bean_by_name_and_type() {
    let context = context();
    let bean = context.get_bean_named::<ExampleOne>("FirstExample").unwrap();
    assert_eq!(bean.label(), "one");
    let other = context.get_bean_named::<ExampleTwo>("exampleTwo").unwrap();
    assert_eq!(other.label(), "two");
}

#[test]
fn find_all_beans_by_type() {
    let context = context();
    let all = context.get_all_beans::<dyn CustomInterface>();
    assert_eq!(all.len(), 2);
    assert!(all.contains_key("FirstExample"));
    assert!(all.contains_key("exampleTwo"));
    assert_eq!(all["FirstExample"].label(), "one");
}

#[test]
fn repeated_lookup_returns_same_instance() {
    let context = context();
    let first = context.get_bean::<ExampleOne>().unwrap();
    let second = context.get_bean::<ExampleOne>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let named = context.get_bean_named::<ExampleOne>("FirstExample").unwrap();
    assert!(Arc::ptr_eq(&first, &named));
}

#[test]
fn each_context_owns_its_own_instances() {
    // 实例属于上下文而不是登记表；两次装配各自实例化一次
    let first_context = context();
    let second_context = context();
    let first = first_context.get_bean::<ExampleOne>().unwrap();
    let second = second_context.get_bean::<ExampleOne>().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}
