//! 错误路径集成测试
//!
//! 覆盖扫描入参校验、重名拒绝、构造失败和查询歧义

use container_core::{
    ApplicationContext, BeanLookup, ConfigurationError, ContainerError, NoSuchBeanError,
    NoUniqueBeanError,
};

mod dup {
    //! 显式重名的组件对

    use container_core::bean;

    #[derive(Debug, Default)]
    #[bean(name = "clash")]
    pub struct DupOne;

    #[derive(Debug, Default)]
    #[bean(name = "clash")]
    pub struct DupTwo;
}

mod failing {
    //! 构造失败的组件

    use container_core::bean;

    #[derive(Debug)]
    #[bean(factory = "make_broken")]
    pub struct BrokenBean;

    /// 总是失败的零参工厂
    pub fn make_broken() -> Result<BrokenBean, String> {
        Err("连接池初始化失败".to_string())
    }
}

mod factories {
    //! 可失败工厂的成功路径

    use container_core::bean;

    #[derive(Debug)]
    #[bean(factory = "make_configured")]
    pub struct ConfiguredBean {
        pub value: u32,
    }

    /// 成功的零参工厂
    pub fn make_configured() -> Result<ConfiguredBean, String> {
        Ok(ConfiguredBean { value: 42 })
    }
}

mod unique {
    //! 同一 trait 的两个实现

    use container_core::bean;

    pub trait SharedIface: Send + Sync {
        fn id(&self) -> u32;
    }

    #[derive(Debug, Default)]
    #[bean(implements(SharedIface))]
    pub struct ImplA;

    impl SharedIface for ImplA {
        fn id(&self) -> u32 {
            1
        }
    }

    #[derive(Debug, Default)]
    #[bean(implements(SharedIface))]
    pub struct ImplB;

    impl SharedIface for ImplB {
        fn id(&self) -> u32 {
            2
        }
    }
}

#[test]
fn empty_namespace_is_a_configuration_error() {
    for namespace in ["", "   "] {
        let result = ApplicationContext::scan(namespace);
        assert!(matches!(
            result,
            Err(ContainerError::Configuration {
                source: ConfigurationError::ScanTargetMissing,
            })
        ));
    }
}

#[test]
fn duplicate_bean_names_abort_construction() {
    let result = ApplicationContext::scan("errors_test::dup");
    match result {
        Err(ContainerError::Configuration {
            source: ConfigurationError::DuplicateBeanName { name, .. },
        }) => assert_eq!(name, "clash"),
        other => panic!("意外的结果: {:?}", other.map(|context| context.len())),
    }
}

#[test]
fn failing_factory_aborts_construction_with_type_name() {
    let result = ApplicationContext::scan("errors_test::failing");
    match result {
        Err(ContainerError::Configuration {
            source: ConfigurationError::ConstructionFailed { type_name, message },
        }) => {
            assert_eq!(type_name, "BrokenBean");
            assert!(message.contains("连接池初始化失败"));
        }
        other => panic!("意外的结果: {:?}", other.map(|context| context.len())),
    }
}

#[test]
fn successful_factory_constructs_bean() {
    let context = ApplicationContext::scan("errors_test::factories").unwrap();
    let bean = context.get_bean::<factories::ConfiguredBean>().unwrap();
    assert_eq!(bean.value, 42);
}

#[test]
fn ambiguous_type_query_fails_with_no_unique_bean() {
    let context = ApplicationContext::scan("errors_test::unique").unwrap();
    let result = context.get_bean::<dyn unique::SharedIface>();
    match result {
        Err(ContainerError::NoUniqueBean {
            source: NoUniqueBeanError {
                type_name,
                candidates,
            },
        }) => {
            assert_eq!(type_name, "SharedIface");
            assert_eq!(candidates.len(), 2);
        }
        other => panic!("意外的结果: {:?}", other.map(|bean| bean.id())),
    }
}

#[test]
fn all_beans_query_still_succeeds_on_ambiguous_type() {
    let context = ApplicationContext::scan("errors_test::unique").unwrap();
    let all = context.get_all_beans::<dyn unique::SharedIface>();
    assert_eq!(all.len(), 2);
    assert!(all.contains_key("implA"));
    assert!(all.contains_key("implB"));
}

#[test]
fn unknown_name_fails_regardless_of_type_matches() {
    let context = ApplicationContext::scan("errors_test::unique").unwrap();
    // 两个 Bean 都与该 trait 兼容，但名称不匹配仍然是查找失败
    let result = context.get_bean_named::<dyn unique::SharedIface>("nonexistent");
    assert!(matches!(
        result,
        Err(ContainerError::NoSuchBean {
            source: NoSuchBeanError::ByNameAndType { name, .. },
        }) if name == "nonexistent"
    ));

    // 名称命中时按 trait 查找不受歧义影响
    let bean = context.get_bean_named::<dyn unique::SharedIface>("implA").unwrap();
    assert_eq!(bean.id(), 1);
}

#[test]
fn name_match_with_incompatible_type_fails() {
    let context = ApplicationContext::scan("errors_test::unique").unwrap();
    let result = context.get_bean_named::<unique::ImplB>("implA");
    assert!(matches!(
        result,
        Err(ContainerError::NoSuchBean {
            source: NoSuchBeanError::ByNameAndType { .. },
        })
    ));
}

#[test]
fn query_failure_leaves_context_usable() {
    use unique::SharedIface;
    let context = ApplicationContext::scan("errors_test::unique").unwrap();
    assert!(context.get_bean::<dyn unique::SharedIface>().is_err());
    // 查询失败只影响那一次调用，注册表照常可用
    let bean = context.get_bean::<unique::ImplA>().unwrap();
    assert_eq!(bean.id(), 1);
}

#[test]
fn namespace_without_beans_builds_empty_context() {
    let context = ApplicationContext::scan("errors_test::nowhere").unwrap();
    assert!(context.is_empty());
    assert!(context.get_all_beans::<dyn unique::SharedIface>().is_empty());
    assert!(matches!(
        context.get_bean::<unique::ImplA>(),
        Err(ContainerError::NoSuchBean { .. })
    ));
}
