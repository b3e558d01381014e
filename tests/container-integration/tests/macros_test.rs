//! `#[bean]` 宏集成测试
//!
//! 覆盖 Bean trait 生成、derive 保留和登记表提交

use container_core::{ApplicationContext, Bean};

mod fixtures {
    //! 宏测试组件

    use container_core::{bean, Autowired};

    #[derive(Debug, Default)]
    #[bean]
    pub struct PlainBean;

    #[derive(Debug, Default)]
    #[bean(name = "explicitName")]
    pub struct NamedBean;

    #[derive(Debug, Default, Clone)]
    #[bean]
    pub struct DerivedBean {
        pub counter: u32,
    }

    #[derive(Debug, Default)]
    #[bean]
    pub struct WithPrivateField {
        #[autowired]
        dep: Autowired<PlainBean>,
    }

    impl WithPrivateField {
        /// 私有字段通过注入获得，只暴露读取口
        pub fn dep_is_wired(&self) -> bool {
            self.dep.is_wired()
        }
    }
}

use fixtures::{DerivedBean, NamedBean, PlainBean, WithPrivateField};

#[test]
fn bean_trait_reports_derived_name() {
    assert_eq!(PlainBean::bean_name(), "plainBean");
    assert_eq!(PlainBean::explicit_name(), None);
}

#[test]
fn bean_trait_reports_explicit_name() {
    assert_eq!(NamedBean::bean_name(), "explicitName");
    assert_eq!(NamedBean::explicit_name(), Some("explicitName"));
}

#[test]
fn derives_on_the_struct_are_preserved() {
    let bean = DerivedBean::default();
    let copy = bean.clone();
    assert_eq!(copy.counter, 0);
    assert!(format!("{bean:?}").contains("DerivedBean"));
}

#[test]
fn marked_types_are_submitted_to_the_registry() {
    let context = ApplicationContext::scan("macros_test::fixtures").unwrap();
    assert!(context.contains_bean("plainBean"));
    assert!(context.contains_bean("explicitName"));
    assert!(context.contains_bean("derivedBean"));
    assert!(context.contains_bean("withPrivateField"));
}

#[test]
fn private_fields_are_injected() {
    use container_core::BeanLookup;

    let context = ApplicationContext::scan("macros_test::fixtures").unwrap();
    let bean = context.get_bean::<WithPrivateField>().unwrap();
    assert!(bean.dep_is_wired());
}
