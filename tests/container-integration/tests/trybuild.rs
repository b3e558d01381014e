//! trybuild 编译期测试

#[test]
fn trybuild_bean_macro() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/bean_ok.rs");
}
