#[test]
fn gvm_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/gvm_error_pass.rs");
    t.compile_fail("tests/ui/gvm_error_tuple_variant.rs");
    t.compile_fail("tests/ui/gvm_error_unit_variant.rs");
    t.compile_fail("tests/ui/gvm_error_source_field.rs");
    t.compile_fail("tests/ui/gvm_error_mixed_field.rs");
}
