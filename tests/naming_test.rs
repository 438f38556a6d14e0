use templetize::naming::derive_name;

#[test]
fn test_unscoped_name() {
    let name = derive_name("pkg");
    assert_eq!(name.template_name, "cra-template-pkg");
    assert_eq!(name.scope, None);
    assert_eq!(name.published_name(), "cra-template-pkg");
}

#[test]
fn test_scoped_name() {
    let name = derive_name("@scope/pkg");
    assert_eq!(name.template_name, "cra-template-pkg");
    assert_eq!(name.scope.as_deref(), Some("scope"));
    assert_eq!(name.published_name(), "@scope/cra-template-pkg");
}

#[test]
fn test_malformed_scoped_names_fall_through() {
    assert_eq!(derive_name("@scope/a/b").template_name, "cra-template-@scope/a/b");
    assert_eq!(derive_name("@/pkg").scope, None);
    assert_eq!(derive_name("scope/pkg").published_name(), "cra-template-scope/pkg");
}
