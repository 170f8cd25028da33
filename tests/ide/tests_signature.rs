//! Compact signature tests.

use crate::helpers::declaration_fixtures::*;
use outline::ide::{
    GenerateError, LabelPolicy, RenderOptions, container_signatures, function_signature,
    signature, signatures,
};
use outline::syntax::{DeclKind, Declaration, FunctionDecl, ParamDecl};
use rstest::rstest;

// =============================================================================
// SINGLE SIGNATURES
// =============================================================================

#[rstest]
#[case(FunctionDecl::new("fetchUser").asynchronous().throwing().returns("TestUser"), "fetchUser() async throws -> TestUser")]
#[case(FunctionDecl::new("isValid").returns("Bool"), "isValid() -> Bool")]
#[case(FunctionDecl::new("reset"), "reset()")]
#[case(FunctionDecl::new("flush").returns("Void"), "flush()")]
#[case(FunctionDecl::new("load").throwing(), "load() throws")]
#[case(FunctionDecl::new("wait").asynchronous(), "wait() async")]
#[case(FunctionDecl::new("process").param(ParamDecl::labeled("_", "String").with_name("input")), "process(_: String)")]
#[case(FunctionDecl::new("find").param(ParamDecl::labeled("id", "String")).returns("Optional<TestUser>"), "find(id: String) -> TestUser?")]
#[case(FunctionDecl::new("apply").param(ParamDecl::unlabeled("Int")).param(ParamDecl::unlabeled("Int")), "apply(Int, Int)")]
#[case(FunctionDecl::new("all").returns("Array<Dictionary<String,Int>>"), "all() -> [[String: Int]]")]
fn test_function_signature(#[case] decl: FunctionDecl, #[case] expected: &str) {
    assert_eq!(function_signature(&decl, &RenderOptions::default()), expected);
}

#[test]
fn test_binding_name_never_rendered() {
    let decl = FunctionDecl::new("greet")
        .param(ParamDecl::labeled("to", "String").with_name("recipient"));
    let text = function_signature(&decl, &RenderOptions::default());
    assert_eq!(text, "greet(to: String)");
    assert!(!text.contains("recipient"));
}

#[test]
fn test_positional_label_policy() {
    let decl = FunctionDecl::new("rename")
        .param(ParamDecl::labeled("from", "String"))
        .param(ParamDecl::labeled("to", "String"));
    let options = RenderOptions::default().with_labels(LabelPolicy::Positional);
    assert_eq!(function_signature(&decl, &options), "rename(String, String)");
}

#[test]
fn test_signature_rejects_non_function() {
    let options = RenderOptions::default();
    let decl: Declaration = test_user().into();
    let err = signature(&decl, &options).unwrap_err();
    assert_eq!(
        err,
        GenerateError::InvalidDeclarationKind {
            name: "TestUser".into(),
            found: DeclKind::Struct,
            expected: "a function",
        }
    );
    assert_eq!(
        err.to_string(),
        "Invalid declaration kind: `TestUser` is a struct, expected a function"
    );

    let decl: Declaration = user_service().into();
    assert!(signature(&decl, &options).is_err());
}

// =============================================================================
// BULK SIGNATURES
// =============================================================================

#[test]
fn test_container_signatures_filter_and_order() {
    let list = container_signatures(&user_service(), &RenderOptions::default());
    assert_eq!(
        list,
        [
            "fetchUser(id: String) async throws -> TestUser",
            "rename(from: String, to: String) throws",
            "deleteUser(_: String) async",
        ]
    );
}

#[test]
fn test_container_signatures_exclude_private_and_internal() {
    let list = container_signatures(&user_service(), &RenderOptions::default());
    assert!(list.iter().all(|s| !s.starts_with("resetCache")));
    assert!(list.iter().all(|s| !s.starts_with("validate")));
}

#[test]
fn test_container_without_exported_functions() {
    let container = outline::syntax::ContainerDecl::new("Empty")
        .function(FunctionDecl::new("hidden"));
    assert!(container_signatures(&container, &RenderOptions::default()).is_empty());
}

#[test]
fn test_signatures_dispatch() {
    let options = RenderOptions::default();
    let decl: Declaration = user_service().into();
    assert_eq!(signatures(&decl, &options).unwrap().len(), 3);

    let decl: Declaration = FunctionDecl::new("run").into();
    assert!(matches!(
        signatures(&decl, &options),
        Err(GenerateError::InvalidDeclarationKind {
            found: DeclKind::Function,
            ..
        })
    ));
}
