//! Kind-dispatched and batch generation tests.

use crate::helpers::declaration_fixtures::*;
use outline::ide::{Generated, RenderOptions, generate, generate_all};
use outline::syntax::{Declaration, FunctionDecl};

fn mixed_declarations() -> Vec<Declaration> {
    vec![
        test_user().into(),
        test_status().into(),
        FunctionDecl::new("ping").returns("Bool").into(),
        user_service().into(),
    ]
}

#[test]
fn test_generate_dispatches_by_kind() {
    let options = RenderOptions::default();
    let decls = mixed_declarations();

    assert!(matches!(generate(&decls[0], &options), Generated::Schema(_)));
    assert!(matches!(generate(&decls[1], &options), Generated::Schema(_)));
    assert_eq!(
        generate(&decls[2], &options),
        Generated::Signature("ping() -> Bool".to_string())
    );
    assert!(matches!(
        generate(&decls[3], &options),
        Generated::Signatures(list) if list.len() == 3
    ));
}

#[test]
fn test_generate_all_matches_sequential_order() {
    let options = RenderOptions::default();
    let decls = mixed_declarations();

    let parallel = generate_all(&decls, &options);
    let sequential: Vec<Generated> = decls.iter().map(|d| generate(d, &options)).collect();
    assert_eq!(parallel, sequential);
}

#[test]
fn test_generated_lines() {
    let options = RenderOptions::default();
    let decls = mixed_declarations();
    let lines: Vec<String> = generate_all(&decls, &options)
        .iter()
        .flat_map(|g| g.lines().into_iter().map(str::to_string).collect::<Vec<_>>())
        .collect();
    assert_eq!(lines.len(), 1 + 1 + 1 + 3);
    assert_eq!(lines[2], "ping() -> Bool");
}

#[test]
fn test_generation_does_not_register() {
    let options = RenderOptions::default();
    for decl in mixed_declarations() {
        let _ = generate(&decl, &options);
    }
    assert!(outline::project::global().snapshot().is_empty());
}
