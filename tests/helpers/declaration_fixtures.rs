//! Declaration fixtures shared across integration tests.

use outline::Visibility;
use outline::syntax::{ContainerDecl, EnumDecl, FunctionDecl, ParamDecl, StructDecl};

/// The canonical six-field record.
pub fn test_user() -> StructDecl {
    StructDecl::new("TestUser")
        .field("id", "String")
        .field("name", "String")
        .field("email", "String?")
        .field("isActive", "Bool")
        .field("tags", "[String]")
        .field("metadata", "[String: String]")
}

/// `TestUser` spelled with generic forms instead of sugar.
pub fn test_user_generic_spelling() -> StructDecl {
    StructDecl::new("TestUser")
        .field("id", "String")
        .field("name", "String")
        .field("email", "Optional<String>")
        .field("isActive", "Bool")
        .field("tags", "Array<String>")
        .field("metadata", "Dictionary<String,String>")
}

/// A union with string raw values.
pub fn test_status() -> EnumDecl {
    EnumDecl::new("TestStatus")
        .case_with_raw("active", "\"active\"")
        .case_with_raw("inactive", "\"inactive\"")
        .case_with_raw("pending", "\"pending\"")
}

/// A service mixing every visibility level, including same-typed parameters.
pub fn user_service() -> ContainerDecl {
    ContainerDecl::new("UserService")
        .function(
            FunctionDecl::new("fetchUser")
                .visibility(Visibility::Public)
                .param(ParamDecl::labeled("id", "String"))
                .asynchronous()
                .throwing()
                .returns("TestUser"),
        )
        .function(
            FunctionDecl::new("resetCache")
                .visibility(Visibility::Private)
                .returns("Bool"),
        )
        .function(
            FunctionDecl::new("rename")
                .visibility(Visibility::Open)
                .param(ParamDecl::labeled("from", "String"))
                .param(ParamDecl::labeled("to", "String"))
                .throwing(),
        )
        .function(
            FunctionDecl::new("validate")
                .visibility(Visibility::Internal)
                .param(ParamDecl::labeled("_", "TestUser").with_name("user"))
                .returns("Bool"),
        )
        .function(
            FunctionDecl::new("deleteUser")
                .visibility(Visibility::Public)
                .param(ParamDecl::labeled("_", "String").with_name("id"))
                .asynchronous(),
        )
}
