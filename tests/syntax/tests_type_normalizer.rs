//! Type normalizer behavior over a corpus of real-world type spellings.

use outline::syntax::{TypeDescriptor, canonical_type};

const CORPUS: &[&str] = &[
    "String",
    "Int?",
    "Optional<Date>",
    "Swift.Optional<Swift.Array<Int>>",
    "[String]",
    "Array<String>",
    "[String: String]",
    "[String:String]",
    "Dictionary<String,Any>",
    "Dictionary< String , Array<Int> >",
    "[[String: Int]]?",
    "Set<String>",
    "Result<[User], APIError>",
    "(Int, String)",
    "(name:String,age:Int)",
    "() -> Void",
    "(String) async throws -> User",
    "@escaping (Result<Data,Error>) -> Void",
    "Optional<() -> Void>",
    "any Codable",
    "some View",
    "UnsafePointer<UInt8>?",
    "Array<Int",
    "[String: [String: [Int]]]",
    "String??",
    "",
];

#[test]
fn test_normalization_is_idempotent_over_corpus() {
    for raw in CORPUS {
        let once = TypeDescriptor::parse(raw);
        let twice = TypeDescriptor::parse(&once.to_string());
        assert_eq!(once, twice, "descriptor of {raw:?} changed on re-normalization");

        let canonical = canonical_type(raw);
        assert_eq!(
            canonical_type(&canonical),
            canonical,
            "canonical form of {raw:?} is not a fixed point"
        );
    }
}

#[test]
fn test_sugar_and_generic_spellings_agree() {
    let pairs = [
        ("[String]", "Array<String>"),
        ("[String: Int]", "Dictionary<String, Int>"),
        ("Int?", "Optional<Int>"),
        ("[Int]?", "Optional<Array<Int>>"),
        ("[String: [Int]]", "Dictionary<String,Array<Int>>"),
        ("((Int) -> Void)?", "Optional<(Int) -> Void>"),
    ];
    for (sugar, generic) in pairs {
        assert_eq!(
            TypeDescriptor::parse(sugar),
            TypeDescriptor::parse(generic),
            "{sugar} vs {generic}"
        );
    }
}

#[test]
fn test_separator_formatting_is_canonical() {
    assert_eq!(
        canonical_type("Dictionary< String , Array<Int> >"),
        "[String: [Int]]"
    );
    assert_eq!(canonical_type("Result<[User],APIError>"), "Result<[User], APIError>");
    assert_eq!(canonical_type("(name:String,age:Int)"), "(name: String, age: Int)");
    assert_eq!(
        canonical_type("(String) async throws -> User"),
        "(String) async throws -> User"
    );
}

#[test]
fn test_unrecognized_forms_degrade_gracefully() {
    assert_eq!(canonical_type("Array<Int"), "Array<Int");
    assert_eq!(canonical_type("any   Codable"), "any Codable");
    assert_eq!(
        canonical_type("@escaping (Result<Data,Error>) -> Void"),
        "@escaping (Result<Data,Error>) -> Void"
    );
}

#[test]
fn test_function_returning_optional_is_required() {
    let ty = TypeDescriptor::parse("(Int) -> String?");
    assert!(!ty.is_optional);
    assert_eq!(ty.to_string(), "(Int) -> String?");
}
