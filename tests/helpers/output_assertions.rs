//! Assertion helpers for rendered output.

/// Assert a struct schema's field lines, ignoring the header and braces.
pub fn assert_field_lines(schema: &str, expected: &[&str]) {
    let lines: Vec<&str> = schema.lines().collect();
    assert!(
        lines.len() >= 2,
        "Expected a multi-line schema, got {:?}",
        schema
    );
    let body: Vec<&str> = lines[1..lines.len() - 1]
        .iter()
        .map(|line| line.trim_start())
        .collect();
    assert_eq!(body, expected, "Field lines of schema:\n{}", schema);
}

/// Assert that `needle` does not appear anywhere in `text`.
pub fn assert_absent(text: &str, needle: &str) {
    assert!(
        !text.contains(needle),
        "Expected {:?} to be absent from:\n{}",
        needle,
        text
    );
}
