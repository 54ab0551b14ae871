//! Shared utility functions for code generation.

/// Convert a string to PascalCase (e.g., "street_name" -> "StreetName").
///
/// Every non-alphanumeric character is a word boundary and is dropped. The
/// first character of each word is uppercased; the rest is kept as-is.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_alphanumeric())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 && !result.ends_with('_') && !result.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }

    result.trim_end_matches('_').to_string()
}

/// Convert a JSON value to its plain textual form.
///
/// Strings are returned without quotes; arrays and objects as compact JSON.
pub fn json_value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo_bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_pascal_case_separators() {
        assert_eq!(to_pascal_case("_address"), "Address");
        assert_eq!(to_pascal_case("email-verification"), "EmailVerification");
        assert_eq!(to_pascal_case("emailVerification"), "EmailVerification");
        assert_eq!(
            to_pascal_case("^S(.?*)test&PatternProperties"),
            "STestPatternProperties"
        );
        assert_eq!(to_pascal_case("{\"test\":\"test\"}"), "TestTest");
        assert_eq!(to_pascal_case("???"), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("FooBarBaz"), "foo_bar_baz");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("_address"), "address");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_json_value_to_string() {
        assert_eq!(json_value_to_string(&json!("hello")), "hello");
        assert_eq!(json_value_to_string(&json!(42)), "42");
        assert_eq!(json_value_to_string(&json!(1.5)), "1.5");
        assert_eq!(json_value_to_string(&json!(true)), "true");
        assert_eq!(json_value_to_string(&json!(null)), "null");
        assert_eq!(json_value_to_string(&json!({"test": "test"})), "{\"test\":\"test\"}");
    }
}
