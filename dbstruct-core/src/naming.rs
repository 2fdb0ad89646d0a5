//! snake_case identifier normalization.

/// Convert a snake_case identifier to camelCase or PascalCase.
///
/// The input is split on `_`. Every segment after the first has its first
/// character uppercased; empty segments vanish. The first segment is only
/// capitalized when `capitalize_first` is set, otherwise it is kept verbatim.
///
/// ```
/// use dbstruct_core::normalize;
///
/// assert_eq!(normalize("user_name", true), "UserName");
/// assert_eq!(normalize("user_name", false), "userName");
/// assert_eq!(normalize("_id", false), "Id");
/// ```
pub fn normalize(input: &str, capitalize_first: bool) -> String {
    input
        .split('_')
        .enumerate()
        .map(|(i, segment)| {
            if i > 0 || capitalize_first {
                capitalize(segment)
            } else {
                segment.to_string()
            }
        })
        .collect()
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    normalize(s, true)
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
///
/// The first segment keeps its original casing.
pub fn to_camel_case(s: &str) -> String {
    normalize(s, false)
}

/// Convert an identifier to snake_case (e.g., "userId" -> "user_id")
///
/// An underscore is inserted before an uppercase letter that follows a
/// lowercase letter or digit, so acronyms stay together ("userID" -> "user_id").
/// Dashes and spaces become underscores.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    for c in s.chars() {
        match c {
            '-' | ' ' => result.push('_'),
            c if c.is_uppercase() => {
                if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                    result.push('_');
                }
                result.extend(c.to_lowercase());
            }
            c => result.push(c),
        }
        prev = Some(c);
    }
    result
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pascal() {
        assert_eq!(normalize("id", true), "Id");
        assert_eq!(normalize("user_name", true), "UserName");
        assert_eq!(normalize("foo_bar_baz", true), "FooBarBaz");
        assert_eq!(normalize("a", true), "A");
    }

    #[test]
    fn test_normalize_camel() {
        assert_eq!(normalize("user_name", false), "userName");
        assert_eq!(normalize("created_at", false), "createdAt");
        assert_eq!(normalize("flag", false), "flag");
    }

    #[test]
    fn test_normalize_keeps_rest_of_segment() {
        assert_eq!(normalize("hElLo_wOrLd", true), "HElLoWOrLd");
        assert_eq!(normalize("Upper_case", false), "UpperCase");
        assert_eq!(normalize("userID", true), "UserID");
    }

    #[test]
    fn test_normalize_empty_segments() {
        assert_eq!(normalize("", false), "");
        assert_eq!(normalize("", true), "");
        assert_eq!(normalize("a__b", true), "AB");
        assert_eq!(normalize("a__b", false), "aB");
        assert_eq!(normalize("trailing_", true), "Trailing");
        assert_eq!(normalize("___", true), "");
    }

    #[test]
    fn test_normalize_leading_underscore() {
        // The segment after a leading underscore is never the first one.
        assert_eq!(normalize("_id", true), "Id");
        assert_eq!(normalize("_id", false), "Id");
    }

    #[test]
    fn test_normalize_flag_only_touches_first_character() {
        for input in ["user_name", "id", "x_y_z", "already_Camel", "", "_lead", "9lives_x"] {
            let camel: Vec<char> = normalize(input, false).chars().collect();
            let pascal: Vec<char> = normalize(input, true).chars().collect();
            assert_eq!(camel.len(), pascal.len(), "input {input:?}");
            assert_eq!(camel.get(1..), pascal.get(1..), "input {input:?}");
        }
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("user_name"), "user_name");
        assert_eq!(to_snake_case("userName"), "user_name");
        assert_eq!(to_snake_case("UserName"), "user_name");
        assert_eq!(to_snake_case("userID"), "user_id");
        assert_eq!(to_snake_case("ID"), "id");
        assert_eq!(to_snake_case("utf8Name"), "utf8_name");
        assert_eq!(to_snake_case("order-items"), "order_items");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_wrappers() {
        assert_eq!(to_pascal_case("order_items"), "OrderItems");
        assert_eq!(to_camel_case("order_items"), "orderItems");
    }
}
