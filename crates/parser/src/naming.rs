//! Property naming
//!
//! Maps snake_case APB parameter names to camelCase schema property names.

/// Convert a snake_case name to camelCase
///
/// The first segment is kept as-is. Each later segment gets its first
/// character upper-cased; the rest of the segment is left unchanged.
/// Empty segments from repeated, leading, or trailing underscores vanish.
///
/// # Examples
/// ```
/// use apb_openapi_parser::to_camel_case;
///
/// assert_eq!(to_camel_case("db_name"), "dbName");
/// assert_eq!(to_camel_case("mysql_root_PASSWORD"), "mysqlRootPASSWORD");
/// assert_eq!(to_camel_case("size"), "size");
/// ```
pub fn to_camel_case(name: &str) -> String {
    let mut segments = name.split('_');
    let mut result = String::with_capacity(name.len());

    if let Some(first) = segments.next() {
        result.push_str(first);
    }

    for segment in segments {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            result.extend(head.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_names() {
        assert_eq!(to_camel_case("db_name"), "dbName");
        assert_eq!(to_camel_case("postgresql_max_connections"), "postgresqlMaxConnections");
        assert_eq!(to_camel_case("app_name2"), "appName2");
    }

    #[test]
    fn test_no_underscore_unchanged() {
        assert_eq!(to_camel_case("size"), "size");
        assert_eq!(to_camel_case("Size"), "Size");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_rest_of_segment_not_lowercased() {
        assert_eq!(to_camel_case("db_URL"), "dbURL");
        assert_eq!(to_camel_case("my_xRay"), "myXRay");
    }

    #[test]
    fn test_empty_segments() {
        assert_eq!(to_camel_case("db__name"), "dbName");
        assert_eq!(to_camel_case("_db"), "Db");
        assert_eq!(to_camel_case("db_"), "db");
        assert_eq!(to_camel_case("___"), "");
    }

    #[test]
    fn test_output_has_no_underscores() {
        for name in ["a_b", "one_two_three", "x__y", "long_name_with_many_parts"] {
            assert!(!to_camel_case(name).contains('_'), "{}", name);
        }
    }

    #[test]
    fn test_fixed_point_only_without_underscores() {
        let plain = "database";
        assert_eq!(to_camel_case(&to_camel_case(plain)), plain);

        let snake = "data_base";
        assert_ne!(to_camel_case(snake), snake);
    }
}
