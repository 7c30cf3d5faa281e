pub(crate) mod trace_root;

use once_cell::sync::Lazy;
use regex::Regex;

static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}")
        .expect("Invalid UUID regex")
});

/// Replaces todo ids in a request path so every item shares one span label.
pub(crate) fn normalize_uri(path: &str) -> String {
    UUID_REGEX.replace_all(path, "{id}").to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_uri;

    #[test]
    fn normalize_uri_test() {
        let ok_str = normalize_uri("/todo/01927f6e-3f55-7a8a-8fb8-9a3ab17f9930");
        assert_eq!(ok_str, "/todo/{id}");
    }

    #[test]
    fn normalize_uri_without_id_test() {
        assert_eq!(normalize_uri("/todo/"), "/todo/");
        assert_eq!(normalize_uri("/todo/not-an-id"), "/todo/not-an-id");
    }
}
