/// Normalize a base URL so it ends with exactly one slash
pub fn normalize_base_url(url_str: &str) -> String {
    let trimmed_url = url_str.trim().trim_end_matches('/');
    format!("{}/", trimmed_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_without_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:3100"),
            "http://localhost:3100/"
        );
    }

    #[test]
    fn test_normalize_collapses_slashes() {
        assert_eq!(
            normalize_base_url("http://localhost:3100///"),
            "http://localhost:3100/"
        );
    }

    #[test]
    fn test_normalize_keeps_path_prefix() {
        assert_eq!(
            normalize_base_url("https://logs.example.com/loki-proxy/"),
            "https://logs.example.com/loki-proxy/"
        );
    }
}
