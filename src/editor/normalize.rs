const SCHEMES: [&str; 2] = ["http://", "https://"];
const WWW: &str = "www.";

/// Reduces user input to a bare lower-case host: no scheme, no `www.`, no path.
///
/// Returns `None` for input that is blank or has no host part left.
pub fn normalize_domain(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();
    let mut rest = lowered.as_str();

    loop {
        let before = rest;
        rest = rest.trim_start();
        for scheme in SCHEMES {
            if let Some(stripped) = rest.strip_prefix(scheme) {
                rest = stripped;
            }
        }
        if let Some(stripped) = rest.strip_prefix(WWW) {
            rest = stripped;
        }
        if rest == before {
            break;
        }
    }

    let host = rest.split('/').next().unwrap_or_default().trim();
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_scheme_www_and_path() {
        assert_eq!(
            normalize_domain("https://www.Test.com/page"),
            Some("test.com".to_string())
        );
        assert_eq!(
            normalize_domain("  HTTP://WWW.Example.org/a/b?c=d "),
            Some("example.org".to_string())
        );
        assert_eq!(
            normalize_domain("ads.example.com/banner"),
            Some("ads.example.com".to_string())
        );
    }

    #[test]
    fn test_keeps_port_and_query_free_authority() {
        assert_eq!(
            normalize_domain("http://localhost:8080/x"),
            Some("localhost:8080".to_string())
        );
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert_eq!(normalize_domain(""), None);
        assert_eq!(normalize_domain("   \t"), None);
        assert_eq!(normalize_domain("https://"), None);
        assert_eq!(normalize_domain("www./path"), None);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "https://www.Test.com/page",
            "www.www.example.com",
            "http://https://a.com",
            "www. spaced.com",
            "plain.net",
            "sub.www.example.com",
        ];
        for input in inputs {
            let once = normalize_domain(input).unwrap();
            assert_eq!(normalize_domain(&once), Some(once.clone()), "input={}", input);
        }
    }

    #[test]
    fn test_inner_www_label_is_kept() {
        assert_eq!(
            normalize_domain("sub.www.example.com"),
            Some("sub.www.example.com".to_string())
        );
    }
}
