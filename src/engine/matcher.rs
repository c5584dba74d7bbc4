use super::traits::BlocklistMatcher;

/// Linear matcher over the user's list, in insertion order.
#[derive(Debug, Default)]
pub struct ListMatcher {
    domains: Vec<Box<str>>,
}

impl ListMatcher {
    pub fn new(domains: Vec<String>) -> Self {
        Self {
            domains: domains.into_iter().map(String::into_boxed_str).collect(),
        }
    }
}

/// Exact match, or `hostname` is a dot-suffixed descendant of `domain`.
pub fn matches_domain(hostname: &str, domain: &str) -> bool {
    match hostname.strip_suffix(domain) {
        Some("") => true,
        Some(prefix) => prefix.ends_with('.'),
        None => false,
    }
}

impl BlocklistMatcher for ListMatcher {
    fn check(&self, hostname: &str) -> Option<&str> {
        self.domains
            .iter()
            .find(|domain| matches_domain(hostname, domain))
            .map(|domain| &**domain)
    }

    fn len(&self) -> usize {
        self.domains.len()
    }

    fn domains(&self) -> Vec<String> {
        self.domains.iter().map(|d| d.to_string()).collect()
    }
}
