use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Headers` preflight header.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum AllowedHeaders {
    /// Echo whatever the browser asked for in `Access-Control-Request-Headers`.
    #[default]
    MirrorRequest,
    List(Vec<String>),
    /// Wildcard `*`.
    Any,
}

impl AllowedHeaders {
    /// Trimmed, case-insensitively deduplicated list. First spelling wins.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(trimmed.to_ascii_lowercase()) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn is_wildcard(&self) -> bool {
        match self {
            Self::Any => true,
            Self::List(values) => values.iter().any(|value| value == "*"),
            Self::MirrorRequest => false,
        }
    }

    /// Header value for a preflight given the requested headers, if any.
    pub fn header_value(&self, requested: Option<&str>) -> Option<String> {
        match self {
            Self::Any => Some("*".to_string()),
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
            Self::MirrorRequest => requested
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
