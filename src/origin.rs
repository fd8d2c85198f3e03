use crate::allowed_origins::AllowedOriginSet;

/// Which request origins receive CORS headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Origin {
    /// Reflect every origin. Used when the allow-list ends up empty.
    #[default]
    Any,
    /// Reflect only origins listed here, plus requests without an origin.
    /// An empty list behaves like [`Origin::Any`].
    List(AllowedOriginSet),
}

/// Outcome of matching one request origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginDecision {
    /// Echo the request origin back, if there is one.
    Mirror,
    Disallow,
}

impl OriginDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, OriginDecision::Mirror)
    }
}

impl From<bool> for OriginDecision {
    fn from(value: bool) -> Self {
        if value {
            OriginDecision::Mirror
        } else {
            OriginDecision::Disallow
        }
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().collect())
    }

    /// An empty allow-list falls back to [`Origin::Any`].
    pub fn from_allowed(origins: AllowedOriginSet) -> Self {
        if origins.is_empty() {
            Self::Any
        } else {
            Self::List(origins)
        }
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        match self {
            Origin::Any => OriginDecision::Mirror,
            Origin::List(origins) if origins.is_empty() => OriginDecision::Mirror,
            Origin::List(origins) => match request_origin {
                None => OriginDecision::Mirror,
                Some(origin) => origins.contains(origin).into(),
            },
        }
    }

    pub fn is_permissive(&self) -> bool {
        match self {
            Origin::Any => true,
            Origin::List(origins) => origins.is_empty(),
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
