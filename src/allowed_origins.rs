use crate::config::OriginConfig;
use crate::constants::origin;

/// Ordered allow-list of origins, fixed once the gateway starts.
///
/// Entries keep construction order. Empty entries are dropped but nothing is
/// deduplicated or validated: a malformed entry simply never matches a real
/// `Origin` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedOriginSet {
    origins: Vec<String>,
}

impl AllowedOriginSet {
    /// Build the allow-list from configuration plus the built-in production
    /// and local development origins.
    pub fn from_config(config: &OriginConfig) -> Self {
        Self::assemble(config, origin::PRODUCTION, origin::LOCAL_DEVELOPMENT)
    }

    /// Same as [`from_config`](Self::from_config) with caller-supplied
    /// defaults. Order is frontend, admin, `CORS_ORIGINS` entries, production,
    /// local development.
    pub fn assemble<P, L, S, T>(config: &OriginConfig, production: P, local: L) -> Self
    where
        P: IntoIterator<Item = S>,
        L: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let listed = config
            .cors_origins
            .as_deref()
            .map(split_origin_list)
            .unwrap_or_default();

        let origins = config
            .frontend_url
            .iter()
            .cloned()
            .chain(config.admin_url.iter().cloned())
            .chain(listed)
            .chain(production.into_iter().map(Into::into))
            .chain(local.into_iter().map(Into::into))
            .filter(|entry| !entry.is_empty())
            .collect();

        Self { origins }
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    /// Case-sensitive exact membership. No scheme, port or trailing slash
    /// normalisation is applied.
    pub fn contains(&self, candidate: &str) -> bool {
        self.origins.iter().any(|entry| entry == candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedOriginSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            origins: iter
                .into_iter()
                .map(Into::into)
                .filter(|entry: &String| !entry.is_empty())
                .collect(),
        }
    }
}

pub(crate) fn split_origin_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|entry| entry.trim().to_string()).collect()
}

#[cfg(test)]
#[path = "allowed_origins_test.rs"]
mod allowed_origins_test;
