use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::header;
use crate::origin::Origin;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub credentials: bool,
    pub max_age: Option<u64>,
    pub options_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Any,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            credentials: false,
            max_age: None,
            options_success_status: 204,
        }
    }
}

impl CorsOptions {
    /// Gateway defaults: the given origin policy with credentials enabled.
    pub fn credentialed(origin: Origin) -> Self {
        Self {
            origin,
            credentials: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let AllowedHeaders::List(values) = &self.allowed_headers {
            if values.len() > 1 && values.iter().any(|value| value == "*") {
                return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
            }
        }

        if self.credentials {
            if matches!(self.methods, AllowedMethods::Any) {
                return Err(ValidationError::WildcardWithCredentials(
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                ));
            }
            if self.allowed_headers.is_wildcard() {
                return Err(ValidationError::WildcardWithCredentials(
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                ));
            }
        }

        if !(200..=299).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidSuccessStatus(
                self.options_success_status,
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} cannot be \"*\" when credentials are allowed")]
    WildcardWithCredentials(&'static str),
    #[error("allowed headers list cannot mix \"*\" with named headers")]
    AllowedHeadersListCannotContainWildcard,
    #[error("preflight success status must be in 200..=299, got {0}")]
    InvalidSuccessStatus(u16),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
