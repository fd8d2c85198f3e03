use crate::context::RequestContext;
use crate::header_builder::{HeaderBuilder, OriginOutcome};
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::Origin;
use crate::result::{CorsDecision, CorsRejection, CorsResult};

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// Built once at startup and shared read-only between request tasks.
#[derive(Debug)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn origin(&self) -> &Origin {
        &self.options.origin
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);
        let origin_headers = match builder.build_origin_headers(request) {
            OriginOutcome::Allow(headers) => headers,
            OriginOutcome::Disallow => {
                return CorsDecision::Rejected(CorsRejection {
                    origin: request.origin.unwrap_or_default().to_string(),
                });
            }
        };

        if request.is_preflight() {
            CorsDecision::Preflight(self.process_preflight(&builder, request, origin_headers))
        } else {
            CorsDecision::Simple(self.process_simple(&builder, origin_headers))
        }
    }

    fn process_preflight(
        &self,
        builder: &HeaderBuilder<'_>,
        request: &RequestContext<'_>,
        origin_headers: HeaderCollection,
    ) -> CorsResult {
        let mut headers = origin_headers;
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers(request));
        headers.extend(builder.build_max_age_header());

        CorsResult {
            headers: headers.into_headers(),
            status: Some(self.options.options_success_status),
            end_response: true,
        }
    }

    fn process_simple(
        &self,
        builder: &HeaderBuilder<'_>,
        origin_headers: HeaderCollection,
    ) -> CorsResult {
        let mut headers = origin_headers;
        headers.extend(builder.build_credentials_header());

        CorsResult {
            headers: headers.into_headers(),
            status: None,
            end_response: false,
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
