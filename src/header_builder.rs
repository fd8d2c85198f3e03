use crate::allowed_headers::AllowedHeaders;
use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

pub(crate) enum OriginOutcome {
    Allow(HeaderCollection),
    Disallow,
}

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_origin_headers(&self, request: &RequestContext<'_>) -> OriginOutcome {
        let request_origin = request.request_origin();
        match self.options.origin.resolve(request_origin) {
            OriginDecision::Disallow => OriginOutcome::Disallow,
            OriginDecision::Mirror => {
                let mut headers = HeaderCollection::with_estimate(2);
                // Never "*": credentialed responses must name the origin.
                if let Some(origin) = request_origin {
                    headers.push(
                        header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                        origin.to_string(),
                    );
                }
                headers.add_vary(header::ORIGIN);
                OriginOutcome::Allow(headers)
            }
        }
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.options.credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS.to_string(),
                "true".to_string(),
            );
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        if let Some(value) = self.options.methods.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS.to_string(), value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        if matches!(self.options.allowed_headers, AllowedHeaders::MirrorRequest) {
            headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        }
        if let Some(value) = self
            .options
            .allowed_headers
            .header_value(request.access_control_request_headers)
        {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS.to_string(), value);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        match self.options.max_age {
            Some(seconds) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(
                    header::ACCESS_CONTROL_MAX_AGE.to_string(),
                    seconds.to_string(),
                );
                headers
            }
            None => HeaderCollection::new(),
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
