use std::borrow::Cow;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::app::AppState;
use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::Headers;
use crate::result::{CorsDecision, CorsResult};

/// Runs the CORS policy once per request, ahead of every route.
pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let decision = {
        let headers = request.headers();
        let origin = header_value(headers, header::ORIGIN);
        let request_method = header_value(headers, header::ACCESS_CONTROL_REQUEST_METHOD);
        let request_headers = header_value(headers, header::ACCESS_CONTROL_REQUEST_HEADERS);

        state.cors.check(&RequestContext {
            method: request.method().as_str(),
            origin: origin.as_deref(),
            access_control_request_method: request_method.as_deref(),
            access_control_request_headers: request_headers.as_deref(),
        })
    };

    match decision {
        CorsDecision::Preflight(result) => preflight_response(result),
        CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &result.headers);
            response
        }
        CorsDecision::Rejected(rejection) => {
            debug!(origin = %rejection.origin, path = %request.uri().path(), "{rejection}");
            next.run(request).await
        }
    }
}

fn preflight_response(result: CorsResult) -> Response {
    let status = result
        .status
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::NO_CONTENT);

    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    apply_headers(response.headers_mut(), &result.headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            if name.eq_ignore_ascii_case(header::VARY) {
                map.append(header_name, header_value);
            } else {
                map.insert(header_name, header_value);
            }
        }
    }
}

/// Opaque bytes are kept lossily so a garbled origin still fails to match
/// instead of reading as "no origin".
fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<Cow<'a, str>> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
}
