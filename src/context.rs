/// Borrowed view of the request fields the CORS engine reads.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// An empty `Origin` header counts as no origin at all.
    pub fn request_origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.is_empty())
    }

    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(crate::constants::method::OPTIONS)
    }
}
