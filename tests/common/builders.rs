use foodie_backend::constants::method;
use foodie_backend::{
    AllowedOriginSet, Cors, CorsDecision, CorsOptions, Origin, OriginConfig, RequestContext,
};

#[derive(Default)]
pub struct GatewayBuilder {
    frontend_url: Option<String>,
    admin_url: Option<String>,
    cors_origins: Option<String>,
    without_defaults: bool,
}

impl GatewayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frontend_url(mut self, value: impl Into<String>) -> Self {
        self.frontend_url = Some(value.into());
        self
    }

    pub fn admin_url(mut self, value: impl Into<String>) -> Self {
        self.admin_url = Some(value.into());
        self
    }

    pub fn cors_origins(mut self, value: impl Into<String>) -> Self {
        self.cors_origins = Some(value.into());
        self
    }

    /// Drop the built-in production and local origins.
    pub fn without_defaults(mut self) -> Self {
        self.without_defaults = true;
        self
    }

    pub fn config(&self) -> OriginConfig {
        OriginConfig {
            frontend_url: self.frontend_url.clone(),
            admin_url: self.admin_url.clone(),
            cors_origins: self.cors_origins.clone(),
        }
    }

    pub fn origins(&self) -> AllowedOriginSet {
        let config = self.config();
        if self.without_defaults {
            AllowedOriginSet::assemble(&config, Vec::<String>::new(), Vec::<String>::new())
        } else {
            AllowedOriginSet::from_config(&config)
        }
    }

    pub fn build(self) -> Cors {
        Cors::new(CorsOptions::credentialed(Origin::from_allowed(self.origins())))
            .expect("valid CORS configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl RequestBuilder {
    fn with_method(method: &str) -> Self {
        Self {
            method: method.into(),
            origin: None,
            request_method: None,
            request_headers: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        cors.check(&ctx)
    }
}

pub fn gateway() -> GatewayBuilder {
    GatewayBuilder::new()
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::with_method(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::with_method(method::OPTIONS)
}
