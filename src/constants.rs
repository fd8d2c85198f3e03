pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Origins baked into the allow-list regardless of configuration.
pub mod origin {
    /// Deployed storefront and admin clients.
    pub const PRODUCTION: [&str; 2] = [
        "https://foodie-frenzy-frontend-eone.onrender.com",
        "https://foodie-frenzy-admin.onrender.com",
    ];

    /// Vite dev server (5173) and preview server (4173).
    pub const LOCAL_DEVELOPMENT: [&str; 3] = [
        "http://localhost:5173",
        "http://127.0.0.1:5173",
        "http://localhost:4173",
    ];
}

pub mod env {
    pub const FRONTEND_URL: &str = "FRONTEND_URL";
    pub const ADMIN_URL: &str = "ADMIN_URL";
    pub const CORS_ORIGINS: &str = "CORS_ORIGINS";
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    pub const UPLOADS_DIR: &str = "UPLOADS_DIR";
    pub const STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";
}

pub mod route {
    pub const ROOT: &str = "/";
    pub const USER: &str = "/api/user";
    pub const CART: &str = "/api/cart";
    pub const ITEMS: &str = "/api/items";
    pub const ORDERS: &str = "/api/orders";
    pub const UPLOADS: &str = "/uploads";
}

pub const NOT_ALLOWED_BY_CORS: &str = "Not allowed by CORS";
pub const HEALTH_MESSAGE: &str = "API WORKING";
