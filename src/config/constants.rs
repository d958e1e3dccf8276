//! Application-wide constants
//!
//! Centralized location for field names, environment variable names and
//! per-target preset values.

// =============================================================================
// Field Names
// =============================================================================

/// Serialized name of the production flag
pub const FIELD_PRODUCTION: &str = "production";

/// Serialized name of the backend base URL
pub const FIELD_API_SERVER_URL: &str = "apiServerUrl";

/// Serialized name of the identity-provider tenant prefix
pub const FIELD_AUTH_DOMAIN: &str = "auth.domain";

/// Serialized name of the protected API identifier
pub const FIELD_AUTH_AUDIENCE: &str = "auth.audience";

/// Serialized name of the public client identifier
pub const FIELD_AUTH_CLIENT_ID: &str = "auth.clientId";

/// Serialized name of the post-login redirect URL
pub const FIELD_AUTH_CALLBACK_URL: &str = "auth.callbackUrl";

// =============================================================================
// Environment Variables
// =============================================================================

/// Selects the deployment target
pub const ENV_APP_ENV: &str = "APP_ENV";

/// Optional JSON file layered on top of the preset
pub const ENV_CONFIG_PATH: &str = "ENV_CONFIG_PATH";

pub const ENV_PRODUCTION: &str = "PRODUCTION";
pub const ENV_API_SERVER_URL: &str = "API_SERVER_URL";
pub const ENV_AUTH0_DOMAIN: &str = "AUTH0_DOMAIN";
pub const ENV_AUTH0_AUDIENCE: &str = "AUTH0_AUDIENCE";
pub const ENV_AUTH0_CLIENT_ID: &str = "AUTH0_CLIENT_ID";
pub const ENV_AUTH0_CALLBACK_URL: &str = "AUTH0_CALLBACK_URL";

// =============================================================================
// Identity Provider (shared by all targets)
// =============================================================================

/// Auth0 tenant prefix
pub const AUTH0_DOMAIN: &str = "fsnd-habibah.us";

/// Audience set for the Auth0 API
pub const AUTH0_AUDIENCE: &str = "Coffee-Shop";

/// Client id generated for the Auth0 application
pub const AUTH0_CLIENT_ID: &str = "TyW3HeImMOfVn54oolbBbpzEfkH4iNjK";

// =============================================================================
// Development
// =============================================================================

/// Local Flask API server
pub const DEV_API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Local Ionic application login landing page
pub const DEV_CALLBACK_URL: &str = "https://localhost:4200/login-results";

// =============================================================================
// Production
// =============================================================================

/// Deployed API server
pub const PROD_API_SERVER_URL: &str = "https://api.coffee-shop.example.com";

/// Deployed application login landing page
pub const PROD_CALLBACK_URL: &str = "https://coffee-shop.example.com/login-results";

// =============================================================================
// Backend Routes
// =============================================================================

/// Public drink listing (short recipes)
pub const ROUTE_DRINKS: &str = "drinks";

/// Drink listing with full recipes (requires `get:drinks-detail`)
pub const ROUTE_DRINKS_DETAIL: &str = "drinks-detail";
