//! Request gating middleware.
//!
//! - [`api_key::RequireApiKey`] -- Requires the shared secret in `X-API-Key`.

pub mod api_key;
