//! Integration tests
//!
//! - `store_test` - store operations against a scripted service
//! - `http_client_test` - the reqwest client against wiremock
//! - `server_test` - the development server (requires `ssr`)

mod http_client_test;
