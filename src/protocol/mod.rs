//! Wire-level constants and header helpers.
//!
//! - **[constants]** - header names, service roles, endpoint paths
//! - **headers** - Basic auth and Range header construction

mod headers;

pub use headers::{
    basic_auth_header, basic_credentials, format_range, header_names, token_auth_header,
    TOKEN_PRINCIPAL,
};

/// Protocol constants.
pub mod constants {
    /// Header names.
    pub mod headers {
        /// Credentials header
        pub const AUTHORIZATION: &str = "Authorization";
        /// Byte range header
        pub const RANGE: &str = "Range";
        /// Body media type header
        pub const CONTENT_TYPE: &str = "content-type";
    }

    /// Logical service roles listed by the locator.
    pub mod roles {
        /// Authentication service
        pub const AUTH: &str = "auth";
        /// Session database
        pub const SESSION_DB: &str = "session-db";
        /// File broker
        pub const FILE_BROKER: &str = "file-broker";
    }

    /// Endpoint path segments.
    pub mod paths {
        /// Locator listing
        pub const SERVICES: &str = "/services";
        /// Token issuance
        pub const TOKENS: &str = "/tokens/";
        /// Session collection
        pub const SESSIONS: &str = "/sessions/";
        /// Dataset collection, relative to a session
        pub const DATASETS: &str = "/datasets/";
    }

    /// JSON media type
    pub const APPLICATION_JSON: &str = "application/json";
}
