//! api — REST endpoints over an [`ItemRepository`](crate::ItemRepository).
//!
//! Requires the `http` feature. Handlers only translate: they parse the path
//! id and body, call the repository, and map the outcome to a status code.

mod body;
mod error;
mod http;

pub use body::decode_input;
pub use error::ApiError;
pub use http::{router, serve, serve_with_shutdown};
