//! Async client for the API-Football v3 REST API.
//!
//! ```no_run
//! use football_api::{FootballApi, Params};
//!
//! # async fn run() -> football_api::ApiResult<()> {
//! let api = FootballApi::from_key("my-key")?;
//! let table = api
//!     .standings(&Params::new().with("league", 39).with("season", 2023))
//!     .await?;
//! println!("{} tables", table.results);
//! # Ok(())
//! # }
//! ```
//!
//! Every endpoint method validates its parameter bag before any request is
//! made, so a bad filter surfaces as [`ApiError::Validation`] without using
//! quota.

pub mod client;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod params;
pub mod transport;
pub mod validate;

pub use client::{ApiBuilder, FootballApi};
pub use decode::Tolerant;
pub use endpoint::Endpoint;
pub use error::{ApiError, ApiResult};
pub use models::search::SearchKind;
pub use models::{ApiResponse, Paging};
pub use params::{ParamValue, Params};
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, ResponseBody,
    TransportError,
};
pub use validate::ValidationError;
