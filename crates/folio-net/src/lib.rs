//! Outbound networking for live terminal commands.
//!
//! Commands never talk to the network directly: they go through the
//! [`Fetcher`] capability, so hosts can plug in the real HTTP client or a
//! deterministic [`MockFetcher`].

pub mod fetch;
pub mod http;
pub mod mock;

pub use fetch::{FetchFuture, Fetcher};
pub use http::HttpFetcher;
pub use mock::{MockFetcher, MockResponse};
