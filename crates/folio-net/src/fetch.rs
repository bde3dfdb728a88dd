//! The fetch capability handed to live command cells.

use futures_util::future::BoxFuture;

use folio_types::error::Result;

/// Future returned by [`Fetcher::get_json`].
pub type FetchFuture<'a> = BoxFuture<'a, Result<serde_json::Value>>;

/// A single best-effort HTTP GET returning a JSON document.
///
/// Implementations collapse every failure (transport, status, decode) into
/// `FolioError::Fetch`.
pub trait Fetcher: Send + Sync {
    fn get_json<'a>(&'a self, url: &'a str) -> FetchFuture<'a>;
}
