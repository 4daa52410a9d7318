//! Named-route resolution port.
//!
//! Route tables are owned by the surrounding application; the core only
//! needs a way to turn a symbolic route name into a literal path.

/// Link target used when an entry has no usable url: the named route does
/// not resolve, or both url fields are empty.
pub const UNRESOLVED_URL: &str = "#";

/// Maps a symbolic route name to a literal path.
pub trait UrlResolver: Send + Sync {
    /// Returns the path registered under `name`, or `None` when the name is
    /// unknown. Callers map `None` to [`UNRESOLVED_URL`].
    fn resolve_named(&self, name: &str) -> Option<String>;
}
