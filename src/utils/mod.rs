mod uri;

use tracing_batteries::prelude::*;

pub use uri::UriReference;

/// The host which every redirected URL is pointed at.
pub const REDIRECT_HOST: &str = "www.byfood.com";

/// The transformation(s) which [`process_url`] should apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlOperation {
    /// Remove the query string and a trailing slash.
    Canonical,
    /// Point the URL at [`REDIRECT_HOST`] and lower-case it.
    Redirection,
    /// [`UrlOperation::Canonical`] followed by [`UrlOperation::Redirection`].
    All,
    /// Anything else; the URL is returned untouched.
    #[default]
    #[serde(other)]
    Unrecognized,
}

impl From<&str> for UrlOperation {
    fn from(operation: &str) -> Self {
        match operation {
            "canonical" => UrlOperation::Canonical,
            "redirection" => UrlOperation::Redirection,
            "all" => UrlOperation::All,
            _ => UrlOperation::Unrecognized,
        }
    }
}

/// Applies `operation` to `url`.
///
/// URLs which cannot be parsed are returned unchanged; the parse failure is
/// reported as a warning rather than to the caller.
pub fn process_url(url: &str, operation: UrlOperation) -> String {
    match operation {
        UrlOperation::Canonical => canonical_url(url),
        UrlOperation::Redirection => redirect_url(url),
        UrlOperation::All => redirect_url(&canonical_url(url)),
        UrlOperation::Unrecognized => url.to_string(),
    }
}

fn canonical_url(url: &str) -> String {
    rewrite(url, UriReference::canonicalize)
}

fn redirect_url(url: &str) -> String {
    rewrite(url, |uri| uri.redirect_to(REDIRECT_HOST))
}

fn rewrite<F: FnOnce(&mut UriReference)>(url: &str, transform: F) -> String {
    match url.parse::<UriReference>() {
        Ok(mut uri) => {
            transform(&mut uri);
            uri.to_string()
        }
        Err(err) => {
            warn!(
                { url = %url, exception.message = %err },
                "Unable to parse the URL, it will be returned unchanged"
            );
            url.to_string()
        }
    }
}
