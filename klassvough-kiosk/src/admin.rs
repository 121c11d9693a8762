//! Whether the kiosk opens with the admin table visible.

use url::Url;

/// Values of the `admin` flag that turn the table on. Case-sensitive.
const TRUTHY: [&str; 3] = ["1", "true", "yes"];

pub fn is_truthy(token: &str) -> bool {
    TRUTHY.contains(&token)
}

/// Reads the first `admin` query parameter of a page URL.
///
/// A URL that does not parse counts as no flag.
pub fn admin_from_page_url(page_url: &str) -> bool {
    let url = match Url::parse(page_url) {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!(%page_url, error = %err, "ignoring unparsable page URL");
            return false;
        }
    };

    url.query_pairs()
        .find(|(key, _)| key == "admin")
        .is_some_and(|(_, value)| is_truthy(&value))
}

/// Combines `--admin <token>` and `--page-url <url>`; either can enable it.
pub fn admin_on_load(token: Option<&str>, page_url: Option<&str>) -> bool {
    token.is_some_and(is_truthy) || page_url.is_some_and(admin_from_page_url)
}
