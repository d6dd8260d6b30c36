//! Search request construction: query parameters and URL composition

use std::collections::BTreeMap;

/// Query parameter name carrying the author filter
pub const AUTHOR_PARAM: &str = "author";

/// Query parameters for a search request, keyed by parameter name
///
/// Values are stored unescaped; encoding happens in [`compose_url`]. A
/// `BTreeMap` keeps the composed URL stable for a given set of parameters.
pub type QueryParams = BTreeMap<String, String>;

/// Build the query parameters for an author search
///
/// The author string is taken verbatim, including the empty string.
pub fn prepare(author: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert(AUTHOR_PARAM.to_string(), author.to_string());
    params
}

/// Append `params` to `base` as a form-encoded query string
///
/// Keys appear in sorted order and values are percent-encoded
/// (`application/x-www-form-urlencoded`, so a space becomes `+`). An empty
/// parameter map yields `base` unchanged.
///
/// # Examples
///
/// ```
/// use book_query::query::{compose_url, prepare};
///
/// let url = compose_url("https://buscador", &prepare("Agatha Christie"));
/// assert_eq!(url, "https://buscador?author=Agatha+Christie");
/// ```
pub fn compose_url(base: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        return base.to_string();
    }

    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish();

    format!("{}?{}", base, query)
}
