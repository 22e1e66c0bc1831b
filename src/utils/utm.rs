//! UTM parameter merging.

use crate::domain::entities::UtmParams;
use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Parses `original_url` and merges the present UTM fields into its query
/// string, returning the final destination URL.
///
/// Each `utm_*` parameter is *set*, not appended: any existing occurrence of
/// the same key is replaced, so merging the same fields twice yields the same
/// URL (idempotent). Other query parameters are preserved in their original
/// order, with the UTM parameters following them.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `original_url` is not an absolute
/// http/https URL.
pub fn merge_utm_params(original_url: &str, utm: &UtmParams) -> Result<String, AppError> {
    let mut url = Url::parse(original_url).map_err(|e| {
        AppError::bad_request(
            "Invalid URL format",
            json!({ "field": "originalUrl", "reason": e.to_string() }),
        )
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::bad_request(
                "Only http/https URLs are allowed",
                json!({ "field": "originalUrl", "scheme": other }),
            ))
        }
    }

    let overrides = utm.pairs();
    if overrides.is_empty() {
        return Ok(url.to_string());
    }

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !overrides.iter().any(|(utm_key, _)| *utm_key == key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        for (key, value) in &overrides {
            pairs.append_pair(key, value);
        }
    }

    Ok(url.to_string())
}
