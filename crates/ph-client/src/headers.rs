use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::ProductHuntClientError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Builds the [HeaderMap] sent with every request to Product Hunt.
///
/// The bearer token is marked sensitive so it never shows up in `Debug` output.
pub fn build(token: &str) -> Result<HeaderMap, ProductHuntClientError> {
    let mut headers = HeaderMap::new();

    let json = HeaderValue::from_static(JSON_CONTENT_TYPE);
    headers.insert(ACCEPT, json.clone());
    headers.insert(CONTENT_TYPE, json);

    let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);

    tracing::trace!(request_headers = ?headers);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
    use speculoos::prelude::*;

    use super::build;

    #[test]
    fn it_builds_bearer_headers() {
        let headers = build("abc123").unwrap();

        assert_that!(headers.len()).is_equal_to(3);
        assert_that!(headers[ACCEPT].to_str().unwrap()).is_equal_to("application/json");
        assert_that!(headers[CONTENT_TYPE].to_str().unwrap()).is_equal_to("application/json");
        assert_that!(headers[AUTHORIZATION].to_str().unwrap()).is_equal_to("Bearer abc123");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn it_masks_the_token_when_debugged() {
        let headers = build("abc123").unwrap();
        assert!(!format!("{headers:?}").contains("abc123"));
    }

    #[test]
    fn it_rejects_tokens_that_cannot_be_headers() {
        assert!(build("abc\n123").is_err());
    }
}
