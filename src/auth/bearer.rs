//! `Authorization` header parsing.

use super::AuthError;
use axum::http::{HeaderMap, header::AUTHORIZATION};

/// Extracts the bearer token from request headers.
///
/// The scheme is matched case-insensitively. A header using another scheme
/// counts as no credential at all.
///
/// # Errors
///
/// Returns [`AuthError::MissingCredentials`] when there is no bearer
/// credential, or [`AuthError::InvalidToken`] when the header is not valid
/// text or the token is empty.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(AuthError::MissingCredentials);
    };
    let text = value
        .to_str()
        .map_err(|_| AuthError::invalid_token("authorization header is not valid text"))?;

    let (scheme, credentials) = text.split_once(' ').unwrap_or((text, ""));
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MissingCredentials);
    }

    let token = credentials.trim();
    if token.is_empty() {
        return Err(AuthError::invalid_token("bearer token is empty"));
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::bearer_token;
    use crate::auth::AuthError;
    use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
    use rstest::rstest;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[rstest]
    #[case("Bearer abc.def.ghi")]
    #[case("bearer abc.def.ghi")]
    #[case("BEARER   abc.def.ghi  ")]
    fn bearer_scheme_is_case_insensitive(#[case] value: &'static str) {
        let headers = headers_with(value);
        assert_eq!(bearer_token(&headers).expect("token"), "abc.def.ghi");
    }

    #[rstest]
    fn missing_header_is_missing_credentials() {
        let headers = HeaderMap::new();
        let result = bearer_token(&headers);
        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }

    #[rstest]
    fn other_scheme_is_missing_credentials() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MissingCredentials)
        ));
    }

    #[rstest]
    #[case("Bearer")]
    #[case("Bearer    ")]
    fn empty_bearer_token_is_invalid(#[case] value: &'static str) {
        let headers = headers_with(value);
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::InvalidToken(_))
        ));
    }
}
