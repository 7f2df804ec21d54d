//! Header-injecting auth middleware for the reqwest transport.

use httperactor_core::AuthMiddleware;
use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue, InvalidHeaderValue};

/// Auth middleware that inserts one prebuilt header into the built
/// request.
///
/// The header value is validated at construction, so
/// [`apply`](AuthMiddleware::apply) is infallible. Values are marked
/// sensitive to keep credentials out of debug output.
#[derive(Debug, Clone)]
pub struct HeaderAuth {
    name: HeaderName,
    value: HeaderValue,
}

impl HeaderAuth {
    /// Bearer-token authentication via the `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHeaderValue`] when the token contains bytes that
    /// are not valid in a header value.
    pub fn bearer(token: &str) -> Result<Self, InvalidHeaderValue> {
        Self::api_key(AUTHORIZATION, &format!("Bearer {token}"))
    }

    /// API-key authentication via an arbitrary header, e.g. `x-api-key`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHeaderValue`] when the key contains bytes that are
    /// not valid in a header value.
    pub fn api_key(name: HeaderName, key: &str) -> Result<Self, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(key)?;
        value.set_sensitive(true);
        Ok(Self { name, value })
    }
}

impl AuthMiddleware<reqwest::Request> for HeaderAuth {
    fn apply(&self, mut request: reqwest::Request) -> reqwest::Request {
        request.headers_mut().insert(self.name.clone(), self.value.clone());
        request
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code can use unwrap

    use super::*;

    #[test]
    fn bearer_sets_the_authorization_header() {
        let auth = HeaderAuth::bearer("sekret").unwrap();
        let request = reqwest::Request::new(
            reqwest::Method::GET,
            "https://api.example.com/".parse().unwrap(),
        );

        let request = auth.apply(request);

        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            &HeaderValue::from_static("Bearer sekret"),
        );
    }

    #[test]
    fn rejects_tokens_that_cannot_be_a_header_value() {
        assert!(HeaderAuth::bearer("line\nbreak").is_err());
    }
}
