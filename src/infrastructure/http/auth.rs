//! API Key 校验
//!
//! 调用方在 `X-API-Key` 头中携带密钥，与配置值做常量时间比较

use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

use super::error::ApiError;

/// API key 请求头
pub const API_KEY_HEADER: &str = "x-api-key";

/// API Key 校验器
#[derive(Clone)]
pub struct ApiKeyVerifier {
    key: String,
}

impl ApiKeyVerifier {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// 校验请求头
    ///
    /// - 缺失或为空: MissingApiKey
    /// - 不匹配（包括非 ASCII 头值）: InvalidApiKey
    pub fn verify(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        let value = match headers.get(API_KEY_HEADER) {
            Some(value) if !value.is_empty() => value,
            _ => return Err(ApiError::MissingApiKey),
        };

        if self.matches(value.as_bytes()) {
            Ok(())
        } else {
            Err(ApiError::InvalidApiKey)
        }
    }

    fn matches(&self, candidate: &[u8]) -> bool {
        let expected = self.key.as_bytes();
        if expected.len() != candidate.len() {
            return false;
        }
        expected.ct_eq(candidate).into()
    }
}

impl std::fmt::Debug for ApiKeyVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyVerifier").field("key", &"***").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(key: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(key) = key {
            headers.insert(API_KEY_HEADER, HeaderValue::from_str(key).unwrap());
        }
        headers
    }

    #[test]
    fn test_valid_key() {
        let verifier = ApiKeyVerifier::new("s3cret");
        assert!(verifier.verify(&headers(Some("s3cret"))).is_ok());
    }

    #[test]
    fn test_missing_key() {
        let verifier = ApiKeyVerifier::new("s3cret");
        assert!(matches!(verifier.verify(&headers(None)), Err(ApiError::MissingApiKey)));
        assert!(matches!(verifier.verify(&headers(Some(""))), Err(ApiError::MissingApiKey)));
    }

    #[test]
    fn test_invalid_key() {
        let verifier = ApiKeyVerifier::new("s3cret");
        for key in ["s3cre", "s3cret ", "S3CRET", "other"] {
            assert!(
                matches!(verifier.verify(&headers(Some(key))), Err(ApiError::InvalidApiKey)),
                "{key:?}"
            );
        }
    }

    #[test]
    fn test_debug_hides_key() {
        let verifier = ApiKeyVerifier::new("s3cret");
        assert!(!format!("{:?}", verifier).contains("s3cret"));
    }
}
