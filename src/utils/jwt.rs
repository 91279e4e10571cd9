use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::models::JsonMap;

// 认证服务签发的 access token 中用到的字段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearerClaims {
    pub sub: String, // Subject (账号 ID)
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: usize,
    #[serde(default)]
    pub user_metadata: JsonMap,
}

impl BearerClaims {
    /// 注册时填写的姓名
    pub fn full_name(&self) -> Option<String> {
        self.user_metadata
            .get("full_name")
            .and_then(|value| value.as_str())
            .map(str::to_string)
    }
}

pub struct JwtUtils;

impl JwtUtils {
    // 使用共享密钥校验 HS256 签名与过期时间
    pub fn verify_bearer(token: &str, secret: &str) -> Result<BearerClaims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        // 不限定 aud，认证服务签发的是 "authenticated"
        validation.validate_aud = false;

        decode::<BearerClaims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use jsonwebtoken::{EncodingKey, Header, encode};

    pub const TEST_SECRET: &str = "test-jwt-secret";

    /// 签发测试用 token，`ttl_secs` 为负数时生成已过期的 token
    pub fn sign_token(sub: &str, full_name: Option<&str>, ttl_secs: i64, secret: &str) -> String {
        let exp = chrono::Utc::now().timestamp() + ttl_secs;
        let mut claims = serde_json::json!({
            "sub": sub,
            "aud": "authenticated",
            "role": "authenticated",
            "exp": exp,
        });
        if let Some(name) = full_name {
            claims["user_metadata"] = serde_json::json!({ "full_name": name });
        }
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    /// 已验证的测试账号声明
    pub fn claims_for(sub: &str) -> super::BearerClaims {
        let token = sign_token(sub, Some("Ada Lovelace"), 3600, TEST_SECRET);
        super::JwtUtils::verify_bearer(&token, TEST_SECRET).unwrap()
    }
}
