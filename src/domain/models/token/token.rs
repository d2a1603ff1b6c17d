//! JWT 인증 토큰 구조체 및 페어링 된 세트
//!
//! RFC 7519 JWT 표준 클레임과 2개의 용도별 토큰을 페어링 한 정보를 표시합니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// RFC 7519 JWT 표준의 클레임과 애플리케이션 특화 클레임을 포함합니다.
/// 개인정보 보호를 위해 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `id`: 회원 고유 ID (문자열로 직렬화)
/// - `loginId`: 로그인 아이디
/// - `authorities`: 회원 권한 목록 (액세스 토큰에만 포함)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 회원 고유 ID (문자열)
    pub id: String,
    /// 로그인 아이디
    #[serde(rename = "loginId")]
    pub login_id: String,
    /// 회원 권한 목록 (리프레시 토큰에는 포함되지 않음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorities: Option<Vec<String>>,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 쌍 구조체
///
/// 로그인 성공 시 클라이언트에게 전달되는 토큰 집합을 나타냅니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize_login_id_as_camel_case() {
        let claims = TokenClaims {
            id: "1".to_string(),
            login_id: "hong123".to_string(),
            authorities: Some(vec!["ROLE_MEMBER".to_string()]),
            iat: 0,
            exp: 100,
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["loginId"], "hong123");
        assert_eq!(json["id"], "1");
        assert!(json.get("login_id").is_none());
    }

    #[test]
    fn test_claims_skip_authorities_when_none() {
        let claims = TokenClaims {
            id: "1".to_string(),
            login_id: "hong123".to_string(),
            authorities: None,
            iat: 0,
            exp: 100,
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("authorities").is_none());
    }
}
