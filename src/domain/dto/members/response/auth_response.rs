use crate::domain::dto::members::response::member_response::MemberResponse;
use crate::domain::entities::members::member::Member;
use serde::{Deserialize, Serialize};

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub member: MemberResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,

    /// 리프레시 토큰 (선택사항)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl LoginResponse {
    /// 새 로그인 응답 생성
    pub fn new(member: Member, access_token: String, expires_in: i64) -> Self {
        Self {
            member: MemberResponse::from(member),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            refresh_token: None,
        }
    }

    /// 리프레시 토큰과 함께 로그인 응답 생성
    pub fn with_refresh_token(
        member: Member,
        access_token: String,
        expires_in: i64,
        refresh_token: String,
    ) -> Self {
        Self {
            member: MemberResponse::from(member),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            refresh_token: Some(refresh_token),
        }
    }
}

/// 토큰 갱신 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn new(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// 로그인 아이디 찾기 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindLoginIdResponse {
    pub login_id: String,
}

/// 임시 비밀번호 발급 응답 DTO
///
/// 임시 비밀번호 평문은 이 응답에서 한 번만 전달됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempPasswordResponse {
    pub temp_password: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_member() -> Member {
        let mut member = Member::new(
            "hong123".to_string(),
            "hashed".to_string(),
            "홍길동".to_string(),
            "hong@example.com".to_string(),
        );
        member.id = Some(1);
        member
    }

    #[test]
    fn test_login_response_token_type_is_bearer() {
        let response = LoginResponse::new(sample_member(), "access".to_string(), 86400);
        assert_eq!(response.token_type, "Bearer");
        assert!(response.refresh_token.is_none());
    }

    #[test]
    fn test_refresh_token_serialized_only_when_present() {
        let without = LoginResponse::new(sample_member(), "access".to_string(), 86400);
        let json = serde_json::to_string(&without).unwrap();
        assert!(!json.contains("refresh_token"));

        let with = LoginResponse::with_refresh_token(
            sample_member(),
            "access".to_string(),
            86400,
            "refresh".to_string(),
        );
        let json = serde_json::to_string(&with).unwrap();
        assert!(json.contains("refresh_token"));
    }

    #[test]
    fn test_token_response_defaults() {
        let response = TokenResponse::new("access".to_string(), 86400);
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 86400);
    }
}
