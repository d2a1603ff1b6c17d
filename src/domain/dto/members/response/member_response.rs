use crate::domain::entities::members::member::Member;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 회원 응답 DTO
///
/// 비밀번호 해시와 리프레시 토큰은 응답에 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub login_id: String,
    pub name: String,
    pub email: String,

    /// 프로필 이미지 경로 (없으면 null)
    pub m_image: Option<String>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        let Member {
            id,
            login_id,
            name,
            email,
            m_image,
            created_at,
            updated_at,
            ..
        } = member;

        Self {
            id: id.unwrap_or_default(),
            login_id,
            name,
            email,
            m_image,
            created_at,
            updated_at,
        }
    }
}

/// 회원 생성 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMemberResponse {
    pub member: MemberResponse,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_excludes_sensitive_fields() {
        let mut member = Member::new(
            "hong123".to_string(),
            "$2b$10$hash".to_string(),
            "홍길동".to_string(),
            "hong@example.com".to_string(),
        );
        member.id = Some(42);
        member.refresh_token = Some("secret-token".to_string());

        let response = MemberResponse::from(member);
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(response.id, 42);
        assert!(!json.contains("$2b$10$hash"));
        assert!(!json.contains("secret-token"));
        assert!(json.contains("hong123"));
    }

    #[test]
    fn test_missing_id_defaults_to_zero() {
        let member = Member::new(
            "hong123".to_string(),
            "pw".to_string(),
            "홍길동".to_string(),
            "hong@example.com".to_string(),
        );
        let response = MemberResponse::from(member);
        assert_eq!(response.id, 0);
    }
}
