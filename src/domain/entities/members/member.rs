//! Member Entity Implementation
//!
//! 회원 엔티티의 핵심 구현체입니다.
//! 로그인 아이디/비밀번호 기반 로컬 인증과 리프레시 토큰 화이트리스트를 지원합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 회원 엔티티
///
/// 시스템의 모든 회원을 표현하는 핵심 도메인 엔티티입니다.
/// `_id`는 시퀀스 컬렉션에서 발급되는 숫자 식별자를 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// 숫자 회원 식별자 (시퀀스 발급, 저장 전에는 None)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 로그인 아이디 (unique)
    pub login_id: String,
    /// 해시된 비밀번호 (bcrypt)
    pub pw: String,
    /// 회원 이름
    pub name: String,
    /// 프로필 이미지 파일명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m_image: Option<String>,
    /// 회원 이메일
    pub email: String,
    /// 현재 유효한 리프레시 토큰 (화이트리스트, 로그아웃 시 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Member {
    /// 새 회원 생성 (팩토리 메서드)
    ///
    /// 비밀번호는 이미 해시된 값이어야 합니다.
    /// `id`는 리포지토리가 시퀀스에서 발급합니다.
    pub fn new(login_id: String, pw: String, name: String, email: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            login_id,
            pw,
            name,
            m_image: None,
            email,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 저장된 리프레시 토큰이 제시된 토큰과 일치하는지 확인
    ///
    /// 화이트리스트 검증에 사용됩니다. 저장된 토큰이 없으면 항상 false입니다.
    pub fn matches_refresh_token(&self, token: &str) -> bool {
        self.refresh_token.as_deref() == Some(token)
    }

    /// 프로필 이미지가 설정되어 있는지 확인
    pub fn has_image(&self) -> bool {
        self.m_image.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_member() -> Member {
        Member::new(
            "hong123".to_string(),
            "$2b$04$hash".to_string(),
            "홍길동".to_string(),
            "hong@example.com".to_string(),
        )
    }

    #[test]
    fn test_new_member_has_no_id() {
        let member = sample_member();
        assert!(member.id.is_none());
        assert!(member.refresh_token.is_none());
        assert!(member.m_image.is_none());
    }

    #[test]
    fn test_matches_refresh_token() {
        let mut member = sample_member();
        assert!(!member.matches_refresh_token("token-a"));

        member.refresh_token = Some("token-a".to_string());
        assert!(member.matches_refresh_token("token-a"));
        assert!(!member.matches_refresh_token("token-b"));
    }

    #[test]
    fn test_serde_skips_none_fields() {
        let member = sample_member();
        let json = serde_json::to_value(&member).unwrap();

        assert!(json.get("_id").is_none());
        assert!(json.get("refresh_token").is_none());
        assert!(json.get("m_image").is_none());
        assert_eq!(json["login_id"], "hong123");
    }
}
