use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// JWT 토큰에서 추출된 회원 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedMember {
    /// 회원 고유 ID
    pub id: i64,

    /// 로그인 아이디
    pub login_id: String,

    /// 회원 권한 목록
    pub authorities: Vec<String>,
}

impl AuthenticatedMember {
    /// 특정 권한을 보유하고 있는지 확인
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(&authority.to_string())
    }

    /// 여러 권한 중 하나라도 보유하고 있는지 확인
    pub fn has_any_authority(&self, authorities: &[&str]) -> bool {
        authorities.iter().any(|&a| self.has_authority(a))
    }

    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.has_authority("ROLE_ADMIN")
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedMember {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedMember>() {
            Some(member) => ready(Ok(member.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

/// 선택적 인증 회원 추출자
#[derive(Debug, Clone)]
pub struct OptionalMember(pub Option<AuthenticatedMember>);

impl FromRequest for OptionalMember {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let member = req.extensions().get::<AuthenticatedMember>().cloned();
        ready(Ok(OptionalMember(member)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_with(authorities: Vec<&str>) -> AuthenticatedMember {
        AuthenticatedMember {
            id: 1,
            login_id: "hong123".to_string(),
            authorities: authorities.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_has_authority() {
        let member = member_with(vec!["ROLE_MEMBER"]);
        assert!(member.has_authority("ROLE_MEMBER"));
        assert!(!member.has_authority("ROLE_ADMIN"));
    }

    #[test]
    fn test_has_any_authority() {
        let member = member_with(vec!["ROLE_MEMBER"]);
        assert!(member.has_any_authority(&["ROLE_ADMIN", "ROLE_MEMBER"]));
        assert!(!member.has_any_authority(&["ROLE_ADMIN"]));
    }

    #[test]
    fn test_is_admin() {
        assert!(member_with(vec!["ROLE_ADMIN"]).is_admin());
        assert!(!member_with(vec!["ROLE_MEMBER"]).is_admin());
    }
}
