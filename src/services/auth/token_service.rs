//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성, 검증을 담당합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::{
    config::JwtConfig,
    core::errors::AppError,
    domain::entities::members::member::Member,
};
use crate::domain::models::token::token::{TokenClaims, TokenPair};

/// 토큰 검증 실패 원인
///
/// 만료와 그 외의 실패를 구분합니다. 리프레시 토큰 갱신 플로우에서는
/// 만료가 별도의 에러 응답으로 이어지므로 호출부에서 구분이 필요합니다.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("토큰이 만료되었습니다")]
    Expired,

    #[error("유효하지 않은 토큰입니다: {0}")]
    Invalid(String),
}

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 액세스 토큰(기본 1일)과 리프레시 토큰(기본 3일)을 지원합니다.
///
/// 액세스 토큰 클레임에는 권한 목록(authorities)이 포함되고,
/// 리프레시 토큰에는 포함되지 않습니다.
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 회원을 위한 JWT 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `member` - 토큰을 발급받을 회원 정보
    /// * `authorities` - 토큰에 포함할 권한 목록
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 회원 ID 없음
    pub fn generate_access_token(
        &self,
        member: &Member,
        authorities: Vec<String>,
    ) -> Result<String, AppError> {
        self.access_token_with_ttl(member, authorities, JwtConfig::access_expiration_days())
    }

    fn access_token_with_ttl(
        &self,
        member: &Member,
        authorities: Vec<String>,
        ttl_days: i64,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::days(ttl_days);

        let member_id = member.id.ok_or_else(|| {
            AppError::InternalError("회원 ID가 없습니다".to_string())
        })?;

        let claims = TokenClaims {
            id: member_id.to_string(),
            login_id: member.login_id.clone(),
            authorities: Some(authorities),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.encode_claims(&claims)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 회원을 위한 리프레시 토큰 생성
    ///
    /// 권한 목록은 포함하지 않습니다. 갱신 시점의 권한은
    /// 저장된 회원 정보에서 다시 계산됩니다.
    ///
    /// # Security
    ///
    /// 리프레시 토큰은 Secure HttpOnly Cookie에 저장하는 것을 권장합니다.
    pub fn generate_refresh_token(&self, member: &Member) -> Result<String, AppError> {
        self.refresh_token_with_ttl(member, JwtConfig::refresh_expiration_days())
    }

    fn refresh_token_with_ttl(&self, member: &Member, ttl_days: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::days(ttl_days);

        let member_id = member.id.ok_or_else(|| {
            AppError::InternalError("회원 ID가 없습니다".to_string())
        })?;

        let claims = TokenClaims {
            id: member_id.to_string(),
            login_id: member.login_id.clone(),
            authorities: None,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.encode_claims(&claims)
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 생성 실패: {}", e)))
    }

    fn encode_claims(&self, claims: &TokenClaims) -> Result<String, jsonwebtoken::errors::Error> {
        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, claims, &encoding_key)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_pair = token_service.generate_token_pair(&member, authorities)?;
    /// println!("Access token: {}", token_pair.access_token);
    /// println!("Expires in: {} seconds", token_pair.expires_in);
    /// ```
    pub fn generate_token_pair(
        &self,
        member: &Member,
        authorities: Vec<String>,
    ) -> Result<TokenPair, AppError> {
        let access_token = self.generate_access_token(member, authorities)?;
        let refresh_token = self.generate_refresh_token(member)?;
        let expires_in = JwtConfig::access_expiration_days() * 86400; // 초 단위로 변환

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in,
        })
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 만료 시각은 유예 시간(leeway) 없이 정확히 비교합니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::Expired` - 토큰 만료
    /// * `TokenError::Invalid` - 잘못된 형식 또는 서명
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) => Ok(token),
            None => Err(AppError::InvalidToken(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            )),
        }
    }
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
        member.id = Some(7);
        member
    }

    fn service() -> TokenService {
        TokenService {}
    }

    #[test]
    fn test_access_token_roundtrip() {
        let svc = service();
        let member = sample_member();
        let token = svc
            .generate_access_token(&member, vec!["ROLE_MEMBER".to_string()])
            .unwrap();

        let claims = svc.verify_token(&token).unwrap();
        assert_eq!(claims.id, "7");
        assert_eq!(claims.login_id, "hong123");
        assert_eq!(claims.authorities, Some(vec!["ROLE_MEMBER".to_string()]));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_token_has_no_authorities() {
        let svc = service();
        let member = sample_member();
        let token = svc.generate_refresh_token(&member).unwrap();

        let claims = svc.verify_token(&token).unwrap();
        assert_eq!(claims.id, "7");
        assert!(claims.authorities.is_none());
    }

    #[test]
    fn test_expired_token_is_detected() {
        let svc = service();
        let member = sample_member();
        let token = svc.access_token_with_ttl(&member, vec![], -1).unwrap();

        match svc.verify_token(&token) {
            Err(TokenError::Expired) => {}
            other => panic!("만료 에러를 기대했지만 {:?}를 받음", other),
        }
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let svc = service();
        match svc.verify_token("not.a.jwt") {
            Err(TokenError::Invalid(_)) => {}
            other => panic!("형식 에러를 기대했지만 {:?}를 받음", other),
        }
    }

    #[test]
    fn test_member_without_id_fails() {
        let svc = service();
        let member = Member::new(
            "hong123".to_string(),
            "hashed".to_string(),
            "홍길동".to_string(),
            "hong@example.com".to_string(),
        );
        assert!(svc.generate_access_token(&member, vec![]).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let svc = service();
        assert_eq!(svc.extract_bearer_token("Bearer abc123").unwrap(), "abc123");
        assert!(svc.extract_bearer_token("Basic abc123").is_err());
        assert!(svc.extract_bearer_token("abc123").is_err());
    }
}
