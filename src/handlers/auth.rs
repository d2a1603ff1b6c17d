//! Authentication HTTP Handlers
//!
//! 회원 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 로그인, 토큰 갱신, 로그아웃과 계정 찾기 플로우를 담당하며,
//! JWT 토큰 기반의 상태 없는 인증을 구현합니다.
//!
//! # Endpoints
//!
//! - **로그인**: 아이디/비밀번호 인증 (`POST /auth/login`)
//! - **토큰 갱신**: 리프레시 토큰으로 액세스 토큰 재발급 (`POST /auth/refresh`)
//! - **로그아웃**: 리프레시 토큰 무효화 (`POST /auth/logout`)
//! - **아이디 찾기**: 이메일로 로그인 아이디 조회 (`POST /auth/find-login-id`)
//! - **임시 비밀번호**: 아이디+이메일 확인 후 발급 (`POST /auth/temp-password`)
use actix_web::{post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::members::request::{
    FindLoginIdRequest, LoginRequest, RefreshTokenRequest, TempPasswordRequest,
};
use crate::domain::dto::members::response::{LoginResponse, TokenResponse};
use crate::domain::models::auth::authenticated_member::AuthenticatedMember;
use crate::services::members::member_service::MemberService;

/// 로그인 핸들러
///
/// 로그인 아이디와 비밀번호를 검증하고 토큰 쌍을 발급합니다.
/// 발급된 리프레시 토큰은 회원 문서에 저장되어 이후 갱신 요청의
/// 화이트리스트로 사용됩니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let member_service = MemberService::instance();

    let (member, tokens) = member_service.login(&payload.login_id, &payload.pw).await?;

    log::info!("로그인 성공 - login_id: {}", payload.login_id);

    let response = LoginResponse::with_refresh_token(
        member,
        tokens.access_token,
        tokens.expires_in,
        tokens.refresh_token,
    );

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 갱신 엔드포인트
///
/// 리프레시 토큰으로 새 액세스 토큰을 발급합니다. 저장된 토큰과
/// 일치하지 않으면 거부되고, 만료된 경우 별도의 에러로 응답하여
/// 클라이언트가 재로그인하도록 안내합니다. 리프레시 토큰 자체는
/// 교체되지 않습니다.
///
/// # Endpoint
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh_token(
    req: HttpRequest,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, AppError> {
    let member_service = MemberService::instance();

    // 리프레시 토큰을 쿠키 또는 요청 본문에서 추출
    let rt = extract_refresh_token(&req, body.as_deref())?;

    let (access_token, expires_in) = member_service.refresh_access_token(&rt).await?;

    Ok(HttpResponse::Ok().json(TokenResponse::new(access_token, expires_in)))
}

/// 로그아웃 엔드포인트
///
/// 저장된 리프레시 토큰을 제거하여 이후 갱신 요청을 차단합니다.
/// 인증된 회원만 호출할 수 있습니다.
///
/// # Endpoint
/// `POST /auth/logout`
#[post("/logout")]
pub async fn logout(member: AuthenticatedMember) -> Result<HttpResponse, AppError> {
    let member_service = MemberService::instance();

    member_service.logout(member.id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "로그아웃되었습니다"
    })))
}

/// 로그인 아이디 찾기 엔드포인트
///
/// # Endpoint
/// `POST /auth/find-login-id`
#[post("/find-login-id")]
pub async fn find_login_id(
    payload: web::Json<FindLoginIdRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let member_service = MemberService::instance();
    let response = member_service.find_login_id_by_email(&payload.email).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 임시 비밀번호 발급 엔드포인트
///
/// 로그인 아이디와 이메일이 모두 일치하는 회원의 비밀번호를
/// 임시 비밀번호로 교체하고, 평문을 한 번만 응답으로 전달합니다.
///
/// # Endpoint
/// `POST /auth/temp-password`
#[post("/temp-password")]
pub async fn temp_password(
    payload: web::Json<TempPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let member_service = MemberService::instance();
    let response = member_service
        .issue_temporary_password(&payload.login_id, &payload.email)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// HTTP 요청에서 리프레시 토큰 추출
fn extract_refresh_token(
    req: &HttpRequest,
    body: Option<&RefreshTokenRequest>,
) -> Result<String, AppError> {
    // 1. 쿠키에서 리프레시 토큰 찾기
    if let Some(cookie_header) = req.headers().get("Cookie") {
        if let Ok(cookie_str) = cookie_header.to_str() {
            for cookie_pair in cookie_str.split(';') {
                let cookie_pair = cookie_pair.trim();
                if let Some((name, value)) = cookie_pair.split_once('=') {
                    if name.trim() == "refresh_token" {
                        let token = value.trim();
                        if !token.is_empty() {
                            return Ok(token.to_string());
                        }
                    }
                }
            }
        }
    }

    // 2. 요청 본문에서 리프레시 토큰 찾기
    if let Some(body) = body {
        if !body.refresh_token.is_empty() {
            return Ok(body.refresh_token.clone());
        }
    }

    // 3. 토큰을 찾을 수 없음
    Err(AppError::InvalidToken(
        "리프레시 토큰이 제공되지 않았습니다".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_refresh_token_from_cookie() {
        let req = TestRequest::default()
            .insert_header(("Cookie", "session=abc; refresh_token=my-token"))
            .to_http_request();

        let token = extract_refresh_token(&req, None).unwrap();
        assert_eq!(token, "my-token");
    }

    #[test]
    fn test_extract_refresh_token_from_body() {
        let req = TestRequest::default().to_http_request();
        let body = RefreshTokenRequest {
            refresh_token: "body-token".to_string(),
        };

        let token = extract_refresh_token(&req, Some(&body)).unwrap();
        assert_eq!(token, "body-token");
    }

    #[test]
    fn test_cookie_takes_precedence_over_body() {
        let req = TestRequest::default()
            .insert_header(("Cookie", "refresh_token=cookie-token"))
            .to_http_request();
        let body = RefreshTokenRequest {
            refresh_token: "body-token".to_string(),
        };

        let token = extract_refresh_token(&req, Some(&body)).unwrap();
        assert_eq!(token, "cookie-token");
    }

    #[test]
    fn test_missing_refresh_token_is_error() {
        let req = TestRequest::default().to_http_request();
        assert!(extract_refresh_token(&req, None).is_err());
    }
}
