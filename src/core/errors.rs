//! # Application Error Handling System
//!
//! 회원 관리 서비스를 위한 통합 에러 처리 시스템입니다.
//! 도메인 에러를 HTTP 상태 코드와 직접 매핑되는 열거형으로 분류하고,
//! `ResponseError` 구현을 통해 Actix-Web 응답으로 자동 변환합니다.
//!
//! ## 설계 철학
//!
//! ### 1. 계층화된 에러 분류
//! - **도메인별 분류**: 각 계층(데이터, 비즈니스, 인증)별 에러 타입
//! - **의미론적 분류**: HTTP 상태 코드와 직접 매핑되는 의미있는 에러
//! - **컨텍스트 보존**: 원본 에러 정보를 손실 없이 전달
//!
//! ### 2. 자동 HTTP 응답 변환
//! - **ResponseError 구현**: Actix-Web과 완전 통합
//! - **일관된 응답 형식**: 모든 에러에 대한 표준화된 JSON 응답
//! - **적절한 상태 코드**: 에러 타입에 따른 자동 HTTP 상태 코드 매핑
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 중복 데이터, 비즈니스 규칙 위반 |
//! | `LoginDenied` | 401 Unauthorized | 로그인/토큰 신원 확인 실패 |
//! | `RefreshTokenExpired` | 401 Unauthorized | 리프레시 토큰 만료 |
//! | `InvalidToken` | 401 Unauthorized | 위조되거나 손상된 토큰 |
//! | `AuthorizationError` | 403 Forbidden | 권한 부족 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `thiserror` 크레이트를 사용하여 자동으로 `Error` trait을 구현하고,
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
///
/// ## 에러 카테고리
///
/// ### 1. 인프라 계층 에러
/// - `DatabaseError`: MongoDB 관련 오류
/// - `RedisError`: Redis 캐시 시스템 관련 오류
///
/// ### 2. 비즈니스 계층 에러
/// - `ValidationError`: 입력값 검증 실패
/// - `ConflictError`: 비즈니스 규칙 위반 (중복 생성 등)
/// - `NotFound`: 요청된 리소스가 존재하지 않음
///
/// ### 3. 인증/인가 계층 에러
/// - `LoginDenied`: 로그인 거부 (잘못된 자격 증명, 화이트리스트 불일치 등)
/// - `RefreshTokenExpired`: 리프레시 토큰 만료 (재로그인 필요)
/// - `InvalidToken`: 서명 불일치 등 유효하지 않은 토큰
/// - `AuthorizationError`: 권한 부족 (접근 권한 없음)
///
/// ### 4. 시스템 계층 에러
/// - `InternalError`: 예상하지 못한 시스템 오류
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// member_collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // Redis 에러 변환
/// redis_client.get::<String>("key").await
///     .map_err(|e| AppError::RedisError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 오류를 나타냅니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    ///
    /// Redis 서버와의 통신 오류나 캐시 연산 실패를 나타냅니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러
    ///
    /// 클라이언트가 제공한 데이터가 형식 요구사항을 만족하지 않을 때
    /// 발생합니다. 400 Bad Request로 응답됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 요청한 회원 등 리소스가 존재하지 않을 때 발생합니다.
    /// 404 Not Found로 응답됩니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// let member = member_repo.find_by_id(id).await?
    ///     .ok_or_else(|| AppError::NotFound(
    ///         format!("Member with id {} not found", id)
    ///     ))?;
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 중복 로그인 아이디로 회원가입을 시도하는 등 비즈니스 규칙 위반 시
    /// 발생합니다. 409 Conflict로 응답됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 로그인 거부 에러
    ///
    /// 신원을 확인할 수 없을 때 발생합니다.
    /// 401 Unauthorized로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 존재하지 않는 로그인 아이디
    /// - 비밀번호 불일치
    /// - 저장된 리프레시 토큰과 제시된 토큰 불일치
    /// - 토큰 클레임에 회원 식별자 누락
    #[error("Login denied: {0}")]
    LoginDenied(String),

    /// 리프레시 토큰 만료 에러
    ///
    /// 제시된 리프레시 토큰의 유효 기간이 지났을 때 발생합니다.
    /// 401 Unauthorized로 응답되며, 클라이언트는 재로그인해야 합니다.
    #[error("Refresh token expired: {0}")]
    RefreshTokenExpired(String),

    /// 유효하지 않은 토큰 에러
    ///
    /// 서명 불일치, 손상된 형식 등 구조적으로 유효하지 않은 토큰일 때
    /// 발생합니다. 401 Unauthorized로 응답됩니다.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 권한 부족 에러
    ///
    /// 인증된 회원이 특정 작업을 수행할 권한이 없을 때 발생합니다.
    /// 403 Forbidden으로 응답됩니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류 시 발생합니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 `AppError` 변형을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// # 응답 형식
    ///
    /// 모든 에러 응답은 다음과 같은 표준 JSON 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::LoginDenied(_)
            | AppError::RefreshTokenExpired(_)
            | AppError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// use crate::core::errors::AppResult;
///
/// async fn find_member(id: i64) -> AppResult<Member> {
///     // 구현...
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::{AppError, ErrorContext};
///
/// let result = collection.find_one(filter).await
///     .context("Failed to find member")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Login ID is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Member not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("Duplicate login ID".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_login_denied_response() {
        let error = AppError::LoginDenied("Invalid credentials".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_refresh_token_expired_response() {
        let error = AppError::RefreshTokenExpired("Token expired".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_token_response() {
        let error = AppError::InvalidToken("Signature mismatch".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Insufficient permissions".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
