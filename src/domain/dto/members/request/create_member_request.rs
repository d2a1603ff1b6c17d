//! 회원가입 요청 DTO
//!
//! 새로운 회원 등록에 필요한 데이터와 유효성 검증 규칙을 정의합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 회원가입 요청 데이터
///
/// # 필드
/// - `login_id`: 로그인 아이디 (3-30자, 영문/숫자/언더스코어)
/// - `pw`: 비밀번호 (최소 8자)
/// - `name`: 이름 (1-50자)
/// - `email`: 이메일 주소 (형식 검증)
///
/// # 사용 예제
/// ```json
/// {
///   "login_id": "hong123",
///   "pw": "securepassword",
///   "name": "홍길동",
///   "email": "hong@example.com"
/// }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMemberRequest {
    #[validate(
        length(min = 3, max = 30, message = "로그인 아이디는 3-30자 사이여야 합니다"),
        custom(function = "validate_login_id_format")
    )]
    pub login_id: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub pw: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    #[validate(email(message = "올바른 이메일 형식이 아닙니다"))]
    pub email: String,
}

/// 로그인 아이디 형식 검증
///
/// 영문 대소문자, 숫자, 언더스코어만 허용합니다.
fn validate_login_id_format(login_id: &str) -> Result<(), ValidationError> {
    if login_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_login_id")
            .with_message("로그인 아이디는 영문, 숫자, 언더스코어만 사용할 수 있습니다".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateMemberRequest {
        CreateMemberRequest {
            login_id: "hong123".to_string(),
            pw: "securepassword".to_string(),
            name: "홍길동".to_string(),
            email: "hong@example.com".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_short_login_id_fails() {
        let mut req = valid_request();
        req.login_id = "ab".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_login_id_with_special_chars_fails() {
        let mut req = valid_request();
        req.login_id = "hong@123".to_string();
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("login_id"));
    }

    #[test]
    fn test_login_id_with_underscore_passes() {
        let mut req = valid_request();
        req.login_id = "hong_123".to_string();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_short_password_fails() {
        let mut req = valid_request();
        req.pw = "short".to_string();
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("pw"));
    }

    #[test]
    fn test_invalid_email_fails() {
        let mut req = valid_request();
        req.email = "not-an-email".to_string();
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("email"));
    }

    #[test]
    fn test_empty_name_fails() {
        let mut req = valid_request();
        req.name = String::new();
        assert!(req.validate().is_err());
    }
}
