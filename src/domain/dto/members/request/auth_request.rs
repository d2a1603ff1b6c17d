//! 인증 관련 요청 DTO
//!
//! 로그인, 토큰 갱신, 계정 찾기 등 인증 플로우에서 사용되는 요청 구조체들입니다.

use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 데이터
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "로그인 아이디를 입력해주세요"))]
    pub login_id: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub pw: String,
}

/// 액세스 토큰 갱신 요청 데이터
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰을 입력해주세요"))]
    pub refresh_token: String,
}

/// 로그인 아이디 찾기 요청 데이터
#[derive(Debug, Deserialize, Validate)]
pub struct FindLoginIdRequest {
    #[validate(email(message = "올바른 이메일 형식이 아닙니다"))]
    pub email: String,
}

/// 임시 비밀번호 발급 요청 데이터
///
/// 로그인 아이디와 이메일이 모두 일치하는 회원에게만 발급됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct TempPasswordRequest {
    #[validate(length(min = 1, message = "로그인 아이디를 입력해주세요"))]
    pub login_id: String,

    #[validate(email(message = "올바른 이메일 형식이 아닙니다"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_requires_fields() {
        let req = LoginRequest {
            login_id: String::new(),
            pw: "password".to_string(),
        };
        assert!(req.validate().is_err());

        let req = LoginRequest {
            login_id: "hong123".to_string(),
            pw: "password".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_refresh_token_request_rejects_empty() {
        let req = RefreshTokenRequest {
            refresh_token: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_find_login_id_validates_email() {
        let req = FindLoginIdRequest {
            email: "invalid".to_string(),
        };
        assert!(req.validate().is_err());

        let req = FindLoginIdRequest {
            email: "hong@example.com".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_temp_password_request_requires_both() {
        let req = TempPasswordRequest {
            login_id: "hong123".to_string(),
            email: "hong@example.com".to_string(),
        };
        assert!(req.validate().is_ok());

        let req = TempPasswordRequest {
            login_id: String::new(),
            email: "hong@example.com".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
