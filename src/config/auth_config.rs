//! # Authentication Configuration Module
//!
//! JWT 토큰 관련 설정을 관리하는 모듈입니다.
//! 토큰 서명 비밀키와 액세스/리프레시 토큰의 만료 기간을
//! 환경 변수 기반으로 제공합니다.
//!
//! ## JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ACCESS_EXPIRATION_DAYS="1"
//! export JWT_REFRESH_EXPIRATION_DAYS="3"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! let secret = JwtConfig::secret();
//! let access_days = JwtConfig::access_expiration_days();
//! let refresh_days = JwtConfig::refresh_expiration_days();
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 생성, 검증, 만료 시간 등을 관리합니다.
///
/// ## JWT 보안 모범 사례
///
/// 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
/// 2. **적절한 만료 시간**: 액세스 토큰은 짧게, 리프레시 토큰은 길게
/// 3. **토큰 저장소 보안**: 클라이언트에서 안전한 저장소 사용
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 이 키는 JWT 토큰의 무결성을 보장하는 핵심 요소입니다.
    /// 강력한 암호화 키를 사용해야 하며, 절대 노출되어서는 안 됩니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간을 일 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 1일
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export JWT_ACCESS_EXPIRATION_DAYS="1"
    /// ```
    pub fn access_expiration_days() -> i64 {
        env::var("JWT_ACCESS_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .unwrap_or(1)
    }

    /// JWT 리프레시 토큰의 만료 시간을 일 단위로 반환합니다.
    ///
    /// 리프레시 토큰은 액세스 토큰을 갱신하는 데 사용되므로,
    /// 액세스 토큰보다 긴 유효 기간을 가져야 합니다.
    ///
    /// # 기본값
    ///
    /// 3일
    ///
    /// # 보안 고려사항
    ///
    /// - 리프레시 토큰이 탈취되면 장기간 악용 가능
    /// - 회원당 하나의 토큰만 저장되므로 새 로그인 시 이전 토큰은 무효화됨
    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .unwrap_or(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_expiration_default() {
        // 환경 변수가 설정되지 않은 경우 기본값 1일
        if env::var("JWT_ACCESS_EXPIRATION_DAYS").is_err() {
            assert_eq!(JwtConfig::access_expiration_days(), 1);
        }
    }

    #[test]
    fn test_refresh_expiration_default() {
        // 환경 변수가 설정되지 않은 경우 기본값 3일
        if env::var("JWT_REFRESH_EXPIRATION_DAYS").is_err() {
            assert_eq!(JwtConfig::refresh_expiration_days(), 3);
        }
    }

    #[test]
    fn test_refresh_longer_than_access() {
        assert!(JwtConfig::refresh_expiration_days() >= JwtConfig::access_expiration_days());
    }

    #[test]
    fn test_secret_not_empty() {
        assert!(!JwtConfig::secret().is_empty());
    }
}
