//! # 임시 비밀번호 유틸리티
//!
//! 비밀번호 분실 시 발급되는 임시 비밀번호 생성을 담당합니다.

use uuid::Uuid;

/// 임시 비밀번호 길이
const TEMP_PASSWORD_LEN: usize = 12;

/// 임시 비밀번호 생성
///
/// UUID v4 기반의 무작위 문자열을 생성합니다. 하이픈을 제거한
/// 영숫자 12자로, 회원가입 비밀번호 최소 길이(8자)를 충족합니다.
///
/// 생성된 평문은 발급 응답에서 한 번만 전달되고,
/// 저장소에는 bcrypt 해시만 남습니다.
pub fn generate_temp_password() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(TEMP_PASSWORD_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_password_length() {
        let pw = generate_temp_password();
        assert_eq!(pw.len(), TEMP_PASSWORD_LEN);
    }

    #[test]
    fn test_temp_password_is_alphanumeric() {
        let pw = generate_temp_password();
        assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_temp_passwords_are_unique() {
        let a = generate_temp_password();
        let b = generate_temp_password();
        assert_ne!(a, b);
    }

    #[test]
    fn test_temp_password_hashes_and_verifies() {
        let pw = generate_temp_password();
        let hashed = bcrypt::hash(&pw, 4).unwrap();
        assert!(bcrypt::verify(&pw, &hashed).unwrap());
        assert!(!bcrypt::verify("wrong", &hashed).unwrap());
    }
}
