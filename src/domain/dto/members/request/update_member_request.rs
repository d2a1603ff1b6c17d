//! 회원 정보 수정 요청 DTO

use crate::utils::string_utils::deserialize_optional_string;
use serde::Deserialize;
use validator::Validate;

/// 회원 정보 수정 요청 데이터
///
/// 모든 필드가 선택적(Optional)이며, 제공된 필드만 수정됩니다.
/// 빈 문자열은 None으로 정규화되어 해당 필드를 건드리지 않습니다.
/// 비밀번호가 포함된 경우에만 새로 해싱하여 저장합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMemberRequest {
    #[validate(length(min = 3, max = 30, message = "로그인 아이디는 3-30자 사이여야 합니다"))]
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub login_id: Option<String>,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub pw: Option<String>,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    #[validate(email(message = "올바른 이메일 형식이 아닙니다"))]
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
}

impl UpdateMemberRequest {
    /// 수정할 필드가 하나라도 있는지 확인
    pub fn has_changes(&self) -> bool {
        self.login_id.is_some()
            || self.pw.is_some()
            || self.name.is_some()
            || self.email.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_none_is_valid_but_empty() {
        let req = UpdateMemberRequest {
            login_id: None,
            pw: None,
            name: None,
            email: None,
        };
        assert!(req.validate().is_ok());
        assert!(!req.has_changes());
    }

    #[test]
    fn test_partial_update_passes() {
        let req = UpdateMemberRequest {
            login_id: None,
            pw: None,
            name: Some("김철수".to_string()),
            email: None,
        };
        assert!(req.validate().is_ok());
        assert!(req.has_changes());
    }

    #[test]
    fn test_short_password_fails() {
        let req = UpdateMemberRequest {
            login_id: None,
            pw: Some("short".to_string()),
            name: None,
            email: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_invalid_email_fails() {
        let req = UpdateMemberRequest {
            login_id: None,
            pw: None,
            name: None,
            email: Some("bad-email".to_string()),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_login_id_change_counts_as_change() {
        let req = UpdateMemberRequest {
            login_id: Some("new_hong".to_string()),
            pw: None,
            name: None,
            email: None,
        };
        assert!(req.validate().is_ok());
        assert!(req.has_changes());
    }

    #[test]
    fn test_short_login_id_fails() {
        let req = UpdateMemberRequest {
            login_id: Some("ab".to_string()),
            pw: None,
            name: None,
            email: None,
        };
        assert!(req.validate().is_err());
    }
}
