/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 인증이 선택사항임 (있으면 검증, 없어도 허용)
    Optional,
}

/// 요구되는 권한 정보
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// 특정 단일 권한이 필요
    Single(String),
    /// 여러 권한 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<String>),
}

impl RequiredRole {
    /// 회원 권한이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, member_authorities: &[String]) -> bool {
        match self {
            RequiredRole::Single(required) => member_authorities.contains(required),
            RequiredRole::Any(required_list) => {
                required_list.iter().any(|a| member_authorities.contains(a))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_role_satisfied() {
        let required = RequiredRole::Single("ROLE_ADMIN".to_string());
        assert!(required.is_satisfied(&["ROLE_ADMIN".to_string()]));
        assert!(!required.is_satisfied(&["ROLE_MEMBER".to_string()]));
    }

    #[test]
    fn test_any_role_satisfied() {
        let required = RequiredRole::Any(vec![
            "ROLE_ADMIN".to_string(),
            "ROLE_MEMBER".to_string(),
        ]);
        assert!(required.is_satisfied(&["ROLE_MEMBER".to_string()]));
        assert!(!required.is_satisfied(&["ROLE_GUEST".to_string()]));
        assert!(!required.is_satisfied(&[]));
    }
}
