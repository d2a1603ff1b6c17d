//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
/// `#[serde(deserialize_with = "deserialize_optional_string")]` 속성과 함께 사용됩니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Profile {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     nickname: Option<String>,
/// }
///
/// // JSON: {"nickname": "  홍길동  "} → Some("홍길동")
/// // JSON: {"nickname": ""} → None
/// // JSON: {"nickname": null} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(
            clean_optional_string(Some("  World  ".to_string())),
            Some("World".to_string())
        );
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        // 유효한 문자열 - 공백이 제거되고 Some 반환
        let result: TestStruct =
            serde_json::from_str(r#"{"optional_field": "  Hello World  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("Hello World".to_string()));

        // 빈 문자열 - None 반환
        let result: TestStruct = serde_json::from_str(r#"{"optional_field": ""}"#).unwrap();
        assert_eq!(result.optional_field, None);

        // null 값 - None 반환
        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        // 필드 자체가 없는 경우 - None 반환
        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_with_korean() {
        #[derive(Deserialize)]
        struct KoreanTestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            korean_field: Option<String>,
        }

        let result: KoreanTestStruct =
            serde_json::from_str(r#"{"korean_field": "  안녕하세요  "}"#).unwrap();
        assert_eq!(result.korean_field, Some("안녕하세요".to_string()));
    }
}
