//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 문자열 처리, 임시 비밀번호 생성, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 변환 유틸리티
//! - [`password_util`] - 임시 비밀번호 생성
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::clean_optional_string;
//! use crate::utils::password_util::generate_temp_password;
//!
//! let nickname = clean_optional_string(Some("  홍길동  ".to_string()));
//! let temp_pw = generate_temp_password();
//! ```

pub mod display_terminal;
pub mod password_util;
pub mod string_utils;
