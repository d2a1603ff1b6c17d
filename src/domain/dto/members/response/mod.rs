//! 회원 응답 DTO 모듈
//!
//! 서버에서 클라이언트로 전송되는 회원 관련 응답 구조체들을 정의합니다.
//! 비밀번호 해시, 리프레시 토큰 등 민감한 정보는 응답에서 제외됩니다.

pub mod auth_response;
pub mod member_response;
pub mod page_response;

pub use auth_response::*;
pub use member_response::*;
pub use page_response::*;
