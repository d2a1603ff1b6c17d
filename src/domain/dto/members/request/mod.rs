//! 회원 요청 DTO 모듈
//!
//! 클라이언트에서 서버로 전송되는 회원 관련 요청 구조체들을 정의합니다.

pub mod auth_request;
pub mod create_member_request;
pub mod update_member_request;

pub use auth_request::*;
pub use create_member_request::*;
pub use update_member_request::*;
