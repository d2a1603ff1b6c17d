//! 회원 관리 서비스 모듈
//!
//! [`MemberService`](member_service::MemberService)를 통해 회원 계정의
//! 생명주기 관리와 로그인/토큰 갱신/계정 찾기 플로우를 제공합니다.

pub mod member_service;

pub use member_service::*;
