//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 회원 관리와 인증/보안 기능을 담당합니다.
//!
//! # Features
//!
//! - 회원 생명주기 관리 (생성, 조회, 수정, 삭제)
//! - JWT 토큰 기반 인증 시스템
//! - 리프레시 토큰 화이트리스트 관리
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{members::MemberService, auth::TokenService};
//!
//! let member_service = MemberService::instance();
//! let token_service = TokenService::instance();
//! ```

pub mod members;
pub mod auth;
