//! 회원 관리 서비스 백엔드
//!
//! Rust 기반의 회원 관리 및 인증 서비스입니다.
//! JWT 액세스/리프레시 토큰 기반 인증, 회원 CRUD,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **회원 관리**: 계정 생성, 조회, 수정, 삭제, 프로필 이미지 변경
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증
//! - **토큰 갱신**: 저장된 리프레시 토큰 화이트리스트 검증 후 재발급
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 회원 데이터 영구 저장
//! - **Redis**: 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use member_service_backend::services::members::MemberService;
//! use member_service_backend::services::auth::TokenService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let member_service = MemberService::instance();
//! let token_service = TokenService::instance();
//!
//! // 로그인 및 토큰 발급
//! let (member, tokens) = member_service.login(&login_id, &password).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
