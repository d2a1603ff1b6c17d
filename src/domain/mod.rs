//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 도메인 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (Member)
//! ├── DTOs         - 데이터 전송 객체 (Request/Response)
//! └── Models       - 인증/토큰 모델 (TokenClaims, AuthenticatedMember)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 비즈니스의 핵심 개념을 나타내는 영속 가능한 객체들입니다.
//!
//! - **영속성**: MongoDB에 저장되는 도메인 객체
//! - **불변성**: 가능한 한 불변 객체로 설계
//! - **식별성**: 고유 숫자 ID를 통한 객체 식별
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//!
//! - **API 계약**: 외부 시스템과의 명확한 인터페이스 정의
//! - **유효성 검증**: `validator` 크레이트 기반 입력 검증
//!
//! ```text
//! dto/
//! └── members/
//!     ├── request/     - 회원 관련 요청 DTO
//!     │   ├── create_member_request.rs
//!     │   ├── update_member_request.rs
//!     │   └── auth_request.rs
//!     └── response/    - 회원 관련 응답 DTO
//!         ├── member_response.rs
//!         ├── auth_response.rs
//!         └── page_response.rs
//! ```
//!
//! ### [`models`] - 인증 모델
//!
//! JWT 토큰 클레임, 인증된 회원 컨텍스트 등 인증 계층에서
//! 사용되는 데이터 모델들입니다.
//!
//! ## 실제 사용 예제
//!
//! ### 회원 등록 플로우
//!
//! ```rust,ignore
//! use crate::domain::{entities::Member, dto::CreateMemberRequest};
//! use crate::core::errors::AppError;
//!
//! // 1. DTO로 입력 받기
//! let request = CreateMemberRequest {
//!     login_id: "hong123".to_string(),
//!     pw: "securepass123".to_string(),
//!     name: "홍길동".to_string(),
//!     email: "hong@example.com".to_string(),
//! };
//!
//! // 2. 유효성 검증
//! request.validate()?;
//!
//! // 3. 도메인 엔티티 생성 및 영속화
//! let member = Member::new(request.login_id, hashed_pw, request.name, request.email);
//! let saved = member_repository.create(member).await?;
//!
//! // 4. 응답 DTO로 변환
//! let response = MemberResponse::from(saved);
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
