//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. API 계약 우선 (API Contract First)
//! - **명시적 인터페이스**: 클라이언트가 기대할 수 있는 명확한 데이터 구조
//! - **버전 호환성**: API 변경 시 하위 호환성 유지
//!
//! ### 2. 유효성 검증 내장 (Built-in Validation)
//! - **타입 안전성**: 컴파일 타임 타입 검증
//! - **런타임 검증**: validator crate를 통한 비즈니스 규칙 검증
//! - **에러 메시지**: 사용자 친화적인 검증 실패 메시지
//!
//! ### 3. 도메인 분리 (Domain Separation)
//! - **내부 표현 vs 외부 표현**: Entity와 DTO의 명확한 분리
//! - **보안**: 해시된 비밀번호, 리프레시 토큰 등 민감한 정보의 노출 방지
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── members/            # 회원 관련 DTO
//!     ├── request/        # 요청 DTO (클라이언트 → 서버)
//!     │   ├── create_member_request.rs
//!     │   ├── update_member_request.rs
//!     │   └── auth_request.rs
//!     └── response/       # 응답 DTO (서버 → 클라이언트)
//!         ├── member_response.rs
//!         ├── auth_response.rs
//!         └── page_response.rs
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse, Result};
//! use validator::Validate;
//! use crate::domain::dto::members::request::CreateMemberRequest;
//! use crate::domain::dto::members::response::MemberResponse;
//! use crate::core::errors::AppError;
//!
//! pub async fn create_member(
//!     request: web::Json<CreateMemberRequest>
//! ) -> Result<HttpResponse, AppError> {
//!     request.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!
//!     let member_service = MemberService::instance();
//!     let member = member_service.create(request.into_inner()).await?;
//!
//!     Ok(HttpResponse::Created().json(MemberResponse::from(member)))
//! }
//! ```

pub mod members;
