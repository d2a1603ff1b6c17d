//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 주요 특징
//!
//! ### 1. 비동기 처리
//! - **Future 기반**: 모든 핸들러가 `async/await` 사용
//! - **논블로킹 I/O**: 데이터베이스 호출 시 블로킹 없음
//! - **높은 처리량**: 적은 스레드로 많은 동시 요청 처리
//!
//! ### 2. 타입 안전성
//! - **컴파일 타임 검증**: 요청/응답 타입 검증
//! - **자동 직렬화**: JSON ↔ Rust 구조체 자동 변환
//! - **검증 통합**: validator 크레이트로 입력 검증
//!
//! ```rust,ignore
//! #[derive(Deserialize, Validate)]
//! pub struct CreateMemberRequest {
//!     #[validate(email)]
//!     pub email: String,
//!
//!     #[validate(length(min = 8))]
//!     pub pw: String,
//! }
//!
//! #[post("/members")]
//! pub async fn create_member(
//!     payload: web::Json<CreateMemberRequest>, // 자동 JSON 파싱
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?; // 검증 규칙 자동 적용
//!     // ...
//! }
//! ```
//!
//! ### 3. 에러 처리
//! - **Result 패턴**: Rust의 에러 처리 관용구 활용
//! - **자동 변환**: `?` 연산자로 에러 자동 전파
//! - **통합 에러 타입**: AppError로 모든 에러 통합 처리
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 인증 관련 엔드포인트
//!   - 로그인 (`POST /auth/login`)
//!   - 토큰 갱신 (`POST /auth/refresh`)
//!   - 로그아웃 (`POST /auth/logout`)
//!   - 아이디 찾기 (`POST /auth/find-login-id`)
//!   - 임시 비밀번호 발급 (`POST /auth/temp-password`)
//!
//! - **`members`**: 회원 관리 엔드포인트
//!   - 회원 생성 (`POST /members`)
//!   - 회원 조회 (`GET /members/{id}`)
//!   - 회원 수정 (`PUT /members/{id}`)
//!   - 회원 삭제 (`DELETE /members/{id}`)
//!   - 프로필 이미지 교체 (`PUT /members/{id}/image`)
//!
//! - **`admin`**: 관리자 전용 엔드포인트
//!   - 회원 목록 조회 (`GET /adm/members`)
//!
//! ## 보안 고려사항
//!
//! ### 입력 검증
//! - **자동 검증**: validator 크레이트 활용
//! - **인젝션 방지**: MongoDB의 타입 안전한 쿼리
//! - **XSS 방지**: 자동 JSON 이스케이프
//!
//! ### 인증/인가
//! - **JWT 토큰**: 상태 없는 인증
//! - **역할 기반 접근 제어**: 미들웨어를 통한 권한 검사
//! - **Rate Limiting**: 요청 빈도 제한

pub mod admin;
pub mod auth;
pub mod members;
