//! # Member Data Transfer Objects Module
//!
//! 회원 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 회원 데이터 교환을 위한 계약을 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! members/
//! ├── request/                       # 클라이언트 → 서버 요청 DTO
//! │   ├── create_member_request.rs  # 회원가입 요청
//! │   ├── update_member_request.rs  # 회원 수정 요청
//! │   └── auth_request.rs           # 로그인/토큰/계정 찾기 요청
//! └── response/                      # 서버 → 클라이언트 응답 DTO
//!     ├── member_response.rs        # 기본 회원 응답
//!     ├── auth_response.rs          # 인증 관련 응답
//!     └── page_response.rs          # 페이지네이션 응답
//! ```
//!
//! ## 요청 DTO (Request DTOs)
//!
//! ### CreateMemberRequest - 회원가입 요청
//!
//! - **유효성 검증**: 로그인 아이디 형식, 이메일, 비밀번호 길이 검사
//! - **한국어 에러 메시지**: 사용자 친화적인 검증 실패 메시지
//!
//! #### 검증 규칙:
//! - **로그인 아이디**: 3-30자, 영문/숫자/언더스코어만 허용
//! - **비밀번호**: 최소 8자
//! - **이름**: 1-50자, 모든 문자 허용
//! - **이메일**: RFC 5322 표준 형식 검증
//!
//! ## 응답 DTO (Response DTOs)
//!
//! ### MemberResponse - 기본 회원 정보
//!
//! 해시된 비밀번호와 리프레시 토큰 등 민감한 정보는 제외됩니다.
//!
//! #### JSON 응답 예제:
//! ```json
//! {
//!   "id": 1,
//!   "login_id": "hong123",
//!   "name": "홍길동",
//!   "email": "hong@example.com",
//!   "m_image": null,
//!   "created_at": "2024-01-01T00:00:00Z",
//!   "updated_at": "2024-01-15T10:30:00Z"
//! }
//! ```
//!
//! ### LoginResponse - 인증 성공 응답
//!
//! #### JSON 응답 예제:
//! ```json
//! {
//!   "member": { "id": 1, "login_id": "hong123", ... },
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "token_type": "Bearer",
//!   "expires_in": 86400,
//!   "refresh_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//! }
//! ```

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
