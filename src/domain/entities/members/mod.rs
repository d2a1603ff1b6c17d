//! Members Entity Module
//!
//! 회원 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! ### Member Entity
//! - **로컬 인증**: 로그인 아이디/비밀번호 기반 인증
//! - **토큰 화이트리스트**: 회원당 하나의 리프레시 토큰 저장
//! - **프로필 이미지**: 업로드된 이미지 파일명 보관
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::members::Member;
//!
//! let member = Member::new(
//!     "hong123".to_string(),
//!     hashed_password,
//!     "홍길동".to_string(),
//!     "hong@example.com".to_string(),
//! );
//! ```

pub mod member;

pub use member::*;
