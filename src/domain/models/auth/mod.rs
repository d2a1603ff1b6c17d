//! 인증 컨텍스트 모델 모듈
//!
//! 미들웨어가 검증한 토큰에서 추출되는 인증된 회원 정보와,
//! 라우트별 인증 요구사항을 표현하는 모델을 제공합니다.

pub mod authenticated_member;
pub mod authentication_request;

pub use authenticated_member::*;
pub use authentication_request::*;
