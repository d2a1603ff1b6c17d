//! # Core Framework Module
//!
//! 회원 관리 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//! 싱글톤 기반 의존성 주입 컨테이너와 통합 에러 처리 시스템으로 구성되며,
//! 타입 안전성과 성능을 모두 만족하도록 설계되었습니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 전역 서비스/리포지토리 컨테이너
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//! - **의존성 해결**: Arc<T> 타입 기반 자동 의존성 주입
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//! - **계층화된 에러**: 도메인별 세분화된 에러 분류
//! - **자동 변환**: thiserror 기반 에러 체인 관리
//!
//! ## 사용 패턴
//!
//! ### 기본 서비스 정의
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//!
//! // 리포지토리 정의
//! #[repository(collection = "members")]
//! struct MemberRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! // 서비스 정의 (자동 의존성 주입)
//! #[service]
//! struct MemberService {
//!     member_repo: Arc<MemberRepository>,  // 자동 주입
//! }
//!
//! // 사용
//! let member_service = MemberService::instance();
//! ```
//!
//! ### 애플리케이션 초기화
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//! use crate::core::errors::AppError;
//!
//! #[actix_web::main]
//! async fn main() -> Result<(), AppError> {
//!     // 1. 인프라 컴포넌트 등록
//!     let database = Database::new().await?;
//!     let redis = RedisClient::new().await?;
//!
//!     ServiceLocator::set(database);
//!     ServiceLocator::set(redis);
//!
//!     // 2. 모든 서비스/리포지토리 초기화
//!     ServiceLocator::initialize_all().await?;
//!
//!     // 3. 웹 서버 시작
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! ❌ Circular dependency detected for type: MemberService
//! panic: Circular dependency detected: MemberService is already being initialized
//! ```
//! **해결**: 서비스 계층 구조를 재설계하여 단방향 의존성으로 변경
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: Service not found: TokenService. Make sure it's registered...
//! ```
//! **해결**: `#[service]` 매크로 적용 또는 `ServiceLocator::set()` 으로 수동 등록

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
