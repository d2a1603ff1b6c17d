//! 회원 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`MemberRepository`](member_repo::MemberRepository)를 통해 MongoDB 기반 회원 데이터 관리와
//! Redis 캐싱을 제공합니다. `#[repository]` 매크로를 사용하여 싱글톤으로 관리됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::members::member_repo::MemberRepository;
//!
//! let member_repo = MemberRepository::instance();
//! let member = member_repo.find_by_login_id("hong123").await?;
//! ```

pub mod member_repo;
