//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **타입 안전성**: 컴파일 타임에 데이터 일관성 보장
//! - **직렬화/역직렬화**: BSON ↔ Rust 구조체 변환 지원
//!
//! ## 싱글톤 매크로 연동
//!
//! 이 엔티티들은 프로젝트의 `#[repository]` 매크로와 함께 사용됩니다:
//! ```rust,ignore
//! use crate::domain::entities::members::Member;
//!
//! #[repository(collection = "members")]
//! struct MemberRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! impl MemberRepository {
//!     async fn find_by_login_id(&self, login_id: &str) -> Option<Member> {
//!         self.collection::<Member>()
//!             .find_one(doc! { "login_id": login_id })
//!             .await
//!             .ok()
//!             .flatten()
//!     }
//! }
//! ```
//!
//! ## 엔티티 설계 원칙
//!
//! ### 1. 불변성 우선
//! ```rust,ignore
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Member {
//!     #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
//!     pub id: Option<i64>,
//!     pub login_id: String,      // 변경 불가능한 식별자
//!     pub created_at: DateTime,  // 생성 시점 고정
//!     // ...
//! }
//! ```
//!
//! ### 2. 비즈니스 규칙 캡슐화
//!
//! 엔티티 생성은 팩토리 메서드를 통해서만 이루어지며,
//! 생성/수정 시각이 자동으로 기록됩니다.
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: 엔티티 간 직접 참조보다는 ID 참조 사용
//! - **크기 제한**: MongoDB 문서 크기 제한(16MB) 고려
//! - **인덱스 설계**: 쿼리 패턴에 맞는 복합 인덱스 설계 필수

pub mod members;
