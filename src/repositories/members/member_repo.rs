//! # 회원 리포지토리 구현
//!
//! 회원 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **순차 숫자 ID**: counters 컬렉션 기반 자동 증가 ID 발급
//! - **데이터 무결성**: 유니크 제약 조건 및 인덱스 관리

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::members::member::Member,
};
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    IndexModel,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use singleton_macro::repository;

/// 자동 증가 시퀀스 문서
///
/// `counters` 컬렉션에 컬렉션별 마지막 발급 번호를 저장합니다.
#[derive(Debug, Serialize, Deserialize)]
struct Counter {
    #[serde(rename = "_id")]
    id: String,
    seq: i64,
}

/// 페이지 번호와 크기로 건너뛸 문서 수 계산
///
/// 곱셈이 u64 범위를 넘는 극단적인 페이지 번호는 포화 처리합니다.
fn page_offset(page: u64, size: u64) -> u64 {
    page.saturating_mul(size)
}

/// 회원 데이터 액세스 리포지토리
///
/// 회원 엔티티의 CRUD 연산을 담당하며, MongoDB 컬렉션과 Redis 캐시를
/// 통합하여 최적화된 데이터 액세스를 제공합니다.
///
/// ## 캐싱 전략
///
/// - **개별 회원**: `member:{id}`, TTL 600초
/// - **쓰기 후 무효화**: 수정/삭제 시 해당 키와 컬렉션 캐시 제거
///
/// ## 저장소 구조
///
/// - **컬렉션명**: `members`
/// - **ID**: counters 컬렉션에서 발급되는 i64 순번
/// - **인덱스**: login_id(unique), email, refresh_token
#[repository(name = "member", collection = "members")]
pub struct MemberRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl MemberRepository {
    /// 로그인 아이디로 회원 조회
    ///
    /// login_id는 유니크 인덱스로 보장되므로 최대 1개의 결과만 반환됩니다.
    pub async fn find_by_login_id(&self, login_id: &str) -> Result<Option<Member>, AppError> {
        self.collection::<Member>()
            .find_one(doc! { "login_id": login_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 회원 조회
    ///
    /// 가장 빈번한 조회 패턴이므로 캐시 우선 조회를 적용합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `member:{id}`
    /// - **TTL**: 600초 (10분)
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Member>, AppError> {
        let cache_key = self.cache_key(&id.to_string());

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Member>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let member = self
            .collection::<Member>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장
        if let Some(ref member) = member {
            let _ = self.redis.set_with_expiry(&cache_key, member, 600).await;
        }

        Ok(member)
    }

    /// 이메일 주소로 회원 조회
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Member>, AppError> {
        self.collection::<Member>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 로그인 아이디와 이메일이 모두 일치하는 회원 조회
    ///
    /// 임시 비밀번호 발급 시 본인 확인 용도로 사용됩니다.
    pub async fn find_by_login_id_and_email(
        &self,
        login_id: &str,
        email: &str,
    ) -> Result<Option<Member>, AppError> {
        self.collection::<Member>()
            .find_one(doc! { "login_id": login_id, "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 저장된 리프레시 토큰으로 회원 조회
    ///
    /// 토큰 갱신 시 화이트리스트 검증에 사용됩니다.
    /// 회원당 리프레시 토큰은 최대 1개이므로, 재로그인으로 토큰이
    /// 교체되면 이전 토큰으로는 조회되지 않습니다.
    pub async fn find_by_refresh_token(&self, token: &str) -> Result<Option<Member>, AppError> {
        self.collection::<Member>()
            .find_one(doc! { "refresh_token": token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 다음 시퀀스 번호 발급
    ///
    /// counters 컬렉션의 해당 문서를 원자적으로 증가시켜 새 ID를 받아옵니다.
    /// 문서가 없으면 upsert로 생성되어 1부터 시작합니다.
    async fn next_sequence(&self) -> Result<i64, AppError> {
        let counters = self
            .db
            .get_database()
            .collection::<Counter>("counters");

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = counters
            .find_one_and_update(
                doc! { "_id": self.collection_name() },
                doc! { "$inc": { "seq": 1i64 } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| {
                AppError::DatabaseError("시퀀스 발급에 실패했습니다".to_string())
            })?;

        Ok(counter.seq)
    }

    /// 새 회원 생성
    ///
    /// 로그인 아이디와 이메일의 중복 여부를 사전에 검증하고,
    /// 순번 ID를 발급받아 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Member)` - 생성된 회원 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 로그인 아이디 또는 이메일 중복
    pub async fn create(&self, mut member: Member) -> Result<Member, AppError> {
        // 중복 확인
        if self.find_by_login_id(&member.login_id).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 로그인 아이디입니다".to_string(),
            ));
        }

        if self.find_by_email(&member.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        member.id = Some(self.next_sequence().await?);

        self.collection::<Member>()
            .insert_one(&member)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(member)
    }

    /// 회원 정보 업데이트
    ///
    /// `$set` 연산자로 지정된 필드만 원자적으로 변경하고
    /// 최신 문서를 반환합니다. 성공 시 개별 캐시를 무효화합니다.
    pub async fn update(&self, id: i64, update_doc: Document) -> Result<Option<Member>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection::<Member>()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        if updated.is_some() {
            let _ = self.invalidate_cache(&id.to_string()).await;
            let _ = self.invalidate_collection_cache(None).await;
        }

        Ok(updated)
    }

    /// 리프레시 토큰 저장 또는 제거
    ///
    /// `token`이 `Some`이면 교체, `None`이면 로그아웃으로 간주하여
    /// 필드를 제거합니다. 회원당 1개의 토큰만 유지됩니다.
    pub async fn set_refresh_token(
        &self,
        id: i64,
        token: Option<&str>,
    ) -> Result<Option<Member>, AppError> {
        let update = match token {
            Some(token) => doc! { "$set": { "refresh_token": token } },
            None => doc! { "$unset": { "refresh_token": "" } },
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection::<Member>()
            .find_one_and_update(doc! { "_id": id }, update)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            let _ = self.invalidate_cache(&id.to_string()).await;
        }

        Ok(updated)
    }

    /// 회원 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 회원이 삭제됨
    /// * `Ok(false)` - 해당 ID의 회원이 존재하지 않음
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = self
            .collection::<Member>()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            // 캐시 무효화
            let _ = self.invalidate_cache(&id.to_string()).await;
            let _ = self.invalidate_collection_cache(None).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 회원 목록 페이지 조회
    ///
    /// ID 오름차순으로 정렬하여 `page * size`건을 건너뛰고
    /// 최대 `size`건을 반환합니다. 페이지 번호는 0부터 시작합니다.
    pub async fn find_page(&self, page: u64, size: u64) -> Result<Vec<Member>, AppError> {
        let members = self
            .collection::<Member>()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(page_offset(page, size))
            .limit(size as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(members)
    }

    /// 전체 회원 수 조회
    pub async fn count(&self) -> Result<u64, AppError> {
        self.collection::<Member>()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **login_id 유니크 인덱스** - 중복 가입 방지 및 로그인 조회 최적화
    /// 2. **email 인덱스** - 아이디 찾기 조회 최적화
    /// 3. **refresh_token 인덱스** - 토큰 갱신 화이트리스트 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Member>();

        let login_id_index = IndexModel::builder()
            .keys(doc! { "login_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("login_id_unique".to_string())
                    .build(),
            )
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().name("email_asc".to_string()).build())
            .build();

        // refresh_token은 없는 문서가 많으므로 sparse 인덱스 사용
        let refresh_token_index = IndexModel::builder()
            .keys(doc! { "refresh_token": 1 })
            .options(
                IndexOptions::builder()
                    .sparse(true)
                    .name("refresh_token_sparse".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([login_id_index, email_index, refresh_token_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset_basic() {
        assert_eq!(page_offset(0, 10), 0);
        assert_eq!(page_offset(3, 10), 30);
    }

    #[test]
    fn test_page_offset_saturates_instead_of_overflowing() {
        assert_eq!(page_offset(u64::MAX, 10), u64::MAX);
    }
}
