//! # Admin HTTP Handlers
//!
//! 관리자 전용 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 라우트 레벨에서 ROLE_ADMIN 권한을 요구하는 미들웨어가 적용됩니다.

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use crate::config::PageConfig;
use crate::core::errors::AppError;
use crate::services::members::member_service::MemberService;

/// 회원 목록 조회 쿼리 파라미터
///
/// 페이지 번호는 0부터 시작하며, 생략 시 첫 페이지와
/// 기본 페이지 크기가 적용됩니다.
#[derive(Debug, Deserialize)]
pub struct MemberListQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

/// 회원 목록 조회 핸들러 (관리자 전용)
///
/// ID 오름차순으로 정렬된 회원 목록을 페이지 단위로 반환합니다.
///
/// # Endpoint
/// `GET /adm/members/all?page=0&size=10`
///
/// # 응답 예제
///
/// ```json
/// {
///   "items": [ { "id": 1, "login_id": "hong123", ... } ],
///   "page": 0,
///   "size": 10,
///   "total_elements": 42,
///   "total_pages": 5
/// }
/// ```
#[get("/members/all")]
pub async fn list_members(query: web::Query<MemberListQuery>) -> Result<HttpResponse, AppError> {
    let page = query.page.unwrap_or(0);
    let size = query.size.unwrap_or_else(PageConfig::default_size);

    let service = MemberService::instance();
    let response = service.get_members_page(page, size).await?;

    Ok(HttpResponse::Ok().json(response))
}
