//! # Member Management HTTP Handlers
//!
//! 회원 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업과 프로필 이미지 업로드를 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/members` | 새 회원 생성 (공개) | 201 Created |
//! | `GET` | `/members/{id}` | 회원 조회 | 200 OK |
//! | `PUT` | `/members/{id}` | 회원 부분 수정 | 200 OK |
//! | `DELETE` | `/members/{id}` | 회원 삭제 | 204 No Content |
//! | `PUT` | `/members/{id}/image` | 프로필 이미지 교체 | 200 OK |
//!
//! ## 접근 제어
//!
//! 회원 생성을 제외한 모든 엔드포인트는 인증이 필요하며,
//! 본인 또는 ROLE_ADMIN 권한으로만 수정/삭제할 수 있습니다.
//!
//! ## 에러 응답 형식
//!
//! ```json
//! {
//!   "error": "회원을 찾을 수 없습니다"
//! }
//! ```

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, HttpResponse};
use futures_util::{StreamExt, TryStreamExt};
use std::io::Write;
use std::path::Path;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::members::request::{CreateMemberRequest, UpdateMemberRequest};
use crate::domain::models::auth::authenticated_member::AuthenticatedMember;
use crate::services::members::member_service::MemberService;

/// 프로필 이미지 저장 디렉토리
const UPLOAD_DIR: &str = "upload/";

/// 허용되는 이미지 MIME 타입
const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// 업로드 최대 크기: 10MB
const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// 회원 생성 핸들러
///
/// 새로운 회원 계정을 생성합니다. 로그인 아이디와 이메일의
/// 고유성을 검증하며, 인증 없이 호출할 수 있습니다.
///
/// # Endpoint
/// `POST /members`
///
/// # 요청 본문
///
/// ```json
/// {
///   "login_id": "hong123",
///   "pw": "securepassword",
///   "name": "홍길동",
///   "email": "hong@example.com"
/// }
/// ```
#[post("")]
pub async fn create_member(
    payload: web::Json<CreateMemberRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = MemberService::instance();
    let response = service.create_member(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 회원 조회 핸들러
///
/// 지정된 ID의 회원 정보를 조회합니다. 비밀번호 해시와
/// 리프레시 토큰 등 민감한 정보는 응답에서 제외됩니다.
///
/// # Endpoint
/// `GET /members/{member_id}`
#[get("/{member_id}")]
pub async fn get_member(member_id: web::Path<i64>) -> Result<HttpResponse, AppError> {
    let service = MemberService::instance();
    let member = service.get_member_by_id(member_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(member))
}

/// 회원 정보 수정 핸들러
///
/// 요청에 포함된 필드만 부분 수정합니다. 본인 또는 관리자만
/// 수정할 수 있습니다.
///
/// # Endpoint
/// `PUT /members/{member_id}`
#[put("/{member_id}")]
pub async fn update_member(
    member_id: web::Path<i64>,
    payload: web::Json<UpdateMemberRequest>,
    auth: AuthenticatedMember,
) -> Result<HttpResponse, AppError> {
    let member_id = member_id.into_inner();
    ensure_self_or_admin(&auth, member_id)?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = MemberService::instance();
    let response = service.update_member(member_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 회원 삭제 핸들러
///
/// 지정된 ID의 회원을 영구 삭제합니다. 본인 또는 관리자만
/// 삭제할 수 있습니다.
///
/// # Endpoint
/// `DELETE /members/{member_id}`
#[delete("/{member_id}")]
pub async fn delete_member(
    member_id: web::Path<i64>,
    auth: AuthenticatedMember,
) -> Result<HttpResponse, AppError> {
    let member_id = member_id.into_inner();
    ensure_self_or_admin(&auth, member_id)?;

    let service = MemberService::instance();
    service.delete_member(member_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 프로필 이미지 교체 핸들러
///
/// multipart/form-data의 `file` 파트에서 이미지를 받아 업로드
/// 디렉토리에 저장하고, 저장된 파일명을 회원 문서에 기록합니다.
///
/// # Endpoint
/// `PUT /members/{member_id}/image`
#[put("/{member_id}/image")]
pub async fn change_image(
    member_id: web::Path<i64>,
    mut payload: Multipart,
    auth: AuthenticatedMember,
) -> Result<HttpResponse, AppError> {
    let member_id = member_id.into_inner();
    ensure_self_or_admin(&auth, member_id)?;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::ValidationError(format!("잘못된 multipart 요청입니다: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(sanitize_filename)
            .ok_or_else(|| AppError::ValidationError("파일 이름이 없습니다".to_string()))?;

        // MIME 타입 검증
        let content_type = field
            .content_type()
            .map(|m| m.to_string())
            .ok_or_else(|| AppError::ValidationError("Content-Type이 없습니다".to_string()))?;

        if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
            return Err(AppError::ValidationError(format!(
                "허용되지 않는 파일 형식입니다: {}",
                content_type
            )));
        }

        // 파일 데이터 수집
        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| AppError::ValidationError(format!("파일 읽기 실패: {}", e)))?;
            data.extend_from_slice(&chunk);

            if data.len() > MAX_IMAGE_SIZE {
                return Err(AppError::ValidationError(format!(
                    "파일이 너무 큽니다. 최대 크기: {}MB",
                    MAX_IMAGE_SIZE / 1024 / 1024
                )));
            }
        }

        // 고유한 파일명으로 저장 (밀리초 타임스탬프 접두사)
        let stored_name = format!("{}_{}", chrono::Utc::now().timestamp_millis(), filename);
        let stored_path = format!("{}{}", UPLOAD_DIR, stored_name);

        web::block(move || {
            std::fs::create_dir_all(UPLOAD_DIR)?;
            let mut file = std::fs::File::create(&stored_path)?;
            file.write_all(&data)
        })
        .await
        .map_err(|e| AppError::InternalError(format!("파일 저장 작업 실패: {}", e)))?
        .map_err(|e| AppError::InternalError(format!("파일 저장 실패: {}", e)))?;

        let service = MemberService::instance();
        let response = service.change_image(member_id, stored_name).await?;

        log::info!("📦 프로필 이미지 변경: member_id={}", member_id);
        return Ok(HttpResponse::Ok().json(response));
    }

    Err(AppError::ValidationError(
        "업로드된 파일이 없습니다".to_string(),
    ))
}

/// 본인 또는 관리자인지 확인
fn ensure_self_or_admin(auth: &AuthenticatedMember, member_id: i64) -> Result<(), AppError> {
    if auth.id == member_id || auth.is_admin() {
        Ok(())
    } else {
        Err(AppError::AuthorizationError(
            "본인 또는 관리자만 접근할 수 있습니다".to_string(),
        ))
    }
}

/// 경로 조작을 막기 위해 파일명에서 디렉토리 구분자를 제거
fn sanitize_filename(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string())
        .replace(['/', '\\'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i64, authorities: Vec<&str>) -> AuthenticatedMember {
        AuthenticatedMember {
            id,
            login_id: "hong123".to_string(),
            authorities: authorities.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_self_access_allowed() {
        let auth = member(1, vec!["ROLE_MEMBER"]);
        assert!(ensure_self_or_admin(&auth, 1).is_ok());
    }

    #[test]
    fn test_other_member_access_denied() {
        let auth = member(1, vec!["ROLE_MEMBER"]);
        assert!(ensure_self_or_admin(&auth, 2).is_err());
    }

    #[test]
    fn test_admin_can_access_any_member() {
        let auth = member(1, vec!["ROLE_ADMIN"]);
        assert!(ensure_self_or_admin(&auth, 2).is_ok());
    }

    #[test]
    fn test_sanitize_filename_strips_paths() {
        assert_eq!(sanitize_filename("photo.png"), "photo.png");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("dir/photo.png"), "photo.png");
    }
}
