//! # 회원 관리 서비스 구현
//!
//! 회원 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 회원 등록, 인증, 조회, 수정, 삭제와 토큰 기반 세션 관리를 제공합니다.
//!
//! ## 보안 설계 원칙
//!
//! ### 1. 비밀번호 보안
//!
//! - **bcrypt 해싱**: 적응형 해시 함수로 무차별 대입 공격 방지
//! - **환경별 Cost**: 개발(4-8) vs 운영(12-15) 환경별 보안 강도
//! - **솔트 자동 생성**: 레인보우 테이블 공격 방지
//!
//! ### 2. 인증 보안
//!
//! - **리프레시 토큰 화이트리스트**: 저장된 토큰과 일치하는 경우에만 갱신 허용
//! - **실패 로깅**: 인증 실패 시 보안 이벤트 기록
//!
//! ### 3. 데이터 보안
//!
//! - **민감 정보 제거**: DTO 변환 시 비밀번호 해시와 리프레시 토큰 제외
//! - **중복 방지**: 로그인 아이디, 이메일 유니크 제약

use std::sync::Arc;
use bcrypt::hash;
use mongodb::bson::doc;
use singleton_macro::service;
use crate::{
    config::{PageConfig, PasswordConfig},
    core::errors::AppError,
    domain::{
        dto::members::{
            request::{CreateMemberRequest, UpdateMemberRequest},
            response::{
                CreateMemberResponse, FindLoginIdResponse, MemberResponse, PageResponse,
                TempPasswordResponse,
            },
        },
        entities::members::member::Member,
        models::token::token::TokenPair,
    },
    repositories::members::member_repo::MemberRepository,
    services::auth::token_service::{TokenError, TokenService},
    utils::password_util,
};

/// 관리자 권한을 갖는 로그인 아이디
const ADMIN_LOGIN_ID: &str = "admin";

/// 로그인 아이디에 따른 권한 목록 계산
///
/// 로그인 아이디가 `admin`이면 ROLE_ADMIN, 그 외에는 ROLE_MEMBER를 부여합니다.
///
/// TODO: 권한을 회원 문서의 필드로 옮기고 마이그레이션으로 기존 회원에
/// ROLE_MEMBER를 채워 넣기. 그 전까지는 로그인 아이디 기반 규칙을 유지한다.
pub fn authorities_for(login_id: &str) -> Vec<String> {
    if login_id == ADMIN_LOGIN_ID {
        vec!["ROLE_ADMIN".to_string()]
    } else {
        vec!["ROLE_MEMBER".to_string()]
    }
}

/// 조회된 회원에 대해 비밀번호를 검증
///
/// 회원이 없으면 `NotFound`, 해시 불일치면 `LoginDenied`를 반환합니다.
fn verify_credentials(member: Option<Member>, password: &str) -> Result<Member, AppError> {
    let member =
        member.ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

    let verify_start = std::time::Instant::now();
    let is_valid = bcrypt::verify(password, &member.pw)
        .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
    log::debug!("Password verification took: {:?}", verify_start.elapsed());

    if !is_valid {
        log::warn!("로그인 실패: login_id={}", member.login_id);
        return Err(AppError::LoginDenied(
            "비밀번호가 올바르지 않습니다".to_string(),
        ));
    }

    Ok(member)
}

/// 화이트리스트 조회 결과 확인
///
/// 저장된 리프레시 토큰과 일치하는 회원이 없으면 로그아웃되었거나
/// 재로그인으로 교체된 토큰이므로 거부합니다.
fn require_whitelisted(member: Option<Member>) -> Result<Member, AppError> {
    member.ok_or_else(|| AppError::LoginDenied("유효하지 않은 리프레시 토큰입니다".to_string()))
}

/// 리프레시 토큰 디코딩 실패를 도메인 에러로 변환
fn refresh_decode_error(error: TokenError) -> AppError {
    match error {
        TokenError::Expired => {
            AppError::RefreshTokenExpired("리프레시 토큰이 만료되었습니다".to_string())
        }
        TokenError::Invalid(msg) => AppError::InvalidToken(msg),
    }
}

/// 갱신 대상 회원의 ID 확인
///
/// ID가 없는 문서는 갱신 대상이 될 수 없으므로 거부합니다.
fn require_member_id(member: &Member) -> Result<i64, AppError> {
    member
        .id
        .ok_or_else(|| AppError::LoginDenied("유효하지 않은 리프레시 토큰입니다".to_string()))
}

/// 회원 관리 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// MemberRepository가 자동으로 주입됩니다.
///
/// ## 주요 책임
///
/// 1. **회원 등록**: 비밀번호 해싱, 중복 방지, 순번 ID 발급
/// 2. **인증**: 로그인 검증, 토큰 쌍 발급, 리프레시 토큰 저장
/// 3. **토큰 갱신**: 화이트리스트 검증 후 액세스 토큰 재발급
/// 4. **계정 관리**: 조회, 수정, 삭제, 프로필 이미지, 계정 찾기
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let member_service = MemberService::instance();
///
/// let response = member_service.create_member(request).await?;
/// println!("회원 생성: {}", response.message);
///
/// let (member, tokens) = member_service.login("hong123", "password").await?;
/// println!("로그인 성공: {}", member.login_id);
/// ```
#[service(name = "member")]
pub struct MemberService {
    /// 회원 데이터 액세스 리포지토리
    ///
    /// 자동 의존성 주입을 통해 MemberRepository 싱글톤이 주입됩니다.
    member_repo: Arc<MemberRepository>,
}

impl MemberService {
    /// 새 회원 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **비밀번호 해싱**: bcrypt를 사용한 안전한 해싱
    /// 2. **엔티티 생성**: Member::new()를 통한 계정 생성
    /// 3. **영구 저장**: Repository를 통한 저장 (중복 검사 포함)
    /// 4. **응답 생성**: 민감 정보를 제거한 DTO 응답 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 로그인 아이디 또는 이메일 중복
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn create_member(
        &self,
        request: CreateMemberRequest,
    ) -> Result<CreateMemberResponse, AppError> {
        let start_time = std::time::Instant::now();

        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.pw, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let member = Member::new(request.login_id, password_hash, request.name, request.email);

        let created = self.member_repo.create(member).await?;

        log::info!("Total member creation took: {:?}", start_time.elapsed());

        Ok(CreateMemberResponse {
            member: MemberResponse::from(created),
            message: "회원이 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// ID로 회원 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 회원이 존재하지 않음
    pub async fn get_member_by_id(&self, id: i64) -> Result<MemberResponse, AppError> {
        let member = self
            .member_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        Ok(MemberResponse::from(member))
    }

    /// 회원 목록 페이지 조회
    ///
    /// 관리자 화면의 회원 목록에 사용됩니다. 요청된 페이지 크기는
    /// 설정된 최대치를 넘지 않도록 보정됩니다.
    pub async fn get_members_page(
        &self,
        page: u64,
        size: u64,
    ) -> Result<PageResponse<MemberResponse>, AppError> {
        let size = size.clamp(1, PageConfig::max_size());

        let members = self.member_repo.find_page(page, size).await?;
        let total = self.member_repo.count().await?;

        let items = members.into_iter().map(MemberResponse::from).collect();

        Ok(PageResponse::new(items, page, size, total))
    }

    /// 회원 정보 수정
    ///
    /// 요청에 포함된 필드만 변경합니다. 비밀번호는 요청에 포함된 경우에만
    /// 새로 해싱하여 저장합니다. 저장된 해시를 다시 해싱하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 수정할 필드가 없음
    /// * `AppError::ConflictError` - 변경하려는 로그인 아이디 또는 이메일이 이미 사용 중
    /// * `AppError::NotFound` - 해당 ID의 회원이 존재하지 않음
    pub async fn update_member(
        &self,
        id: i64,
        request: UpdateMemberRequest,
    ) -> Result<MemberResponse, AppError> {
        if !request.has_changes() {
            return Err(AppError::ValidationError(
                "수정할 필드가 없습니다".to_string(),
            ));
        }

        let mut update_doc = doc! {};

        if let Some(login_id) = request.login_id {
            // 다른 회원이 이미 사용 중인 로그인 아이디인지 확인
            if let Some(existing) = self.member_repo.find_by_login_id(&login_id).await? {
                if existing.id != Some(id) {
                    return Err(AppError::ConflictError(
                        "이미 사용 중인 로그인 아이디입니다".to_string(),
                    ));
                }
            }
            update_doc.insert("login_id", login_id);
        }

        if let Some(pw) = request.pw {
            let password_hash = hash(&pw, PasswordConfig::bcrypt_cost())
                .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
            update_doc.insert("pw", password_hash);
        }

        if let Some(name) = request.name {
            update_doc.insert("name", name);
        }

        if let Some(email) = request.email {
            // 다른 회원이 이미 사용 중인 이메일인지 확인
            if let Some(existing) = self.member_repo.find_by_email(&email).await? {
                if existing.id != Some(id) {
                    return Err(AppError::ConflictError(
                        "이미 사용 중인 이메일입니다".to_string(),
                    ));
                }
            }
            update_doc.insert("email", email);
        }

        update_doc.insert("updated_at", mongodb::bson::DateTime::now());

        let updated = self
            .member_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        Ok(MemberResponse::from(updated))
    }

    /// 회원 계정 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 회원이 존재하지 않음
    pub async fn delete_member(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.member_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("회원을 찾을 수 없습니다".to_string()));
        }

        log::info!("회원 삭제 완료: id={}", id);
        Ok(())
    }

    /// 프로필 이미지 경로 변경
    ///
    /// 업로드 처리 후 저장된 파일 경로를 회원 문서에 기록합니다.
    pub async fn change_image(&self, id: i64, image_path: String) -> Result<MemberResponse, AppError> {
        let update_doc = doc! {
            "m_image": image_path,
            "updated_at": mongodb::bson::DateTime::now(),
        };

        let updated = self
            .member_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        Ok(MemberResponse::from(updated))
    }

    /// 로그인 아이디와 비밀번호 검증
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 존재하지 않는 로그인 아이디
    /// * `AppError::LoginDenied` - 비밀번호 불일치
    pub async fn check_login_id_and_password(
        &self,
        login_id: &str,
        password: &str,
    ) -> Result<Member, AppError> {
        let member = self.member_repo.find_by_login_id(login_id).await?;
        verify_credentials(member, password)
    }

    /// 로그인 처리
    ///
    /// 자격 증명을 검증하고 토큰 쌍을 발급한 뒤, 리프레시 토큰을
    /// 회원 문서에 저장합니다. 재로그인 시 이전 리프레시 토큰은
    /// 교체되어 더 이상 유효하지 않습니다.
    ///
    /// # Returns
    ///
    /// 인증된 회원 엔티티와 발급된 토큰 쌍
    pub async fn login(
        &self,
        login_id: &str,
        password: &str,
    ) -> Result<(Member, TokenPair), AppError> {
        let member = self.check_login_id_and_password(login_id, password).await?;

        let token_service = TokenService::instance();
        let authorities = authorities_for(&member.login_id);
        let tokens = token_service.generate_token_pair(&member, authorities)?;

        let member_id = member.id.ok_or_else(|| {
            AppError::InternalError("회원 ID가 없습니다".to_string())
        })?;

        // 리프레시 토큰 화이트리스트 갱신 (회원당 1개 유지)
        let member = self
            .member_repo
            .set_refresh_token(member_id, Some(&tokens.refresh_token))
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        log::info!("로그인 성공: login_id={}", member.login_id);

        Ok((member, tokens))
    }

    /// 액세스 토큰 갱신
    ///
    /// # 검증 순서
    ///
    /// 1. **화이트리스트 확인**: 저장된 리프레시 토큰과 일치하는 회원 조회.
    ///    없으면 로그아웃되었거나 교체된 토큰이므로 거부
    /// 2. **토큰 디코딩**: 서명과 만료 시각 검증
    /// 3. **재발급**: 조회된 회원의 현재 권한으로 새 액세스 토큰 발급
    ///
    /// 리프레시 토큰 자체는 교체하지 않습니다. 만료될 때까지
    /// 같은 토큰으로 갱신할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::LoginDenied` - 화이트리스트에 없는 토큰
    /// * `AppError::RefreshTokenExpired` - 리프레시 토큰 만료
    /// * `AppError::InvalidToken` - 서명 불일치 등 그 외 검증 실패
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<(String, i64), AppError> {
        // 화이트리스트 우선 확인
        let member =
            require_whitelisted(self.member_repo.find_by_refresh_token(refresh_token).await?)?;

        let token_service = TokenService::instance();

        token_service
            .verify_token(refresh_token)
            .map_err(refresh_decode_error)?;

        require_member_id(&member)?;

        let authorities = authorities_for(&member.login_id);
        let access_token = token_service.generate_access_token(&member, authorities)?;
        let expires_in = crate::config::JwtConfig::access_expiration_days() * 86400;

        log::info!("🔄 액세스 토큰 갱신: login_id={}", member.login_id);

        Ok((access_token, expires_in))
    }

    /// 로그아웃 처리
    ///
    /// 저장된 리프레시 토큰을 제거하여 이후 갱신 요청을 차단합니다.
    pub async fn logout(&self, member_id: i64) -> Result<(), AppError> {
        self.member_repo
            .set_refresh_token(member_id, None)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        log::info!("로그아웃 완료: id={}", member_id);
        Ok(())
    }

    /// 이메일로 로그인 아이디 찾기
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이메일의 회원이 존재하지 않음
    pub async fn find_login_id_by_email(
        &self,
        email: &str,
    ) -> Result<FindLoginIdResponse, AppError> {
        let member = self
            .member_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        Ok(FindLoginIdResponse {
            login_id: member.login_id,
        })
    }

    /// 임시 비밀번호 발급
    ///
    /// 로그인 아이디와 이메일이 모두 일치하는 회원의 비밀번호를
    /// 임시 비밀번호로 교체합니다. 평문 임시 비밀번호는 이 응답에서
    /// 한 번만 전달되며 저장소에는 해시만 남습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 아이디와 이메일이 일치하는 회원 없음
    pub async fn issue_temporary_password(
        &self,
        login_id: &str,
        email: &str,
    ) -> Result<TempPasswordResponse, AppError> {
        let member = self
            .member_repo
            .find_by_login_id_and_email(login_id, email)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        let member_id = member.id.ok_or_else(|| {
            AppError::InternalError("회원 ID가 없습니다".to_string())
        })?;

        let temp_password = password_util::generate_temp_password();
        let password_hash = hash(&temp_password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let update_doc = doc! {
            "pw": password_hash,
            "updated_at": mongodb::bson::DateTime::now(),
        };

        self.member_repo
            .update(member_id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        log::info!("임시 비밀번호 발급: login_id={}", login_id);

        Ok(TempPasswordResponse {
            temp_password,
            message: "임시 비밀번호가 발급되었습니다. 로그인 후 비밀번호를 변경해주세요".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_login_id_gets_admin_role() {
        assert_eq!(authorities_for("admin"), vec!["ROLE_ADMIN".to_string()]);
    }

    #[test]
    fn test_regular_login_id_gets_member_role() {
        assert_eq!(authorities_for("hong123"), vec!["ROLE_MEMBER".to_string()]);
    }

    #[test]
    fn test_admin_rule_is_exact_match() {
        assert_eq!(authorities_for("admin2"), vec!["ROLE_MEMBER".to_string()]);
        assert_eq!(authorities_for("Admin"), vec!["ROLE_MEMBER".to_string()]);
        assert_eq!(authorities_for(""), vec!["ROLE_MEMBER".to_string()]);
    }

    fn member_with_password(login_id: &str, password: &str) -> Member {
        let hashed = bcrypt::hash(password, 4).unwrap();
        let mut member = Member::new(
            login_id.to_string(),
            hashed,
            "홍길동".to_string(),
            "hong@example.com".to_string(),
        );
        member.id = Some(1);
        member
    }

    #[test]
    fn test_verify_credentials_accepts_matching_password() {
        let member = member_with_password("hong123", "correct-password");
        let result = verify_credentials(Some(member), "correct-password");
        assert_eq!(result.unwrap().login_id, "hong123");
    }

    #[test]
    fn test_verify_credentials_rejects_wrong_password() {
        let member = member_with_password("hong123", "correct-password");
        match verify_credentials(Some(member), "wrong-password") {
            Err(AppError::LoginDenied(_)) => {}
            other => panic!("LoginDenied를 기대했지만 {:?}", other),
        }
    }

    #[test]
    fn test_verify_credentials_unknown_login_id_is_not_found() {
        match verify_credentials(None, "whatever") {
            Err(AppError::NotFound(_)) => {}
            other => panic!("NotFound를 기대했지만 {:?}", other),
        }
    }

    #[test]
    fn test_refresh_rejects_token_nobody_holds() {
        match require_whitelisted(None) {
            Err(AppError::LoginDenied(_)) => {}
            other => panic!("LoginDenied를 기대했지만 {:?}", other),
        }
    }

    #[test]
    fn test_whitelisted_member_passes_through() {
        let member = member_with_password("hong123", "pw123456");
        let passed = require_whitelisted(Some(member)).unwrap();
        assert_eq!(passed.id, Some(1));
    }

    #[test]
    fn test_expired_refresh_maps_to_refresh_token_expired() {
        match refresh_decode_error(TokenError::Expired) {
            AppError::RefreshTokenExpired(_) => {}
            other => panic!("RefreshTokenExpired를 기대했지만 {:?}", other),
        }
    }

    #[test]
    fn test_malformed_refresh_maps_to_invalid_token() {
        match refresh_decode_error(TokenError::Invalid("bad signature".to_string())) {
            AppError::InvalidToken(msg) => assert_eq!(msg, "bad signature"),
            other => panic!("InvalidToken을 기대했지만 {:?}", other),
        }
    }

    #[test]
    fn test_member_without_id_cannot_refresh() {
        let mut member = member_with_password("hong123", "pw123456");
        member.id = None;
        match require_member_id(&member) {
            Err(AppError::LoginDenied(_)) => {}
            other => panic!("LoginDenied를 기대했지만 {:?}", other),
        }
    }

    #[test]
    fn test_admin_access_token_carries_admin_claims() {
        let member = member_with_password("admin", "pw123456");
        let token_service = TokenService {};
        let token = token_service
            .generate_access_token(&member, authorities_for(&member.login_id))
            .unwrap();

        let claims = token_service.verify_token(&token).unwrap();
        assert_eq!(claims.id, "1");
        assert_eq!(claims.login_id, "admin");
        assert_eq!(claims.authorities, Some(vec!["ROLE_ADMIN".to_string()]));
    }
}
