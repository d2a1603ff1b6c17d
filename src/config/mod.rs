//! # Configuration Module
//!
//! 회원 관리 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - JWT 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션 배포 시 필수 설정값을 실제 값으로 교체
//!
//! ### 3. 타입 안전성 (Type Safety)
//!
//! - 설정값의 타입 검증
//! - 런타임 설정값 파싱 오류 처리
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig};
//!
//! // 현재 환경 확인
//! let env = Environment::current();
//! println!("Current environment: {:?}", env);
//!
//! // 서버 설정
//! let host = ServerConfig::host();
//! let port = ServerConfig::port();
//! println!("Server will bind to {}:{}", host, port);
//!
//! // JWT 설정
//! let secret = JwtConfig::secret();
//! let access_days = JwtConfig::access_expiration_days();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_ACCESS_EXPIRATION_DAYS="1"
//! export JWT_REFRESH_EXPIRATION_DAYS="3"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
