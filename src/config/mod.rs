//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 시작 시점에 [`AppConfig`] 하나로 모아
//! 각 서비스 생성자에 명시적으로 넘깁니다.
//!
//! ## 모듈 구성
//!
//! - [`app_config`] - 전체 설정 로딩과 [`ConfigError`]
//! - [`data_config`] - 데이터베이스, 서버, 환경, 업로드 관련 설정
//! - [`auth_config`] - 인증 프로바이더, OAuth, JWT 관련 설정
//!
//! ## 환경 분리
//!
//! `PROFILE` 에 따라 `.env.dev` / `.env.prod` 를 읽고 (`main.rs`),
//! `ENVIRONMENT` 로 bcrypt 비용과 JWT 시크릿 필수 여부를 결정합니다.

pub mod app_config;
pub mod auth_config;
pub mod data_config;

pub use app_config::*;
pub use auth_config::*;
pub use data_config::*;
