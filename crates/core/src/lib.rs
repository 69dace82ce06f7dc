//! crawlsift 공통 크레이트
//!
//! 분류기와 CLI가 함께 사용하는 에러, 설정, 도메인 타입을 제공합니다.
//!
//! # 모듈 구성
//!
//! - [`config`]: crawlsift.toml 설정 및 환경변수 오버라이드
//! - [`error`]: 도메인 에러 타입
//! - [`types`]: 분류 결과와 출력 대상 선택자

pub mod config;
pub mod error;
pub mod types;

// --- 주요 타입 re-export ---

// 에러
pub use error::{ConfigError, CrawlsiftError, PatternError, StreamError};

// 설정
pub use config::{ClassifierConfig, CrawlsiftConfig, GeneralConfig};

// 도메인 타입
pub use types::{Destination, Outcome};
