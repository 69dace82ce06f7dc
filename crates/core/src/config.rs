//! 설정 관리 — crawlsift.toml 파싱 및 런타임 설정
//!
//! [`CrawlsiftConfig`]는 로깅과 분류기 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선, CLI 크레이트에서 적용)
//! 2. 환경변수 (`CRAWLSIFT_CLASSIFIER_USER_AGENT_KEY=ua` 형식)
//! 3. 설정 파일 (`crawlsift.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # fn example() -> Result<(), crawlsift_core::error::CrawlsiftError> {
//! use crawlsift_core::config::CrawlsiftConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = CrawlsiftConfig::load("crawlsift.toml")?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = CrawlsiftConfig::parse("[classifier]\nuser_agent_key = \"ua\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, CrawlsiftError};

/// 기본 User-Agent 필드명
pub const DEFAULT_USER_AGENT_KEY: &str = "http_user_agent";

/// 명시하지 않았을 때 작업 디렉토리에서 찾는 추가 패턴 파일
pub const DEFAULT_EXTRA_AGENTS_FILE: &str = "extra-crawler-agents.txt";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 2] = ["json", "pretty"];

/// crawlsift 통합 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlsiftConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 분류기 설정
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl CrawlsiftConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CrawlsiftError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 설정 파일 없이 기본값에 환경변수 오버라이드만 적용합니다.
    pub fn from_env() -> Result<Self, CrawlsiftError> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CrawlsiftError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CrawlsiftError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                CrawlsiftError::Io(e)
            }
        })?;
        Self::parse(&content)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, CrawlsiftError> {
        toml::from_str(toml_str).map_err(|e| {
            CrawlsiftError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `CRAWLSIFT_{SECTION}_{FIELD}`
    pub fn apply_env_overrides(&mut self) {
        override_string(&mut self.general.log_level, "CRAWLSIFT_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "CRAWLSIFT_GENERAL_LOG_FORMAT");

        override_string(
            &mut self.classifier.user_agent_key,
            "CRAWLSIFT_CLASSIFIER_USER_AGENT_KEY",
        );
        override_optional(
            &mut self.classifier.extra_agents_file,
            "CRAWLSIFT_CLASSIFIER_EXTRA_AGENTS_FILE",
        );
        override_string(&mut self.classifier.input, "CRAWLSIFT_CLASSIFIER_INPUT");
        override_string(
            &mut self.classifier.crawler_output,
            "CRAWLSIFT_CLASSIFIER_CRAWLER_OUTPUT",
        );
        override_string(
            &mut self.classifier.non_crawler_output,
            "CRAWLSIFT_CLASSIFIER_NON_CRAWLER_OUTPUT",
        );
        override_string(
            &mut self.classifier.error_output,
            "CRAWLSIFT_CLASSIFIER_ERROR_OUTPUT",
        );
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), CrawlsiftError> {
        if !VALID_LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", VALID_LOG_LEVELS.join(", ")),
            }
            .into());
        }

        if !VALID_LOG_FORMATS.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", VALID_LOG_FORMATS.join(", ")),
            }
            .into());
        }

        if self.classifier.user_agent_key.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "classifier.user_agent_key".to_owned(),
                reason: "must not be empty".to_owned(),
            }
            .into());
        }

        let selectors = [
            ("classifier.input", &self.classifier.input),
            ("classifier.crawler_output", &self.classifier.crawler_output),
            (
                "classifier.non_crawler_output",
                &self.classifier.non_crawler_output,
            ),
            ("classifier.error_output", &self.classifier.error_output),
        ];
        for (field, value) in selectors {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_owned(),
                    reason: "selector must not be empty".to_owned(),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// 분류기 설정
///
/// 출력 선택자는 [`Destination::parse`](crate::types::Destination::parse)로 해석됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// 검사할 JSON 필드명
    pub user_agent_key: String,
    /// 추가 크롤러 패턴 파일 (없으면 기본 파일이 존재할 때만 사용)
    pub extra_agents_file: Option<String>,
    /// 입력 선택자 (`-`는 표준 입력)
    pub input: String,
    /// 크롤러 레코드 출력 대상
    pub crawler_output: String,
    /// 비크롤러 레코드 출력 대상
    pub non_crawler_output: String,
    /// 파싱 불가 레코드 출력 대상
    pub error_output: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            user_agent_key: DEFAULT_USER_AGENT_KEY.to_owned(),
            extra_agents_file: None,
            input: "-".to_owned(),
            crawler_output: "/dev/null".to_owned(),
            non_crawler_output: "/dev/stdout".to_owned(),
            error_output: "/dev/null".to_owned(),
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        debug!(env_key, "setting overridden from environment");
        *target = val;
    }
}

fn override_optional(target: &mut Option<String>, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        debug!(env_key, "setting overridden from environment");
        // 빈 값은 명시적 해제로 취급
        *target = if val.is_empty() { None } else { Some(val) };
    }
}
