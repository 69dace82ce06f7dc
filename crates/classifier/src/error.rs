//! 분류기 에러 타입
//!
//! [`ClassifierError`]는 레지스트리 구성과 스트림 처리에서 발생하는 모든 에러를 표현합니다.
//! `From<ClassifierError> for CrawlsiftError` 변환이 구현되어 있어
//! 상위 레이어에서 `?` 연산자로 자연스럽게 전파할 수 있습니다.
//!
//! 레코드 단위 파싱 실패는 에러가 아니라 [`Outcome::Unparsable`] 분류 결과입니다.

use crawlsift_core::error::{CrawlsiftError, PatternError, StreamError};
use crawlsift_core::types::Outcome;

/// 분류기 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// 정규식 컴파일 실패 (내장/추가 패턴 모두)
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// 원본 패턴 문자열
        pattern: String,
        /// 컴파일 실패 사유
        reason: String,
    },

    /// 내장 패턴 데이터 파싱 실패
    #[error("built-in data '{name}' is malformed: {reason}")]
    BuiltinData {
        /// 내장 데이터 파일 이름
        name: String,
        /// 실패 사유
        reason: String,
    },

    /// 추가 패턴 소스 읽기 실패
    #[error("pattern source {path}: {reason}")]
    PatternSource {
        /// 소스 경로 (리더인 경우 설명 문자열)
        path: String,
        /// 실패 사유
        reason: String,
    },

    /// 입력 스트림 읽기 실패
    #[error("failed to read input: {0}")]
    Input(#[source] std::io::Error),

    /// 싱크 쓰기 실패
    #[error("failed to write to {outcome} sink: {source}")]
    Write {
        /// 쓰기 대상 싱크
        outcome: Outcome,
        /// 원인 I/O 에러
        source: std::io::Error,
    },

    /// 입력/출력 대상 열기 실패
    #[error("failed to open '{selector}': {source}")]
    Destination {
        /// 선택자 문자열
        selector: String,
        /// 원인 I/O 에러
        source: std::io::Error,
    },
}

impl From<ClassifierError> for CrawlsiftError {
    fn from(err: ClassifierError) -> Self {
        match err {
            ClassifierError::InvalidPattern { pattern, reason } => {
                CrawlsiftError::Pattern(PatternError::Invalid { pattern, reason })
            }
            ClassifierError::BuiltinData { name, reason } => {
                CrawlsiftError::Pattern(PatternError::Builtin { name, reason })
            }
            ClassifierError::PatternSource { path, reason } => {
                CrawlsiftError::Pattern(PatternError::Source {
                    source_name: path,
                    reason,
                })
            }
            ClassifierError::Input(e) => CrawlsiftError::Stream(StreamError::Read(e.to_string())),
            ClassifierError::Write { outcome, source } => {
                CrawlsiftError::Stream(StreamError::Write {
                    sink: outcome.to_string(),
                    reason: source.to_string(),
                })
            }
            ClassifierError::Destination { selector, source } => {
                CrawlsiftError::Stream(StreamError::Destination {
                    selector,
                    reason: source.to_string(),
                })
            }
        }
    }
}
