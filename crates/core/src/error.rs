//! 에러 타입 — 도메인별 에러 정의

/// crawlsift 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum CrawlsiftError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 패턴 레지스트리 구성 에러
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// 레코드 스트림 처리 에러
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 패턴 레지스트리 구성 에러
///
/// 레지스트리를 만들 수 없으면 어떤 레코드도 처리하지 않으므로
/// 이 에러는 항상 치명적입니다.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// 정규식 컴파일 실패
    #[error("invalid pattern '{pattern}': {reason}")]
    Invalid { pattern: String, reason: String },

    /// 내장 패턴 데이터 손상
    #[error("built-in pattern data '{name}' is malformed: {reason}")]
    Builtin { name: String, reason: String },

    /// 추가 패턴 소스 읽기 실패
    #[error("failed to read pattern source {source_name}: {reason}")]
    Source { source_name: String, reason: String },
}

/// 레코드 스트림 처리 에러
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// 입력 읽기 실패
    #[error("failed to read input: {0}")]
    Read(String),

    /// 출력 싱크 쓰기 실패
    #[error("failed to write to {sink} sink: {reason}")]
    Write { sink: String, reason: String },

    /// 출력 대상 열기 실패
    #[error("failed to open destination '{selector}': {reason}")]
    Destination { selector: String, reason: String },
}
