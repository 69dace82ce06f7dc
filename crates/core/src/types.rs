//! 도메인 타입 — 분류 결과와 출력 대상
//!
//! 분류기와 CLI가 공유하는 작은 값 타입들을 정의합니다.

use std::fmt;
use std::path::PathBuf;

/// 레코드 분류 결과
///
/// 모든 입력 라인은 정확히 하나의 결과를 가지며,
/// 결과에 해당하는 싱크에 원본 그대로 기록됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// 자동화 클라이언트 패턴에 매칭됨
    Crawler,
    /// 매칭되지 않음 (필드가 없거나 문자열이 아닌 경우 포함)
    NonCrawler,
    /// JSON 객체로 파싱할 수 없음
    Unparsable,
}

impl Outcome {
    /// 모든 결과 (싱크 순서와 동일)
    pub const ALL: [Outcome; 3] = [Outcome::Crawler, Outcome::NonCrawler, Outcome::Unparsable];

    /// 로그 필드와 에러 메시지에 사용하는 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crawler => "crawler",
            Self::NonCrawler => "non_crawler",
            Self::Unparsable => "error",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 출력 대상 선택자
///
/// 문자열 선택자를 해석한 결과입니다. 실제 핸들을 여는 것은
/// 분류기 크레이트의 `sink` 모듈이 담당합니다.
///
/// | 선택자 | 대상 |
/// |---|---|
/// | `-`, `/dev/stdout`, `stdout` | 표준 출력 |
/// | `+`, `/dev/stderr`, `stderr` | 표준 에러 |
/// | `0`, `/dev/null`, `null` | 버림 |
/// | 그 외 | 파일 경로 (생성 또는 truncate) |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Stderr,
    Null,
    File(PathBuf),
}

impl Destination {
    /// 선택자 문자열을 해석합니다.
    pub fn parse(selector: &str) -> Self {
        match selector {
            "-" | "/dev/stdout" | "stdout" => Self::Stdout,
            "+" | "/dev/stderr" | "stderr" => Self::Stderr,
            "0" | "/dev/null" | "null" => Self::Null,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::Stderr => f.write_str("stderr"),
            Self::Null => f.write_str("null"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdout_aliases() {
        for s in ["-", "/dev/stdout", "stdout"] {
            assert_eq!(Destination::parse(s), Destination::Stdout, "{s}");
        }
    }

    #[test]
    fn stderr_aliases() {
        for s in ["+", "/dev/stderr", "stderr"] {
            assert_eq!(Destination::parse(s), Destination::Stderr, "{s}");
        }
    }

    #[test]
    fn null_aliases() {
        for s in ["0", "/dev/null", "null"] {
            assert_eq!(Destination::parse(s), Destination::Null, "{s}");
        }
    }

    #[test]
    fn anything_else_is_a_file() {
        assert_eq!(
            Destination::parse("out/crawler.log"),
            Destination::File(PathBuf::from("out/crawler.log"))
        );
        // 대소문자 구분
        assert_eq!(
            Destination::parse("STDOUT"),
            Destination::File(PathBuf::from("STDOUT"))
        );
    }

    #[test]
    fn outcome_names() {
        assert_eq!(Outcome::Crawler.to_string(), "crawler");
        assert_eq!(Outcome::NonCrawler.to_string(), "non_crawler");
        assert_eq!(Outcome::Unparsable.to_string(), "error");
    }
}
