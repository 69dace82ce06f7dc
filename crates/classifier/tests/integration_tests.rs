//! 통합 테스트 -- 접근 로그 분류 전체 흐름 검증
//!
//! testdata/web.log 를 내장 레지스트리와 추가 패턴 파일로 분류하고
//! 세 싱크의 결과를 기대 파일과 바이트 단위로 비교합니다.

use std::fs;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use crawlsift_classifier::{
    ClassifierError, PatternLoader, PatternRegistry, Sinks, classify_stream, open_input,
};
use crawlsift_core::types::{Destination, Outcome};

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(name)
}

fn registry_with_extras() -> PatternRegistry {
    let extra = PatternLoader::load(testdata("extra-crawler-agents.txt"));
    PatternRegistry::builder()
        .extra_patterns(extra)
        .build()
        .expect("built-in registry should compile")
}

fn classify_file(registry: &PatternRegistry, path: &Path) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let input = BufReader::new(fs::File::open(path).expect("should open input"));
    let mut sinks = Sinks::new(Vec::new(), Vec::new(), Vec::new());
    classify_stream(registry, "http_user_agent", input, &mut sinks).expect("run should succeed");
    sinks.into_inner()
}

/// web.log 분류 결과가 기대 파일과 일치하는지 확인
#[test]
fn test_web_log_matches_expected_outputs() {
    let registry = registry_with_extras();
    let (crawler, non_crawler, error) = classify_file(&registry, &testdata("web.log"));

    assert_eq!(
        String::from_utf8(crawler).unwrap(),
        fs::read_to_string(testdata("expected-crawler.log")).unwrap()
    );
    assert_eq!(
        String::from_utf8(non_crawler).unwrap(),
        fs::read_to_string(testdata("expected-non-crawler.log")).unwrap()
    );
    assert_eq!(
        String::from_utf8(error).unwrap(),
        fs::read_to_string(testdata("expected-error.log")).unwrap()
    );
}

/// 세 싱크의 라인 수 합이 입력 라인 수와 같은지 확인
#[test]
fn test_every_input_line_is_written_once() {
    let registry = registry_with_extras();
    let input = fs::read(testdata("web.log")).unwrap();
    let (crawler, non_crawler, error) = classify_file(&registry, &testdata("web.log"));

    let count = |buf: &[u8]| buf.iter().filter(|b| **b == b'\n').count();
    assert_eq!(
        count(&crawler) + count(&non_crawler) + count(&error),
        count(&input)
    );
    assert_eq!(crawler.len() + non_crawler.len() + error.len(), input.len());
}

/// 추가 패턴 파일이 없으면 해당 클라이언트는 비크롤러로 분류
#[test]
fn test_without_extra_patterns_internal_bot_is_non_crawler() {
    let registry = PatternRegistry::builtin().unwrap();
    let (crawler, non_crawler, _) = classify_file(&registry, &testdata("web.log"));

    let crawler = String::from_utf8(crawler).unwrap();
    let non_crawler = String::from_utf8(non_crawler).unwrap();
    assert!(!crawler.contains("MyInternalBot"));
    assert!(non_crawler.contains("MyInternalBot"));
}

/// 허용 목록에 있는 링크 미리보기 클라이언트는 비크롤러
#[test]
fn test_allowlisted_agent_is_non_crawler() {
    let registry = registry_with_extras();
    let (crawler, non_crawler, _) = classify_file(&registry, &testdata("web.log"));

    assert!(!String::from_utf8(crawler).unwrap().contains("WhatsApp"));
    assert!(String::from_utf8(non_crawler).unwrap().contains("WhatsApp"));
}

/// 같은 입력을 두 번 분류하면 결과가 동일
#[test]
fn test_classification_is_idempotent() {
    let registry = registry_with_extras();
    let first = classify_file(&registry, &testdata("web.log"));
    let second = classify_file(&registry, &testdata("web.log"));
    assert_eq!(first, second);
}

/// CRLF 입력도 같은 분할 결과를 냄
#[test]
fn test_crlf_input_produces_same_partition() {
    let registry = registry_with_extras();
    let lf = fs::read_to_string(testdata("web.log")).unwrap();
    let crlf = lf.replace('\n', "\r\n");

    let mut sinks = Sinks::new(Vec::new(), Vec::new(), Vec::new());
    classify_stream(&registry, "http_user_agent", crlf.as_bytes(), &mut sinks).unwrap();

    assert_eq!(sinks.into_inner(), classify_file(&registry, &testdata("web.log")));
}

/// 파일 출력 대상으로 분류 결과를 기록
#[test]
fn test_file_destinations_receive_output() {
    let dir = tempfile::tempdir().unwrap();
    let crawler_path = dir.path().join("crawler.log");
    let non_crawler_path = dir.path().join("non-crawler.log");

    let registry = registry_with_extras();
    let mut sinks = Sinks::open(
        &Destination::File(crawler_path.clone()),
        &Destination::File(non_crawler_path.clone()),
        &Destination::Null,
    )
    .unwrap();

    let input = open_input(testdata("web.log").to_str().unwrap()).unwrap();
    let summary = classify_stream(&registry, "http_user_agent", input, &mut sinks).unwrap();
    drop(sinks);

    assert_eq!(summary.crawler, 5);
    assert_eq!(summary.non_crawler, 6);
    assert_eq!(summary.unparsable, 4);
    assert_eq!(
        fs::read_to_string(&crawler_path).unwrap(),
        fs::read_to_string(testdata("expected-crawler.log")).unwrap()
    );
    assert_eq!(
        fs::read_to_string(&non_crawler_path).unwrap(),
        fs::read_to_string(testdata("expected-non-crawler.log")).unwrap()
    );
}

/// 에러 싱크 쓰기 실패는 실행 전체를 중단
#[test]
fn test_error_sink_failure_is_fatal() {
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let registry = registry_with_extras();
    let input = BufReader::new(fs::File::open(testdata("web.log")).unwrap());
    let mut sinks: Sinks<Box<dyn Write>> = Sinks::new(
        Box::new(io::sink()),
        Box::new(io::sink()),
        Box::new(ClosedPipe),
    );

    let err = classify_stream(&registry, "http_user_agent", input, &mut sinks).unwrap_err();
    assert!(matches!(
        err,
        ClassifierError::Write {
            outcome: Outcome::Unparsable,
            ..
        }
    ));
}

/// 잘못된 추가 패턴은 레지스트리 구성을 실패시킴
#[test]
fn test_invalid_extra_pattern_file_fails_build() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "MyInternalBot").unwrap();
    writeln!(file, "broken(").unwrap();

    let extra = PatternLoader::load(file.path());
    assert_eq!(extra.len(), 2);
    let err = PatternRegistry::builder()
        .extra_patterns(extra)
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("broken("));
}
