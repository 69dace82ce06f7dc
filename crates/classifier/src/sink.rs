//! 출력 싱크와 입력 소스
//!
//! [`Sinks`]는 세 분류 결과별 출력 대상을 묶습니다. 각 싱크는 하나의
//! 생산자만 쓰며, 라인은 원본 바이트 그대로 `\n`을 붙여 기록됩니다.
//!
//! 파일 대상은 버퍼 없이 열어 쓰기가 바로 OS로 전달됩니다. 느린 대상은
//! 분류기 자체를 멈추게 하며 내부 큐는 두지 않습니다.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};

use crawlsift_core::types::{Destination, Outcome};

use crate::error::ClassifierError;

/// 세 분류 결과별 출력 싱크
#[derive(Debug)]
pub struct Sinks<W> {
    crawler: W,
    non_crawler: W,
    error: W,
}

impl<W: Write> Sinks<W> {
    /// 세 싱크로 새 묶음을 생성합니다.
    pub fn new(crawler: W, non_crawler: W, error: W) -> Self {
        Self {
            crawler,
            non_crawler,
            error,
        }
    }

    /// 분류 결과에 해당하는 싱크
    pub fn get_mut(&mut self, outcome: Outcome) -> &mut W {
        match outcome {
            Outcome::Crawler => &mut self.crawler,
            Outcome::NonCrawler => &mut self.non_crawler,
            Outcome::Unparsable => &mut self.error,
        }
    }

    /// 라인을 원본 그대로 기록하고 줄바꿈을 덧붙입니다.
    pub fn write_line(&mut self, outcome: Outcome, line: &[u8]) -> Result<(), ClassifierError> {
        let sink = self.get_mut(outcome);
        sink.write_all(line)
            .and_then(|()| sink.write_all(b"\n"))
            .map_err(|source| ClassifierError::Write { outcome, source })
    }

    /// 모든 싱크를 flush합니다.
    pub fn flush(&mut self) -> Result<(), ClassifierError> {
        for outcome in Outcome::ALL {
            self.get_mut(outcome)
                .flush()
                .map_err(|source| ClassifierError::Write { outcome, source })?;
        }
        Ok(())
    }

    /// 싱크를 (crawler, non_crawler, error) 순서로 돌려줍니다.
    pub fn into_inner(self) -> (W, W, W) {
        (self.crawler, self.non_crawler, self.error)
    }
}

impl Sinks<Box<dyn Write>> {
    /// 세 출력 대상을 엽니다.
    ///
    /// 하나라도 열 수 없으면 레코드를 읽기 전에 실패합니다.
    pub fn open(
        crawler: &Destination,
        non_crawler: &Destination,
        error: &Destination,
    ) -> Result<Self, ClassifierError> {
        Ok(Self::new(
            open_destination(crawler)?,
            open_destination(non_crawler)?,
            open_destination(error)?,
        ))
    }
}

/// 출력 대상을 쓰기 핸들로 엽니다.
///
/// 파일은 생성하거나 기존 내용을 truncate합니다.
pub fn open_destination(destination: &Destination) -> Result<Box<dyn Write>, ClassifierError> {
    let writer: Box<dyn Write> = match destination {
        Destination::Stdout => Box::new(io::stdout()),
        Destination::Stderr => Box::new(io::stderr()),
        Destination::Null => Box::new(io::sink()),
        Destination::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(path)
                .map_err(|source| ClassifierError::Destination {
                    selector: path.display().to_string(),
                    source,
                })?;
            Box::new(file)
        }
    };
    tracing::debug!(destination = %destination, "opened output destination");
    Ok(writer)
}

/// 입력 선택자를 엽니다 (`-`는 표준 입력, 그 외는 파일 경로).
pub fn open_input(selector: &str) -> Result<Box<dyn BufRead>, ClassifierError> {
    if selector == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(selector).map_err(|source| ClassifierError::Destination {
        selector: selector.to_owned(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn write_line_routes_by_outcome() {
        let mut sinks = Sinks::new(Vec::new(), Vec::new(), Vec::new());
        sinks.write_line(Outcome::Crawler, b"a").unwrap();
        sinks.write_line(Outcome::NonCrawler, b"b").unwrap();
        sinks.write_line(Outcome::Unparsable, b"c").unwrap();
        sinks.write_line(Outcome::Crawler, b"d").unwrap();
        let (crawler, non_crawler, error) = sinks.into_inner();
        assert_eq!(crawler, b"a\nd\n");
        assert_eq!(non_crawler, b"b\n");
        assert_eq!(error, b"c\n");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_names_the_sink() {
        let mut sinks = Sinks::new(FailingWriter, FailingWriter, FailingWriter);
        let err = sinks.write_line(Outcome::Unparsable, b"x").unwrap_err();
        match err {
            ClassifierError::Write { outcome, source } => {
                assert_eq!(outcome, Outcome::Unparsable);
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn file_destination_is_created_and_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crawler.log");
        std::fs::write(&path, "stale content\n").unwrap();

        let mut writer = open_destination(&Destination::File(path.clone())).unwrap();
        writer.write_all(b"fresh\n").unwrap();
        drop(writer);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn unwritable_destination_is_error() {
        let dest = Destination::File(PathBuf::from("/nonexistent/dir/out.log"));
        assert!(matches!(
            open_destination(&dest),
            Err(ClassifierError::Destination { .. })
        ));
    }

    #[test]
    fn null_destination_discards() {
        let mut writer = open_destination(&Destination::Null).unwrap();
        writer.write_all(b"dropped\n").unwrap();
        writer.flush().unwrap();
    }

    #[test]
    fn open_input_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("web.log");
        std::fs::write(&path, "line one\nline two\n").unwrap();

        let reader = open_input(path.to_str().unwrap()).unwrap();
        let lines: Vec<_> = reader.lines().collect::<Result<_, _>>().unwrap();
        assert_eq!(lines, vec!["line one", "line two"]);
    }

    #[test]
    fn open_missing_input_is_error() {
        assert!(open_input("/nonexistent/web.log").is_err());
    }
}
