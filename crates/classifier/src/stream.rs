//! 스트리밍 레코드 분류기
//!
//! 입력을 한 줄씩 읽어 분류하고 결과별 싱크에 원본 그대로 기록합니다.
//! 한 번에 한 레코드만 메모리에 두며, 각 싱크 안에서의 순서는 입력 순서와 같습니다.
//!
//! # 라인 처리
//! - `\n` 기준으로 분리하고, 줄 끝의 `\r` 하나를 제거합니다
//! - 마지막 줄에 줄바꿈이 없어도 처리하며 출력에는 `\n`을 붙입니다
//! - 라인이 UTF-8일 필요는 없으며, 어느 싱크로 가든 원본 바이트 그대로 기록됩니다
//!
//! # 사용 예시
//! ```
//! use crawlsift_classifier::{PatternRegistry, Sinks, classify_stream};
//!
//! let registry = PatternRegistry::builtin()?;
//! let input: &[u8] = b"{\"http_user_agent\":\"Mozilla/5.0 (compatible; Googlebot/2.1)\"}\nnot json\n";
//! let mut sinks = Sinks::new(Vec::new(), Vec::new(), Vec::new());
//!
//! let summary = classify_stream(&registry, "http_user_agent", input, &mut sinks)?;
//! assert_eq!(summary.crawler, 1);
//! assert_eq!(summary.unparsable, 1);
//! # Ok::<(), crawlsift_classifier::ClassifierError>(())
//! ```

use std::io::{BufRead, Write};

use crawlsift_core::types::Outcome;

use crate::error::ClassifierError;
use crate::record::Record;
use crate::registry::PatternRegistry;
use crate::sink::Sinks;

/// 스트림 처리 결과 요약
///
/// 분류 결과별 라인 수입니다. 종료 로그에만 사용됩니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub crawler: u64,
    pub non_crawler: u64,
    pub unparsable: u64,
}

impl StreamSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Crawler => self.crawler += 1,
            Outcome::NonCrawler => self.non_crawler += 1,
            Outcome::Unparsable => self.unparsable += 1,
        }
    }

    /// 처리한 전체 라인 수
    pub fn total(&self) -> u64 {
        self.crawler + self.non_crawler + self.unparsable
    }
}

/// 레코드 분류기
///
/// 구성이 끝난 레지스트리를 빌려 쓰며 라인 간 상태를 갖지 않습니다.
pub struct Classifier<'r> {
    registry: &'r PatternRegistry,
    field: String,
}

impl<'r> Classifier<'r> {
    /// 검사할 필드명으로 분류기를 생성합니다.
    pub fn new(registry: &'r PatternRegistry, field: impl Into<String>) -> Self {
        Self {
            registry,
            field: field.into(),
        }
    }

    /// 검사하는 필드명
    pub fn field(&self) -> &str {
        &self.field
    }

    /// 한 라인을 분류합니다.
    ///
    /// 필드가 없거나 문자열이 아니면 자동화 클라이언트의 근거가 없으므로
    /// 비크롤러로 분류합니다.
    pub fn classify(&self, line: &[u8]) -> Outcome {
        let record = match Record::parse(line) {
            Ok(record) => record,
            Err(e) => {
                tracing::trace!(error = %e, "unparsable record");
                return Outcome::Unparsable;
            }
        };

        let value = record.field(&self.field);
        match value.as_text() {
            Some(agent) if self.registry.matches(agent) => Outcome::Crawler,
            Some(_) => Outcome::NonCrawler,
            None => {
                tracing::trace!(
                    field = %self.field,
                    kind = value.kind(),
                    "field not matchable, treating as non-crawler"
                );
                Outcome::NonCrawler
            }
        }
    }

    /// 입력이 끝날 때까지 분류하여 싱크에 기록합니다.
    ///
    /// # Errors
    /// - 입력을 읽을 수 없는 경우
    /// - 싱크 쓰기에 실패한 경우 (즉시 중단, 재시도 없음)
    pub fn run<R, W>(
        &self,
        mut input: R,
        sinks: &mut Sinks<W>,
    ) -> Result<StreamSummary, ClassifierError>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = StreamSummary::default();
        let mut buf = Vec::with_capacity(4096);

        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .map_err(ClassifierError::Input)?;
            if read == 0 {
                break;
            }

            let line = strip_line_ending(&buf);
            let outcome = self.classify(line);
            tracing::trace!(%outcome, bytes = line.len(), "line classified");
            sinks.write_line(outcome, line)?;
            summary.record(outcome);
        }

        sinks.flush()?;

        tracing::info!(
            field = %self.field,
            total = summary.total(),
            crawler = summary.crawler,
            non_crawler = summary.non_crawler,
            unparsable = summary.unparsable,
            "input exhausted"
        );

        Ok(summary)
    }
}

/// 레지스트리와 필드명으로 스트림 전체를 분류합니다.
pub fn classify_stream<R, W>(
    registry: &PatternRegistry,
    field: &str,
    input: R,
    sinks: &mut Sinks<W>,
) -> Result<StreamSummary, ClassifierError>
where
    R: BufRead,
    W: Write,
{
    Classifier::new(registry, field).run(input, sinks)
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}
