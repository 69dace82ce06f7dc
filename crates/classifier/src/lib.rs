//! crawlsift 분류기 -- 크롤러 패턴 레지스트리와 스트리밍 레코드 분류
//!
//! 줄 단위 JSON 접근 로그를 읽어 user-agent 필드를 크롤러 패턴과 비교하고,
//! 각 라인을 크롤러 / 비크롤러 / 파싱 불가 중 정확히 하나의 싱크로 보냅니다.
//!
//! # 아키텍처
//!
//! ```text
//! input --> Record::parse --> FieldValue --> PatternRegistry::matches
//!                |                                  |
//!                v                                  v
//!           error sink                 crawler / non-crawler sink
//! ```
//!
//! # 모듈 구성
//!
//! - [`registry`]: 기본 규칙, 허용 목록, 추가 패턴으로 구성되는 활성 규칙 집합
//! - [`record`]: JSON 레코드 파싱과 필드 조회
//! - [`stream`]: 라인 단위 분류 루프와 처리 요약
//! - [`sink`]: 출력 대상 열기와 결과별 싱크
//! - [`error`]: 분류기 에러 타입

pub mod error;
pub mod record;
pub mod registry;
pub mod sink;
pub mod stream;

pub use error::ClassifierError;
pub use record::{FieldValue, Record, RecordError};
pub use registry::{PatternLoader, PatternRegistry, PatternRegistryBuilder};
pub use sink::{Sinks, open_destination, open_input};
pub use stream::{Classifier, StreamSummary, classify_stream};
