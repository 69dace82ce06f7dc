//! 크롤러 패턴 레지스트리 -- 활성 정규식 규칙 집합
//!
//! 레지스트리는 시작 시 한 번 구성되고 이후에는 읽기 전용입니다.
//!
//! # 구성 순서
//! 1. 기본 규칙 목록에서 허용 목록(override)에 정확히 일치하는 패턴을 제외
//! 2. 남은 패턴을 순서대로 컴파일
//! 3. 추가 패턴을 컴파일하여 뒤에 덧붙임 (허용 목록의 영향을 받지 않음)
//!
//! 어느 단계든 컴파일에 실패하면 레지스트리 구성 전체가 실패합니다.
//!
//! # 아키텍처
//! - [`PatternRegistry`]: 컴파일된 규칙 목록과 매칭 질의
//! - [`PatternRegistryBuilder`]: 입력 목록 조합 및 컴파일
//! - [`builtin`]: 내장 기본 규칙과 허용 목록
//! - [`loader`]: 추가 패턴 파일 로딩

pub mod builtin;
pub mod loader;

pub use builtin::BaseRule;
pub use loader::PatternLoader;

use std::collections::HashSet;
use std::io::BufRead;

use regex::Regex;

use crate::error::ClassifierError;

/// 활성 크롤러 패턴 집합
///
/// 규칙의 식별자는 패턴 원문이며, 이름이나 우선순위 같은 메타데이터는 없습니다.
/// 구성 후에는 불변이므로 여러 스레드에서 동시에 조회해도 안전합니다.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    rules: Vec<Regex>,
}

impl PatternRegistry {
    /// 빌더를 생성합니다 (내장 기본 규칙과 허용 목록 사용).
    pub fn builder() -> PatternRegistryBuilder {
        PatternRegistryBuilder::new()
    }

    /// 내장 데이터만으로 레지스트리를 구성합니다.
    pub fn builtin() -> Result<Self, ClassifierError> {
        PatternRegistryBuilder::new().build()
    }

    /// 후보 문자열이 하나 이상의 활성 규칙에 매칭되는지 확인합니다.
    ///
    /// 매칭은 앵커 없는 검색이므로 패턴이 문자열 어디에 나타나도 됩니다.
    /// 첫 매칭에서 바로 반환합니다.
    pub fn matches(&self, candidate: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(candidate))
    }

    /// 활성 규칙 수
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// 활성 규칙이 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 활성 규칙의 패턴 원문 (구성 순서)
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Regex::as_str)
    }
}

/// 레지스트리 빌더
///
/// # 사용 예시
/// ```
/// use crawlsift_classifier::PatternRegistry;
///
/// let registry = PatternRegistry::builder()
///     .extra_patterns(["MyInternalBot"])
///     .build()?;
///
/// assert!(registry.matches("Mozilla/5.0 (compatible; Googlebot/2.1)"));
/// assert!(registry.matches("MyInternalBot/1.0"));
/// assert!(!registry.matches("Mozilla/5.0 (Macintosh)"));
/// # Ok::<(), crawlsift_classifier::ClassifierError>(())
/// ```
#[derive(Debug, Default)]
pub struct PatternRegistryBuilder {
    /// 기본 규칙 (`None`이면 내장 목록)
    base: Option<Vec<String>>,
    /// 허용 목록 (`None`이면 내장 목록)
    overrides: Option<Vec<String>>,
    /// 추가 규칙 (항상 뒤에 덧붙임)
    extra: Vec<String>,
}

impl PatternRegistryBuilder {
    /// 내장 기본 규칙과 허용 목록을 사용하는 빌더를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 기본 규칙 목록을 교체합니다.
    pub fn base_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// 허용 목록을 교체합니다.
    pub fn overrides<I, S>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides = Some(overrides.into_iter().map(Into::into).collect());
        self
    }

    /// 추가 패턴을 덧붙입니다 (trim 후 빈 문자열은 무시).
    pub fn extra_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra.extend(
            patterns
                .into_iter()
                .map(|p| p.as_ref().trim().to_owned())
                .filter(|p| !p.is_empty()),
        );
        self
    }

    /// 리더에서 추가 패턴을 한 줄씩 읽어 덧붙입니다.
    pub fn extra_patterns_from_reader<R: BufRead>(
        self,
        reader: R,
    ) -> Result<Self, ClassifierError> {
        let patterns = PatternLoader::read(reader).map_err(|e| ClassifierError::PatternSource {
            path: "<reader>".to_owned(),
            reason: e.to_string(),
        })?;
        Ok(self.extra_patterns(patterns))
    }

    /// 레지스트리를 구성합니다.
    ///
    /// # Errors
    /// - 내장 데이터를 파싱할 수 없는 경우
    /// - 어떤 패턴이든 정규식으로 컴파일할 수 없는 경우
    pub fn build(self) -> Result<PatternRegistry, ClassifierError> {
        let base = match self.base {
            Some(base) => base,
            None => builtin::base_patterns()?,
        };
        let overrides = self.overrides.unwrap_or_else(builtin::allowlist);
        let suppressed: HashSet<&str> = overrides.iter().map(String::as_str).collect();

        let mut rules = Vec::with_capacity(base.len() + self.extra.len());
        let mut suppressed_count = 0usize;

        for pattern in &base {
            if suppressed.contains(pattern.as_str()) {
                suppressed_count += 1;
                tracing::debug!(pattern = %pattern, "base pattern suppressed by override");
                continue;
            }
            rules.push(compile(pattern)?);
        }

        for pattern in &self.extra {
            rules.push(compile(pattern)?);
        }

        if suppressed_count < suppressed.len() {
            tracing::debug!(
                overrides = suppressed.len(),
                applied = suppressed_count,
                "some overrides match no base pattern"
            );
        }

        tracing::info!(
            base = base.len(),
            suppressed = suppressed_count,
            extra = self.extra.len(),
            active = rules.len(),
            "crawler pattern registry built"
        );

        Ok(PatternRegistry { rules })
    }
}

fn compile(pattern: &str) -> Result<Regex, ClassifierError> {
    Regex::new(pattern).map_err(|e| ClassifierError::InvalidPattern {
        pattern: pattern.to_owned(),
        reason: e.to_string(),
    })
}
