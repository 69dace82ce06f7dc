//! 내장 패턴 데이터
//!
//! 바이너리에 포함되는 두 가지 데이터를 제공합니다.
//!
//! - `crawler-user-agents.json`: 기본 크롤러 규칙 목록. 공개 crawler-user-agents
//!   프로젝트와 같은 형식(`pattern`, `url`, `addition_date`, `instances`)을 사용합니다.
//! - `agent-allowlist.txt`: 기본 목록에서 제외할 패턴 문자열 (한 줄에 하나)

use serde::Deserialize;

use super::loader::parse_pattern_lines;
use crate::error::ClassifierError;

const CRAWLER_USER_AGENTS_NAME: &str = "crawler-user-agents.json";
const CRAWLER_USER_AGENTS: &str = include_str!("../../data/crawler-user-agents.json");
const AGENT_ALLOWLIST: &str = include_str!("../../data/agent-allowlist.txt");

/// 기본 크롤러 규칙
///
/// 매칭에는 `pattern`만 사용되며 나머지 필드는 참고용 메타데이터입니다.
#[derive(Debug, Clone, Deserialize)]
pub struct BaseRule {
    /// 정규식 패턴 원문 (규칙의 식별자이기도 함)
    pub pattern: String,
    /// 크롤러 설명 페이지
    #[serde(default)]
    pub url: Option<String>,
    /// 목록에 추가된 날짜
    #[serde(default)]
    pub addition_date: Option<String>,
    /// 패턴이 매칭해야 하는 실제 User-Agent 예시
    #[serde(default)]
    pub instances: Vec<String>,
}

/// 내장 기본 규칙 목록을 파싱합니다.
pub fn base_rules() -> Result<Vec<BaseRule>, ClassifierError> {
    serde_json::from_str(CRAWLER_USER_AGENTS).map_err(|e| ClassifierError::BuiltinData {
        name: CRAWLER_USER_AGENTS_NAME.to_owned(),
        reason: e.to_string(),
    })
}

/// 내장 기본 규칙의 패턴 문자열 목록 (원래 순서 유지)
pub fn base_patterns() -> Result<Vec<String>, ClassifierError> {
    Ok(base_rules()?.into_iter().map(|rule| rule.pattern).collect())
}

/// 내장 허용 목록 (기본 규칙에서 제외할 패턴 문자열)
pub fn allowlist() -> Vec<String> {
    parse_pattern_lines(AGENT_ALLOWLIST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn embedded_rules_parse() {
        let rules = base_rules().unwrap();
        assert!(rules.len() > 100);
        assert!(rules.iter().all(|r| !r.pattern.is_empty()));
    }

    #[test]
    fn every_embedded_pattern_compiles() {
        for rule in base_rules().unwrap() {
            assert!(
                Regex::new(&rule.pattern).is_ok(),
                "pattern does not compile: {}",
                rule.pattern
            );
        }
    }

    #[test]
    fn embedded_instances_match_their_pattern() {
        for rule in base_rules().unwrap() {
            let re = Regex::new(&rule.pattern).unwrap();
            for instance in &rule.instances {
                assert!(
                    re.is_match(instance),
                    "pattern {} does not match instance {instance}",
                    rule.pattern
                );
            }
        }
    }

    #[test]
    fn embedded_patterns_are_unique() {
        let patterns = base_patterns().unwrap();
        let unique: std::collections::HashSet<_> = patterns.iter().collect();
        assert_eq!(unique.len(), patterns.len());
    }

    #[test]
    fn allowlist_entries_name_real_base_patterns() {
        // 허용 목록은 정확한 문자열 비교로 적용되므로, 오타가 있으면 아무것도 제외하지 못함
        let patterns = base_patterns().unwrap();
        for entry in allowlist() {
            assert!(
                patterns.contains(&entry),
                "allowlist entry '{entry}' is not a base pattern"
            );
        }
    }

    #[test]
    fn allowlist_is_trimmed_and_non_empty() {
        let list = allowlist();
        assert!(!list.is_empty());
        assert!(list.iter().all(|e| !e.is_empty() && e.trim() == e));
    }
}
