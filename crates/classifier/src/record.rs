//! JSON 레코드 파싱 및 필드 추출
//!
//! 입력 한 줄을 임의의 키/값 객체로 파싱하고, 설정된 필드를
//! [`FieldValue`] 합 타입으로 꺼냅니다. 문자열 값만 패턴 매칭 대상이며
//! 숫자나 중첩 구조를 문자열로 강제 변환하지 않습니다.
//!
//! - 최상위 `null`은 필드가 하나도 없는 객체로 취급합니다
//! - 잘못된 UTF-8 바이트는 U+FFFD로 치환한 뒤 파싱합니다 (원본 라인은 그대로 기록됨)

use serde_json::{Map, Value};

/// 레코드 파싱 실패
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// JSON 문법 오류 (잘린 입력, 치환 후에도 JSON이 아닌 바이트 등)
    #[error("invalid json at line {line} column {column}: {reason}")]
    Syntax {
        line: usize,
        column: usize,
        reason: String,
    },

    /// 최상위 값이 객체가 아님
    #[error("expected JSON object at top level, found {found}")]
    NotAnObject { found: &'static str },
}

/// 필드 조회 결과
///
/// `Text`만 매칭 가능한 값입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number,
    Bool,
    Null,
    Object,
    List,
    Missing,
}

impl<'a> FieldValue<'a> {
    /// 객체에서 최상위 키로 필드를 조회합니다.
    pub fn lookup(object: &'a Map<String, Value>, field: &str) -> Self {
        match object.get(field) {
            None => Self::Missing,
            Some(Value::String(s)) => Self::Text(s.as_str()),
            Some(Value::Number(_)) => Self::Number,
            Some(Value::Bool(_)) => Self::Bool,
            Some(Value::Null) => Self::Null,
            Some(Value::Object(_)) => Self::Object,
            Some(Value::Array(_)) => Self::List,
        }
    }

    /// 문자열 값이면 그 내용을 반환합니다.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// 로그용 타입 이름
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Null => "null",
            Self::Object => "object",
            Self::List => "array",
            Self::Missing => "missing",
        }
    }
}

/// 파싱된 레코드
///
/// 한 줄을 처리하는 동안에만 존재합니다.
#[derive(Debug)]
pub struct Record {
    object: Map<String, Value>,
}

impl Record {
    /// 원본 바이트를 JSON 객체로 파싱합니다.
    pub fn parse(raw: &[u8]) -> Result<Self, RecordError> {
        let parsed: Result<Value, _> = match std::str::from_utf8(raw) {
            Ok(text) => serde_json::from_str(text),
            Err(_) => serde_json::from_str(&String::from_utf8_lossy(raw)),
        };
        let value = parsed.map_err(|e| RecordError::Syntax {
            line: e.line(),
            column: e.column(),
            reason: e.to_string(),
        })?;

        match value {
            Value::Object(object) => Ok(Self { object }),
            Value::Null => Ok(Self { object: Map::new() }),
            other => Err(RecordError::NotAnObject {
                found: value_kind(&other),
            }),
        }
    }

    /// 필드를 조회합니다.
    pub fn field(&self, name: &str) -> FieldValue<'_> {
        FieldValue::lookup(&self.object, name)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
