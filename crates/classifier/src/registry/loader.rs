//! 추가 패턴 로더 -- 사용자 패턴 파일을 디스크에서 읽습니다.
//!
//! 파일 형식은 한 줄에 정규식 하나입니다. 각 줄의 앞뒤 공백을 제거하고
//! 빈 줄은 건너뜁니다. 명시적으로 지정한 파일을 읽을 수 없으면
//! 경고 로그를 남기고 추가 패턴 없이 계속 진행합니다.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::ClassifierError;

const MAX_PATTERN_FILE_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// 문자열을 패턴 목록으로 분리합니다 (trim, 빈 줄 제외).
pub fn parse_pattern_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// 추가 패턴 파일 로더
pub struct PatternLoader;

impl PatternLoader {
    /// 사용할 추가 패턴 파일을 결정합니다.
    ///
    /// 명시적 경로가 있으면 존재 여부와 관계없이 그 경로를 사용합니다
    /// (없으면 [`load`](Self::load)에서 경고). 명시적 경로가 없으면
    /// 기본 파일이 존재할 때만 사용합니다.
    pub fn resolve(explicit: Option<&Path>, default: &Path) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None if default.is_file() => {
                tracing::debug!(path = %default.display(), "using default extra pattern file");
                Some(default.to_path_buf())
            }
            None => None,
        }
    }

    /// 리더에서 패턴을 한 줄씩 읽습니다.
    ///
    /// UTF-8이 아닌 줄은 경고를 남기고 건너뛰며 나머지 줄은 그대로 사용합니다.
    pub fn read<R: BufRead>(mut reader: R) -> std::io::Result<Vec<String>> {
        let mut patterns = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(
                        line = line_no,
                        error = %e,
                        "skipping extra pattern line that is not valid UTF-8"
                    );
                    continue;
                }
            };
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                patterns.push(trimmed.to_owned());
            }
        }
        Ok(patterns)
    }

    /// 패턴 파일을 읽습니다.
    ///
    /// # Errors
    /// - 파일이 없거나 읽을 수 없는 경우
    /// - 파일 크기가 `MAX_PATTERN_FILE_SIZE`를 초과하는 경우
    pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<String>, ClassifierError> {
        let path = path.as_ref();
        let source_err = |reason: String| ClassifierError::PatternSource {
            path: path.display().to_string(),
            reason,
        };

        let file = File::open(path).map_err(|e| source_err(format!("failed to open: {e}")))?;

        let metadata = file
            .metadata()
            .map_err(|e| source_err(format!("failed to read file metadata: {e}")))?;
        if metadata.len() > MAX_PATTERN_FILE_SIZE {
            return Err(source_err(format!(
                "file too large: {} bytes (max: {MAX_PATTERN_FILE_SIZE})",
                metadata.len()
            )));
        }

        Self::read(BufReader::new(file)).map_err(|e| source_err(format!("failed to read: {e}")))
    }

    /// 패턴 파일을 읽되, 실패하면 경고를 남기고 빈 목록을 반환합니다.
    pub fn load(path: impl AsRef<Path>) -> Vec<String> {
        let path = path.as_ref();
        match Self::load_file(path) {
            Ok(patterns) => {
                tracing::info!(
                    path = %path.display(),
                    count = patterns.len(),
                    "loaded extra crawler patterns"
                );
                patterns
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to load extra crawler patterns, continuing without them"
                );
                Vec::new()
            }
        }
    }
}
