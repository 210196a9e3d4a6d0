//! Display Name Value Object
//!
//! 表示名は画面表示専用のラベルで、ログインには使用されない。
//! ユーザー名のような一意性や予約語の制約は持たない。
//!
//! ## 設計方針
//! - Unicode 全般を許可（クリエイター名は多言語）
//! - NFKC正規化 → トリム → 検証 の順で処理
//! - 制御文字は拒否、内部の空白はそのまま保持
//!
//! ## 不変条件
//! - 長さ: 1〜60文字（正規化・トリム後）
//! - 制御文字を含まない

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for display name (in characters)
pub const DISPLAY_NAME_MAX_LENGTH: usize = 60;

/// Display name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new display name with normalization and validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let normalized: String = name.into().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(AppError::bad_input("Display name cannot be empty"));
        }

        if trimmed.chars().count() > DISPLAY_NAME_MAX_LENGTH {
            return Err(AppError::bad_input(format!(
                "Display name must be at most {} characters",
                DISPLAY_NAME_MAX_LENGTH
            )));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(AppError::bad_input(
                "Display name cannot contain control characters",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Rebuild from a stored value without re-validating
    pub fn from_stored(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the display name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_valid() {
        assert!(DisplayName::new("Alice").is_ok());
        assert!(DisplayName::new("山田 花子").is_ok());
        assert!(DisplayName::new("Jean-Luc").is_ok());
    }

    #[test]
    fn test_display_name_trimmed() {
        let name = DisplayName::new("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_display_name_invalid() {
        assert!(DisplayName::new("").is_err());
        assert!(DisplayName::new("   ").is_err());
        assert!(DisplayName::new("a\u{0007}b").is_err());
        assert!(DisplayName::new("x".repeat(61)).is_err());
    }

    #[test]
    fn test_display_name_nfkc_normalization() {
        // Full-width compatibility forms collapse to ASCII
        let name = DisplayName::new("Ａｌｉｃｅ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }
}
