//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum used across the app core.

use serde::Serialize;

/// エラー種別の列挙体
///
/// アプリコア全体で使用するエラー分類を定義します。
/// サーバーを持たない構成のため HTTP ステータスではなく、
/// 安定した機械可読コードとログレベル判定を提供します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.code(), "NOT_FOUND");
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力値が不正
    BadInput,
    /// 認証されていない（ゲスト状態での保護操作）
    NotAuthenticated,
    /// 値が見つからない
    NotFound,
    /// 永続ストレージが利用できない
    Storage,
    /// 保存済みの値が読み取れない（破損）
    Corrupted,
    /// 内部エラー
    Internal,
}

impl ErrorKind {
    /// 機械可読な安定コードを取得
    ///
    /// ## Returns
    /// SCREAMING_SNAKE_CASE の安定した識別子
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadInput.code(), "BAD_INPUT");
    /// assert_eq!(ErrorKind::Storage.code(), "STORAGE");
    /// ```
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorKind::BadInput => "BAD_INPUT",
            ErrorKind::NotAuthenticated => "NOT_AUTHENTICATED",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Storage => "STORAGE",
            ErrorKind::Corrupted => "CORRUPTED",
            ErrorKind::Internal => "INTERNAL",
        }
    }

    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadInput.as_str(), "Bad Input");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadInput => "Bad Input",
            ErrorKind::NotAuthenticated => "Not Authenticated",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Storage => "Storage Unavailable",
            ErrorKind::Corrupted => "Corrupted State",
            ErrorKind::Internal => "Internal Error",
        }
    }

    /// 環境・実装側の障害かどうかを判定
    ///
    /// ストレージ障害・破損・内部エラーは `true` を返します。
    /// これらのエラーは warn 以上でログに記録すべきです。
    #[inline]
    pub const fn is_fault(&self) -> bool {
        matches!(
            self,
            ErrorKind::Storage | ErrorKind::Corrupted | ErrorKind::Internal
        )
    }

    /// 利用者起因のエラーかどうかを判定
    ///
    /// 入力不正・未認証・未発見は `true` を返します。
    #[inline]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::BadInput | ErrorKind::NotAuthenticated | ErrorKind::NotFound
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ErrorKind::BadInput.code(), "BAD_INPUT");
        assert_eq!(ErrorKind::NotAuthenticated.code(), "NOT_AUTHENTICATED");
        assert_eq!(ErrorKind::NotFound.code(), "NOT_FOUND");
        assert_eq!(ErrorKind::Storage.code(), "STORAGE");
        assert_eq!(ErrorKind::Corrupted.code(), "CORRUPTED");
        assert_eq!(ErrorKind::Internal.code(), "INTERNAL");
    }

    #[test]
    fn test_is_fault() {
        assert!(!ErrorKind::BadInput.is_fault());
        assert!(!ErrorKind::NotFound.is_fault());
        assert!(ErrorKind::Storage.is_fault());
        assert!(ErrorKind::Corrupted.is_fault());
        assert!(ErrorKind::Internal.is_fault());
    }

    #[test]
    fn test_is_user_error() {
        assert!(ErrorKind::BadInput.is_user_error());
        assert!(ErrorKind::NotAuthenticated.is_user_error());
        assert!(!ErrorKind::Internal.is_user_error());
        assert!(!ErrorKind::Storage.is_user_error());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ErrorKind::Corrupted.to_string(), "Corrupted State");
        assert_eq!(ErrorKind::Storage.to_string(), "Storage Unavailable");
    }
}
