//! API設定の定数定義

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost のポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// ページサイズ未指定時の件数
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// ページサイズの上限
///
/// これを超える `size` は上限値に丸められる。
pub const MAX_PAGE_SIZE: u32 = 100;

/// データベース接続プールの最大接続数
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
