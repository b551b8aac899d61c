//! # DataTables サーバーサイド処理 DTO
//!
//! DataTables のサーバーサイド処理プロトコルで使用される
//! JSON レスポンス契約を提供する。
//!
//! ## 設計方針
//!
//! - 純粋なデータ構造のみを配置（`Serialize` / `Deserialize` のみ）
//! - バリデーションロジックを含まない（件数や行データの正しさは呼び出し側の責務）
//! - トランスポート・永続化・クエリ実行は持たない（ホストサービスの責務）
//! - 外部クレートへの依存は最小限に抑える

pub mod server_response;

pub use server_response::ServerResponse;
