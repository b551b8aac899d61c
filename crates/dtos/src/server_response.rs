//! # サーバーサイド処理レスポンス
//!
//! DataTables サーバーサイド処理のレスポンス型。
//! クライアントのテーブルウィジェットが行データ・総件数・
//! ページネーション状態を描画するためのワイヤ契約を表現する。
//!
//! ## JSON 形式
//!
//! ```json
//! {
//!   "draw": 5,
//!   "totalRecords": 100,
//!   "totalFilteredRecords": 20,
//!   "data": [...],
//!   "error": null,
//!   "continuationToken": "opaque-cursor-string"
//! }
//! ```
//!
//! `continuationToken` が `null` の場合は「次ページなし」
//! またはオフセットベースのバックエンドを意味する。
//! null の省略ポリシーはホストサービス側の設定に委ねるため、
//! この型は常に `null` を明示的にシリアライズする。

use serde::{Deserialize, Serialize};

/// サーバーサイド処理レスポンス
///
/// 成功・失敗のどちらか一方のみを表す（success XOR failure）。
/// この不変条件は型構造では強制されず、2 つのファクトリ関数
/// （[`ServerResponse::success`] / [`ServerResponse::fail`]）の
/// 使い分けによって構築時にのみ保証される。
/// ダウンストリームのクライアントは `error != null` で失敗を判定するため、
/// フラットなワイヤ形状を互換性のために維持する。
///
/// 行の構造はこの契約の外部にあるため、行型 `T` はジェネリック。
/// 型パラメータのデフォルトは [`serde_json::Value`] で、
/// 任意の行形状をそのまま扱える。
///
/// ## 使用例
///
/// ```
/// use datatables_dtos::ServerResponse;
///
/// let rows = vec![serde_json::json!({ "id": 1 })];
/// let response = ServerResponse::success(5, 100, 20, rows, None);
///
/// assert_eq!(response.draw, 5);
/// assert!(response.error.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ServerResponse<T = serde_json::Value> {
    /// クライアントが送信したリクエスト連番のエコー。
    /// クライアントは古い・順序違いのレスポンスをこの値で破棄する。
    pub draw:                   u64,
    /// フィルタ適用前の総レコード件数（失敗レスポンスでは 0）
    pub total_records:          u64,
    /// フィルタ適用後のレコード件数（失敗レスポンスでは 0）
    pub total_filtered_records: u64,
    /// 描画対象の行データ（失敗レスポンスでは `None`）
    pub data:                   Option<Vec<T>>,
    /// 失敗時のエラーメッセージ（成功レスポンスでは `None`）
    pub error:                  Option<String>,
    /// カーソルベースのバックエンド用の不透明トークン。
    /// クライアントは次のリクエストでそのまま送り返す。
    pub continuation_token:     Option<String>,
}

impl<T> ServerResponse<T> {
    /// 成功レスポンスを作成する
    ///
    /// `error` は `None`、その他のフィールドは与えられた値のまま設定される。
    /// `data` の内部構造は検証もコピーもしない。構築は失敗しない。
    pub fn success(
        draw: u64,
        total_records: u64,
        total_filtered_records: u64,
        data: Vec<T>,
        continuation_token: Option<String>,
    ) -> Self {
        Self {
            draw,
            total_records,
            total_filtered_records,
            data: Some(data),
            error: None,
            continuation_token,
        }
    }

    /// 失敗レスポンスを作成する
    ///
    /// `error` にメッセージ、`draw` に与えられた値を設定し、
    /// 件数はゼロ、`data` と `continuation_token` は `None` になる。
    /// 構築は失敗しない。
    pub fn fail(draw: u64, error_message: impl Into<String>) -> Self {
        Self {
            draw,
            total_records: 0,
            total_filtered_records: 0,
            data: None,
            error: Some(error_message.into()),
            continuation_token: None,
        }
    }
}


#[cfg(all(test, feature = "openapi"))]
mod openapi_tests {
    use utoipa::PartialSchema;

    use super::*;

    #[test]
    fn test_server_responseにtoschemaが実装されている() {
        let schema = ServerResponse::<String>::schema();
        let utoipa::openapi::RefOr::T(schema) = schema else {
            panic!("expected inline schema, got ref");
        };
        let utoipa::openapi::Schema::Object(obj) = schema else {
            panic!("expected object schema");
        };
        // ワイヤ形式のフィールド名（camelCase）がスキーマに含まれていること
        assert!(obj.properties.contains_key("draw"));
        assert!(obj.properties.contains_key("totalRecords"));
        assert!(obj.properties.contains_key("totalFilteredRecords"));
        assert!(obj.properties.contains_key("data"));
        assert!(obj.properties.contains_key("error"));
        assert!(obj.properties.contains_key("continuationToken"));
    }
}
