//! サーバー設定の定数定義

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost の標準ポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// デフォルトの辞書プリセット名
///
/// 教科書テキスト向けの軽量な IPAdic をデフォルトとして使用。
pub const DEFAULT_PRESET_DICT: &str = "ipadic";
