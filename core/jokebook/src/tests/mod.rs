//! ユースケース・画面ループのテスト（ポートはテスト用のスタブを注入）

mod wiring_tests;
