// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod time;
pub mod user_repo;
pub mod util;

// 時刻関連
pub use time::fixed_now;

// セキュリティ関連
pub use security::{DummyPasswordHasher, StrictPasswordHasher};

// ユーティリティ関連
pub use util::{DummyClock, DummySlug};

// ユーザーリポジトリ
pub use user_repo::InMemoryUserRepo;
