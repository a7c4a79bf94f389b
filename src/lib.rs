//! portfolio-admin
//!
//! ポートフォリオのプロジェクト一覧をローカル（データディレクトリ）または
//! リモートJSONドキュメント上で管理するCLI。

pub mod admin;
pub mod cli;
pub mod config;
pub mod error;
pub mod file_store;
pub mod http;
pub mod logging;
pub mod page;
