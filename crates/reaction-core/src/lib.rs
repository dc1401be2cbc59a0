//! reaction-core
//!
//! Reaction: 成功/失敗とメッセージを持つ不変の値型。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（disposition, reaction, errors）
//!
//! 不正な disposition は型で表現できないため、エラーが起きるのは生の整数コードから
//! 構築する `Reaction::from_raw` とデシリアライズのときだけです。

pub mod domain;

pub use domain::{Disposition, InvalidDispositionError, PartialReaction, Reaction};
