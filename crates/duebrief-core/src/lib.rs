//! duebrief-core
//!
//! Core building blocks for the due-task email digest.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, task, project, snapshot, summary, due, errors）
//! - **digest**: 純粋なパイプライン（classify, resolve, summarize, render）
//! - **ports**: 抽象化レイヤー（TaskSource, Mailer, Clock, IdGenerator）
//! - **app**: アプリケーションロジック（config, builder, orchestrator）
//! - **impls**: 実装（StaticTaskSource, RecordingMailer など開発用）

pub mod app;
pub mod digest;
pub mod domain;
pub mod impls;
pub mod ports;
