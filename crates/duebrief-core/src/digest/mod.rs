//! Digest pipeline: classification, project resolution, summarization and
//! rendering. Everything in here is pure and synchronous.

mod classify;
mod render;
mod resolve;
mod summarize;

pub use classify::{Bucket, LookaheadWindow, classify};
pub use render::{
    Document, NO_TASKS_TODAY, NO_UPCOMING_TASKS, TITLE, TODAY_HEADING, escape_html, render,
    task_line, upcoming_heading,
};
pub use resolve::{NO_PROJECT, ProjectIndex, resolve};
pub use summarize::summarize;
