//! Rendering utilities for terminals and CI surfaces (console text, GitHub annotations).

#![forbid(unsafe_code)]

mod console;
mod gha;
mod palette;

#[cfg(test)]
mod test_support;

pub use console::{render_summary, render_text};
pub use gha::render_github_annotations;
pub use palette::{Palette, Style};
