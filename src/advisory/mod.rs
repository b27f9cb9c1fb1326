//! Advisory Module - Findings and recommendations formatting.
//!
//! Turns an evaluation result into display-ready text: descriptive
//! findings with severity levels, prescriptive recommendations, and the
//! `{placeholder}` contextualization step report pages apply before
//! rendering.
//!
//! # Components
//!
//! - `Finding` / `build_top_findings` / `build_recommendations` - Catalog projection
//! - `TemplateContext` / `contextualize_*` - Strict placeholder substitution

mod findings;
mod template;

pub use findings::{
    build_recommendations, build_top_findings, contextualize_findings,
    contextualize_recommendations, Finding,
};
pub use template::{render_template, validate_template, TemplateContext};
