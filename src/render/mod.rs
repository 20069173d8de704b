//! Rendering core: escaping, deferred substitution, highlighting, templates.
//!
//! Every string that ends up in a page flows through exactly one escaper in
//! [`escape`]. The helpers here only ever assemble [`Html`] / [`JsonLd`]
//! values, so raw data cannot reach the output by accident.

pub mod escape;
pub mod highlight;
pub mod markdown;
pub mod placeholder;
pub mod template;

pub use escape::{Html, JsonLd, escape_html, escape_json_ld};
pub use highlight::highlight_python;
pub use markdown::markdown_to_html;
pub use template::{RenderContext, RenderError, TemplateCache};
