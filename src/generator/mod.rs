//! Machine-readable outputs that sit beside the rendered pages.

pub mod sitemap;
