//! # categories
//!
//! Keyword-triggered category registry for prompt rewriting.
//!
//! A [`CategoryRule`] maps a category name to a keyword list, a rewrite
//! [`Template`], and a description. The [`CategoryRegistry`] holds rules in a
//! fixed order and detects the category of free text by case-insensitive
//! substring containment; the first rule (in declared order) whose any keyword
//! matches wins. Overlaps are resolved purely by registry order.
//!
//! The registry is immutable after construction and shared read-only across
//! requests.

mod registry;
mod template;

pub use registry::{CategoryRegistry, CategoryRule, Detection};
pub use template::{Template, TemplateError};
