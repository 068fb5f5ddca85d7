//! JSON Schema dialect translation for restricted structured-output backends.
//!
//! The structured-output API this workspace targets accepts only a fragment
//! of OpenAPI 3.0 schema semantics. This crate rewrites a general
//! JSON-Schema-shaped document into that restricted subset while preserving
//! the validation intent of the original: pseudo-typed enumerations are
//! retyped, unsupported constraints are dropped, null negation moves to the
//! `nullable` vocabulary, and stray array-level `required` keywords are
//! hoisted to the item schema where they belong.
//!
//! The rewrite is a total, pure function over an owned tree. Input the
//! rewrite does not recognize passes through unchanged; nothing is ever
//! rejected.
//!
//! ```
//! use arcimboldo_schema::normalize_value;
//! use serde_json::json;
//!
//! let schema = json!({"type": "enum", "enum": ["red", "green"]});
//! let normalized = normalize_value(&schema);
//! assert_eq!(normalized, json!({"type": "string", "enum": ["red", "green"]}));
//! ```

mod node;
mod normalize;

pub use node::{SchemaMap, SchemaNode};
pub use normalize::{normalize, normalize_value};
