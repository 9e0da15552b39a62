//! Schema transform passes
//!
//! The two in-place repairs applied to every schema tree before it is
//! handed to the compiler:
//!
//! - [`sanitize_defaults`]: coerces `default` values whose runtime kind
//!   does not match the declared `type`
//! - [`annotate_definition_titles`]: names anonymous nested definitions so
//!   generated types get meaningful names
//!
//! Both passes mutate the tree through `&mut` and report what they changed
//! as plain records. The records are observational only and never feed back
//! into the tree.

pub mod defaults;
pub mod titles;

pub use defaults::{sanitize_defaults, DefaultFix};
pub use titles::{annotate_definition_titles, TitleFix};
