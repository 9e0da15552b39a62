//! Catalog Type Generation
//!
//! Prepares the machine-generated JSON schemas of the catalog (the YAML
//! routing dialect and its related document types) for conversion into
//! statically-typed declarations, and orchestrates that conversion into a
//! stable, importable module set.
//!
//! ## Pipeline
//!
//! ```text
//! catalog/index.json
//! └── resolve_registry()            root index -> per-distribution registry
//!     └── Generator::run()          allow-listed schemas, in order
//!         ├── sanitize_defaults()            repair type/default mismatches
//!         ├── annotate_definition_titles()   name anonymous definitions
//!         ├── SchemaCompiler::compile()      schema -> declaration source
//!         └── write_index()                  bootstrap + generated re-exports
//! ```
//!
//! Schema trees are mutated in place by the transform passes; each tree is
//! owned by a single generation run and discarded afterwards. All errors
//! are fatal for the run; rerunning the whole pipeline is the recovery
//! path.

pub mod catalog;
pub mod compile;
pub mod config;
pub mod copy;
pub mod error;
pub mod generate;
pub mod schema;
pub mod transform;
pub mod versions;

pub use catalog::{resolve_registry, CatalogIndexEntry, SchemaRef, SchemaRegistry};
pub use compile::{DeclarationCompiler, SchemaCompiler};
pub use config::TypegenConfig;
pub use copy::copy_catalog;
pub use error::{Result, TypegenError};
pub use generate::{
    assemble_index, GeneratedUnit, Generator, BOOTSTRAP_MODULE, TARGET_SCHEMAS,
};
pub use schema::{InstanceType, Items, SchemaNode, TypeKeyword};
pub use transform::{annotate_definition_titles, sanitize_defaults, DefaultFix, TitleFix};
pub use versions::{Runtime, KAMELETS_VERSION};
