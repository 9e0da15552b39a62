//! Generation orchestrator and index assembler
//!
//! Drives the whole pipeline for a fixed allow-list of schema names: load,
//! sanitize, annotate, compile, then commit every declaration file plus an
//! aggregate index module in one pass. Compilation of all targets happens
//! before anything is written, so a failure anywhere leaves no output
//! behind; rerunning the pipeline is the recovery path.

use std::fs;
use std::path::Path;

use crate::catalog::{load_json, SchemaRegistry};
use crate::compile::SchemaCompiler;
use crate::error::{Result, TypegenError};
use crate::schema::SchemaNode;
use crate::transform::{annotate_definition_titles, sanitize_defaults};

/// The schemas the pipeline generates types for. Registry entries outside
/// this list are skipped silently; so are listed names the registry does
/// not know.
pub const TARGET_SCHEMAS: &[&str] = &[
    "camelYamlDsl",
    "Integration",
    "Kamelet",
    "KameletBinding",
    "Pipe",
];

/// The hand-maintained base type module, always re-exported first
pub const BOOTSTRAP_MODULE: &str = "catalog-index";

/// Declaration file of the bootstrap module, preserved across runs
pub const BOOTSTRAP_DECLARATION_FILE: &str = "catalog-index.d.ts";

/// One compiled schema: a name and its declaration source
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    pub name: String,
    pub source: String,
}

/// Orchestrates generation over an allow-list of schema names
pub struct Generator<'a> {
    compiler: &'a dyn SchemaCompiler,
    targets: &'a [&'a str],
}

impl<'a> Generator<'a> {
    /// Generator over the fixed [`TARGET_SCHEMAS`] allow-list
    pub fn new(compiler: &'a dyn SchemaCompiler) -> Self {
        Self {
            compiler,
            targets: TARGET_SCHEMAS,
        }
    }

    /// Generator over a custom allow-list (used by tests)
    pub fn with_targets(compiler: &'a dyn SchemaCompiler, targets: &'a [&'a str]) -> Self {
        Self { compiler, targets }
    }

    /// Run the pipeline: compile every allow-listed schema present in the
    /// registry, then write one declaration file per unit and the
    /// aggregate index to `out_dir`. Returns the generated names in
    /// allow-list order.
    pub fn run(
        &self,
        registry: &SchemaRegistry,
        base_dir: &Path,
        out_dir: &Path,
    ) -> Result<Vec<String>> {
        let units = self.compile_all(registry, base_dir)?;

        prepare_output_dir(out_dir)?;
        let mut exported = Vec::with_capacity(units.len());
        for unit in &units {
            let out_file = out_dir.join(format!("{}.d.ts", unit.name));
            fs::write(&out_file, &unit.source)?;
            tracing::info!(name = %unit.name, file = %out_file.display(), "wrote declarations");
            exported.push(unit.name.clone());
        }
        write_index(out_dir, &exported)?;
        Ok(exported)
    }

    /// Compile every target present in both the allow-list and the
    /// registry, in allow-list order, without writing anything.
    pub fn compile_all(
        &self,
        registry: &SchemaRegistry,
        base_dir: &Path,
    ) -> Result<Vec<GeneratedUnit>> {
        let mut units = Vec::new();
        for &name in self.targets {
            let Some(entry) = registry.get(name) else {
                tracing::debug!(name, "target not present in registry, skipping");
                continue;
            };

            let path = base_dir.join(&entry.file);
            let mut schema: SchemaNode = load_json(&path).map_err(|err| match err {
                TypegenError::FileNotFound { path } => TypegenError::SchemaNotFound {
                    name: name.to_string(),
                    path,
                },
                other => other,
            })?;

            let fixes = sanitize_defaults(&mut schema);
            if !fixes.is_empty() {
                tracing::info!(name, count = fixes.len(), "coerced mismatched default values");
            }
            let titles = annotate_definition_titles(&mut schema);
            if !titles.is_empty() {
                tracing::info!(name, count = titles.len(), "assigned definition titles");
            }

            let source = self.compiler.compile(&schema, name)?;
            units.push(GeneratedUnit {
                name: name.to_string(),
                source,
            });
        }
        Ok(units)
    }
}

/// Create the output directory and clear previous generation products,
/// keeping the hand-maintained bootstrap declaration file.
pub fn prepare_output_dir(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;
    for entry in fs::read_dir(out_dir)? {
        let entry = entry?;
        if entry.file_name() == BOOTSTRAP_DECLARATION_FILE {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// One re-export line per module, bootstrap entry first, then the
/// generated names in the order they were produced.
pub fn assemble_index(names: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("export * from './{}';\n", BOOTSTRAP_MODULE));
    for name in names {
        out.push_str(&format!("export * from './{}';\n", name));
    }
    out
}

/// Write the aggregate index module to `out_dir/index.ts`
pub fn write_index(out_dir: &Path, names: &[String]) -> Result<()> {
    fs::write(out_dir.join("index.ts"), assemble_index(names))?;
    Ok(())
}
