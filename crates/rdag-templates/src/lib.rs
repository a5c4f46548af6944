//! RDAG Template Library
//!
//! This crate maps a [`Unit`] (a unit kind plus field values) to text. The
//! templates are embedded at compile time via `include_dir!` and rendered
//! with MiniJinja, but only as substitution: templates contain `{{ name }}`
//! placeholders and nothing else, and the engine never looks at what the
//! values mean.
//!
//! ## Template naming
//!
//! A template's logical name is its file name in `templates/` with the
//! `.jinja` suffix removed:
//!
//! - `templates/runners.hh.jinja`       -> `runners.hh`
//! - `templates/dispatch_case.cc.jinja` -> `dispatch_case.cc`
//!
//! ## Guarantees
//!
//! - A unit must supply exactly the placeholders its kind declares; missing
//!   or extra fields are rejected before rendering.
//! - Rendering is byte-for-byte deterministic and keeps trailing newlines.
//! - All templates are loaded once into a global, immutable `Environment`.

#![forbid(unsafe_code)]

mod units;

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, Error as MiniJinjaError, UndefinedBehavior};
use once_cell::sync::Lazy;
use rdag_core::{log_error, log_trace};
use std::path::Path;
use thiserror::Error;

pub use units::{Unit, UnitKind};

/// Embedded templates directory (compile-time inclusion; no runtime filesystem access).
static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Global MiniJinja environment with all embedded templates preloaded.
static GLOBAL_ENV: Lazy<Environment<'static>> = Lazy::new(build_environment);

/// Errors produced while rendering a unit.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unit {kind} is missing placeholder '{placeholder}'")]
    MissingPlaceholder {
        kind: UnitKind,
        placeholder: &'static str,
    },

    #[error("Unit {kind} does not take placeholder '{placeholder}'")]
    UnexpectedPlaceholder {
        kind: UnitKind,
        placeholder: &'static str,
    },

    #[error("Template error in {kind}: {source}")]
    Template {
        kind: UnitKind,
        #[source]
        source: MiniJinjaError,
    },
}

/// Render a unit with its kind's template.
///
/// # Errors
/// Returns an error if the unit's fields differ from its kind's placeholder
/// set, or if the template is missing or fails to render.
pub fn render(unit: &Unit) -> Result<String, RenderError> {
    check_fields(unit)?;
    let kind = unit.kind();
    let wrap = |source| RenderError::Template { kind, source };
    let tmpl = GLOBAL_ENV.get_template(kind.template_name()).map_err(wrap)?;
    let text = tmpl.render(unit.fields()).map_err(wrap)?;
    log_trace!("templates", "Rendered {} ({} bytes)", kind, text.len());
    Ok(text)
}

/// Render a sequence of units and concatenate the results in order.
pub fn render_all<'a, I>(units: I) -> Result<String, RenderError>
where
    I: IntoIterator<Item = &'a Unit>,
{
    let mut out = String::new();
    for unit in units {
        out.push_str(&render(unit)?);
    }
    Ok(out)
}

/// List all embedded templates.
///
/// Returns logical template names (see crate-level docs), sorted and deduplicated.
pub fn list_templates() -> Vec<String> {
    let mut names: Vec<String> = TEMPLATES_DIR
        .files()
        .map(|f| template_key(f.path()))
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

fn check_fields(unit: &Unit) -> Result<(), RenderError> {
    let expected = unit.kind().placeholders();
    for &placeholder in expected {
        if !unit.fields().contains_key(placeholder) {
            return Err(RenderError::MissingPlaceholder {
                kind: unit.kind(),
                placeholder,
            });
        }
    }
    for &placeholder in unit.fields().keys() {
        if !expected.contains(&placeholder) {
            return Err(RenderError::UnexpectedPlaceholder {
                kind: unit.kind(),
                placeholder,
            });
        }
    }
    Ok(())
}

fn build_environment() -> Environment<'static> {
    let mut env = configured_env();

    for file in TEMPLATES_DIR.files() {
        let path = file.path();
        let name = template_key(path);

        let source = match std::str::from_utf8(file.contents()) {
            Ok(s) => s,
            Err(e) => {
                log_error!(
                    "templates",
                    "Template is not valid UTF-8: name={:?} path={:?} err={}",
                    name,
                    path,
                    e
                );
                continue;
            }
        };

        // Leak the name to `'static` so MiniJinja's Environment can store the reference.
        let name_static: &'static str = Box::leak(name.into_boxed_str());

        // Parse failures are logged and skipped; rendering that kind then fails loudly.
        if let Err(e) = env.add_template(name_static, source) {
            log_error!(
                "templates",
                "Failed to register template: path={:?} err={}",
                path,
                e
            );
        }
    }

    env
}

fn configured_env() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}

/// Derive a logical template key from an embedded file path.
fn template_key(path: &Path) -> String {
    let raw = path.to_string_lossy();
    match raw.strip_suffix(".jinja") {
        Some(stripped) => stripped.to_owned(),
        None => raw.into_owned(),
    }
}
