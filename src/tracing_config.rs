//! Logging for tracking down a wrong Objective-C name.
//!
//! A bad name shows up late, as a Swift call site that does not compile or
//! a selector that silently differs from the hand-written header. The naming
//! rules report what they did under two targets:
//!
//! - `objcname_emitter::type_names`: one `trace` event per resolved type name
//! - `objcname_emitter::selectors`: `debug` when a selector segment is cut in
//!   half for lack of a shared prefix, `warn` when the labels do not match
//!   the parameter count
//!
//! `OBJCNAME_LOG` takes a normal filter directive. Setting it to an empty
//! string (or `names`) selects both targets at the levels above, which is
//! usually what a name mismatch needs. `OBJCNAME_LOG_FORMAT=json` emits one
//! object per event, handy for grepping a large generator run.
//!
//! ```bash
//! OBJCNAME_LOG=names <generator> 2> names.log
//! OBJCNAME_LOG="objcname_emitter::selectors=warn" OBJCNAME_LOG_FORMAT=json <generator>
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Target of the per-type events.
pub const TYPE_NAMES_TARGET: &str = "objcname_emitter::type_names";

/// Target of the selector split events.
pub const SELECTORS_TARGET: &str = "objcname_emitter::selectors";

/// Directive used when `OBJCNAME_LOG` is empty or `names`.
pub fn names_directive() -> String {
    format!("warn,{TYPE_NAMES_TARGET}=trace,{SELECTORS_TARGET}=debug")
}

/// How events are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event.
    Text,
    /// Indented by span via `tracing-tree`.
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a format name; anything unknown is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Filter directive for the given `OBJCNAME_LOG` / `RUST_LOG` values, or
/// `None` when logging stays off.
pub fn filter_directive(objcname_log: Option<&str>, rust_log: Option<&str>) -> Option<String> {
    match objcname_log.map(str::trim) {
        Some("" | "names") => Some(names_directive()),
        Some(directive) => Some(directive.to_string()),
        None => rust_log.map(str::to_string),
    }
}

/// Install a stderr subscriber if `OBJCNAME_LOG` or `RUST_LOG` asks for one.
///
/// An already installed subscriber (the embedding generator's) is kept.
pub fn init_tracing() {
    let objcname_log = std::env::var("OBJCNAME_LOG").ok();
    let rust_log = std::env::var("RUST_LOG").ok();
    let Some(directive) = filter_directive(objcname_log.as_deref(), rust_log.as_deref()) else {
        return;
    };
    let format = LogFormat::parse(&std::env::var("OBJCNAME_LOG_FORMAT").unwrap_or_default());

    let filter = EnvFilter::builder().parse_lossy(directive);
    let registry = Registry::default().with(filter);
    let installed = match format {
        LogFormat::Tree => registry
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
    };
    if installed.is_err() {
        tracing::debug!(?format, "keeping the existing tracing subscriber");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("xml"), LogFormat::Text);
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(None, None), None);
        assert_eq!(filter_directive(Some(""), None), Some(names_directive()));
        assert_eq!(filter_directive(Some("names"), Some("info")), Some(names_directive()));
        assert_eq!(
            filter_directive(Some("objcname_emitter::selectors=warn"), Some("info")).as_deref(),
            Some("objcname_emitter::selectors=warn")
        );
        assert_eq!(filter_directive(None, Some("debug")).as_deref(), Some("debug"));
    }

    #[test]
    fn test_names_directive_parses() {
        let directive = names_directive();
        assert!(directive.contains(TYPE_NAMES_TARGET));
        assert!(directive.contains(SELECTORS_TARGET));
        assert!(EnvFilter::builder().parse(&directive).is_ok());
    }
}
