//! Call-site capture and record emission

use std::fmt;
use std::path::{Component, Path};

use log::kv::{self, Key, Source, Value, VisitSource};
use log::Log;

use crate::level::Verbosity;

/// Key-value carrying the name of the function a record was emitted from
pub const FUNCTION_KEY: &str = "function";
/// Key-value carrying the exact severity of a record
pub const SEVERITY_KEY: &str = "severity";

/// Where a record was emitted. Built by the logging macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub module_path: &'static str,
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

/// The key-values this crate attaches to every record it builds
pub(crate) struct CallSiteFields<'a> {
    pub(crate) function: &'a str,
    pub(crate) severity: Verbosity,
}

impl Source for CallSiteFields<'_> {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> Result<(), kv::Error> {
        visitor.visit_pair(Key::from_str(FUNCTION_KEY), Value::from(self.function))?;
        visitor.visit_pair(Key::from_str(SEVERITY_KEY), Value::from(self.severity.as_str()))
    }

    fn count(&self) -> usize {
        2
    }
}

/// Build a record for `site` and hand it to `logger`.
///
/// This is what the logging macros expand to; it never fails.
pub fn emit<L>(logger: &L, severity: Verbosity, site: &CallSite, args: fmt::Arguments<'_>)
where
    L: Log + ?Sized,
{
    let fields = CallSiteFields {
        function: site.function,
        severity,
    };
    logger.log(
        &log::Record::builder()
            .level(severity.as_log_level())
            .target(site.module_path)
            .module_path_static(Some(site.module_path))
            .file_static(Some(site.file))
            .line(Some(site.line))
            .key_values(&fields)
            .args(args)
            .build(),
    );
}

/// Reduce a `type_name` of a marker fn nested in some function to that
/// function's bare name. Closures resolve to the function containing them.
pub fn enclosing_function(type_name: &'static str) -> &'static str {
    let mut path = type_name;
    if let Some(index) = path.rfind("::") {
        path = &path[..index];
    }
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    match path.rfind("::") {
        Some(index) => &path[index + 2..],
        None => path,
    }
}

/// Dotted form of a source file path: relative to `base`, separators
/// replaced by dots, `.rs` extension dropped.
///
/// `src/net/socket.rs` becomes `src.net.socket`.
pub fn dotted_source_path(file: &str, base: Option<&Path>) -> String {
    let path = Path::new(file);
    let relative = match base {
        Some(base) if path.is_absolute() => path.strip_prefix(base).unwrap_or(path),
        _ => path,
    };

    let mut dotted = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(".")
        .replace('\\', ".");

    if dotted.ends_with(".rs") {
        dotted.truncate(dotted.len() - 3);
    }
    dotted
}
