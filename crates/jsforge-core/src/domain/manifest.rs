//! Ordered record of emitted classes, rendered as the entry file's imports.

/// Relative class paths (`<group>/<Class>`) in emission order.
///
/// No sorting and no deduplication: the record order is the import order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportManifest {
    paths: Vec<String>,
}

impl ImportManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: impl Into<String>) {
        self.paths.push(path.into());
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// One `import` line per recorded path, binding the path's base name.
    pub fn render(&self) -> String {
        self.paths
            .iter()
            .map(|path| {
                let symbol = path.rsplit('/').next().unwrap_or(path);
                format!("import {symbol} from './{path}';\n")
            })
            .collect()
    }
}
