//! Infrastructure implementation of the `TemplateSource` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::TemplateSource;
use crate::domain::{Template, TemplateError};

/// File extensions probed for a stack's template, in order.
const EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Production implementation of `TemplateSource` reading `<stack>.<ext>`
/// from a directory on disk.
pub struct DirTemplateSource {
    dir: PathBuf,
}

impl DirTemplateSource {
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl TemplateSource for DirTemplateSource {
    fn load(&self, stack: &str) -> Result<Template> {
        for ext in EXTENSIONS {
            let path = self.dir.join(format!("{stack}.{ext}"));
            if path.exists() {
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("cannot read {}", path.display()))?;
                return Ok(Template::new(bytes));
            }
        }
        Err(TemplateError::NotFound {
            stack: stack.to_string(),
            dir: self.dir.display().to_string(),
        }
        .into())
    }
}
