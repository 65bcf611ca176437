//! Prototype: new documents are cloned from registered templates instead of
//! being built from scratch.

use std::fmt;
use std::io::Write;

use rustc_hash::FxHashMap;

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    header: String,
    footer: String,
    content: String,
}

impl Document {
    pub fn new(header: impl Into<String>, footer: impl Into<String>) -> Self {
        Document {
            header: header.into(),
            footer: footer.into(),
            content: String::new(),
        }
    }

    pub fn letter() -> Self {
        Document::new("Letter Header", "Letter Footer")
    }

    pub fn report() -> Self {
        Document::new("Report Header", "Report Footer")
    }

    pub fn fill_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.header, self.content, self.footer)
    }
}

pub struct TemplateRegistry {
    templates: FxHashMap<String, Document>,
}

impl TemplateRegistry {
    pub fn empty() -> Self {
        TemplateRegistry {
            templates: FxHashMap::default(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, prototype: Document) {
        self.templates.insert(name.into(), prototype);
    }

    /// Fresh copy of the template registered under `name`.
    pub fn instantiate(&self, name: &str) -> Result<Document> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| PatternError::UnknownPrototype(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for TemplateRegistry {
    /// Registry preloaded with `letter` and `report`.
    fn default() -> Self {
        let mut registry = TemplateRegistry::empty();
        registry.register("letter", Document::letter());
        registry.register("report", Document::report());
        registry
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let registry = TemplateRegistry::default();

    let mut letter = registry.instantiate("letter")?;
    let mut report = registry.instantiate("report")?;
    letter.fill_content("Dear John,\n\nThis is a letter.");
    report.fill_content("Monthly Sales Report:\n\nTotal Sales: $100,000");

    writeln!(out, "Letter Template:\n---\n{letter}\n---")?;
    writeln!(out, "\nReport Template:\n---\n{report}\n---")?;

    if let Err(err) = registry.instantiate("invoice") {
        writeln!(out, "\n{err}")?;
    }
    Ok(())
}
