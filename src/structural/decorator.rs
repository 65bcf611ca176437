//! Decorator: wrap a component in layers that add behaviour around the
//! same `format` call.
//!
//! Each decorator owns the component it wraps, so a chain is just nested
//! boxes and drops from the outside in.

use std::io::{self, Write};

use crate::error::Result;

pub trait TextFormat {
    fn format(&self, text: &str) -> String;
}

pub struct PlainText;

impl TextFormat for PlainText {
    fn format(&self, text: &str) -> String {
        text.to_string()
    }
}

pub struct BoldText {
    inner: Box<dyn TextFormat>,
}

impl BoldText {
    pub fn new(inner: Box<dyn TextFormat>) -> Self {
        BoldText { inner }
    }
}

impl TextFormat for BoldText {
    fn format(&self, text: &str) -> String {
        format!("<b>{}</b>", self.inner.format(text))
    }
}

pub struct ItalicText {
    inner: Box<dyn TextFormat>,
}

impl ItalicText {
    pub fn new(inner: Box<dyn TextFormat>) -> Self {
        ItalicText { inner }
    }
}

impl TextFormat for ItalicText {
    fn format(&self, text: &str) -> String {
        format!("<i>{}</i>", self.inner.format(text))
    }
}

pub struct UnderlineText {
    inner: Box<dyn TextFormat>,
}

impl UnderlineText {
    pub fn new(inner: Box<dyn TextFormat>) -> Self {
        UnderlineText { inner }
    }
}

impl TextFormat for UnderlineText {
    fn format(&self, text: &str) -> String {
        format!("<u>{}</u>", self.inner.format(text))
    }
}

// =============================================================================
// Delegation trace: the bare structure of a decorator chain
// =============================================================================

pub trait Component {
    fn operate(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct BaseComponent;

impl Component for BaseComponent {
    fn operate(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "BaseComponent::operate()")
    }
}

pub struct TracingDecorator {
    inner: Box<dyn Component>,
}

impl TracingDecorator {
    pub fn new(inner: Box<dyn Component>) -> Self {
        TracingDecorator { inner }
    }

    /// Wrap `base` in `layers` decorators.
    pub fn stack(base: Box<dyn Component>, layers: usize) -> Box<dyn Component> {
        (0..layers).fold(base, |inner, _| -> Box<dyn Component> {
            Box::new(TracingDecorator::new(inner))
        })
    }
}

impl Component for TracingDecorator {
    fn operate(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "TracingDecorator::operate(), calling inner.operate()")?;
        self.inner.operate(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let formatted = UnderlineText::new(Box::new(ItalicText::new(Box::new(BoldText::new(
        Box::new(PlainText),
    )))));
    writeln!(
        out,
        "Formatted Text: {}",
        formatted.format("Hello, Decorator Pattern!")
    )?;
    writeln!(out)?;

    TracingDecorator::stack(Box::new(BaseComponent), 4).operate(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorators_nest_in_wrap_order() {
        let formatted = UnderlineText::new(Box::new(ItalicText::new(Box::new(BoldText::new(
            Box::new(PlainText),
        )))));
        assert_eq!(
            formatted.format("Hello, Decorator Pattern!"),
            "<u><i><b>Hello, Decorator Pattern!</b></i></u>"
        );
    }

    #[test]
    fn test_plain_text_is_identity() {
        assert_eq!(PlainText.format("as is"), "as is");
    }

    #[test]
    fn test_same_decorator_twice() {
        let double = BoldText::new(Box::new(BoldText::new(Box::new(PlainText))));
        assert_eq!(double.format("x"), "<b><b>x</b></b>");
    }

    #[test]
    fn test_tracing_stack_depth() {
        let mut out = Vec::new();
        TracingDecorator::stack(Box::new(BaseComponent), 4)
            .operate(&mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[..4].iter().all(|l| l.starts_with("TracingDecorator")));
        assert_eq!(lines[4], "BaseComponent::operate()");
    }

    #[test]
    fn test_zero_layers_is_base() {
        let mut out = Vec::new();
        TracingDecorator::stack(Box::new(BaseComponent), 0)
            .operate(&mut out)
            .unwrap();
        assert_eq!(out, b"BaseComponent::operate()\n");
    }
}
