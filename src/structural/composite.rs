//! Composite: leaves and containers share one `GuiComponent` API, so a panel
//! of panels draws the same way as a single button.

use std::io::{self, Write};

use itertools::Itertools;

use crate::error::Result;

pub trait GuiComponent {
    fn name(&self) -> String;

    fn draw(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Leaves reachable from here, including `self` when it is a leaf.
    fn leaf_count(&self) -> usize {
        1
    }
}

pub struct Button;

impl GuiComponent for Button {
    fn name(&self) -> String {
        "Button".to_string()
    }

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Button::Draw()")
    }
}

pub struct Line;

impl GuiComponent for Line {
    fn name(&self) -> String {
        "Line".to_string()
    }

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Line::Draw()")
    }
}

#[derive(Default)]
pub struct Panel {
    children: Vec<Box<dyn GuiComponent>>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, component: Box<dyn GuiComponent>) -> &mut Self {
        self.children.push(component);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl GuiComponent for Panel {
    fn name(&self) -> String {
        format!(
            "Panel[{}]",
            self.children.iter().map(|child| child.name()).join(", ")
        )
    }

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Panel::Draw()")?;
        for child in &self.children {
            child.draw(out)?;
        }
        Ok(())
    }

    fn leaf_count(&self) -> usize {
        self.children.iter().map(|child| child.leaf_count()).sum()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    Line.draw(out)?;
    Button.draw(out)?;

    let mut panel = Panel::new();
    panel.add(Box::new(Button)).add(Box::new(Line));
    panel.draw(out)?;

    let mut toolbar = Panel::new();
    toolbar.add(Box::new(Button)).add(Box::new(panel));
    writeln!(out, "{} has {} leaves", toolbar.name(), toolbar.leaf_count())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_draws_children_in_order() {
        let mut panel = Panel::new();
        panel.add(Box::new(Button)).add(Box::new(Line));

        let mut out = Vec::new();
        panel.draw(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Panel::Draw()\nButton::Draw()\nLine::Draw()\n"
        );
    }

    #[test]
    fn test_nested_panels() {
        let mut inner = Panel::new();
        inner.add(Box::new(Line)).add(Box::new(Line));
        let mut outer = Panel::new();
        outer.add(Box::new(Button)).add(Box::new(inner));

        assert_eq!(outer.len(), 2);
        assert_eq!(outer.leaf_count(), 3);
        assert_eq!(outer.name(), "Panel[Button, Panel[Line, Line]]");

        let mut out = Vec::new();
        outer.draw(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().matches("Panel::Draw()").count(), 2);
    }

    #[test]
    fn test_empty_panel() {
        let panel = Panel::new();
        assert!(panel.is_empty());
        assert_eq!(panel.leaf_count(), 0);
        assert_eq!(panel.name(), "Panel[]");
    }
}
