//! Adapter: make a foreign type fit a local trait.
//!
//! `ExternalTextDrawing` stands in for a third-party type that has no
//! `draw`. `TextShape` wraps it so it can sit in a `Vec<Box<dyn Shape>>`
//! next to the native shapes.

use std::io::{self, Write};

use crate::error::Result;

pub trait Shape {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Drawing circle")
    }
}

pub struct Line;

impl Shape for Line {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Drawing line")
    }
}

/// Library type with an incompatible API.
#[derive(Default)]
pub struct ExternalTextDrawing;

impl ExternalTextDrawing {
    pub fn draw_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "External library API is drawing text")
    }
}

#[derive(Default)]
pub struct TextShape {
    drawer: ExternalTextDrawing,
}

impl TextShape {
    pub fn new(drawer: ExternalTextDrawing) -> Self {
        TextShape { drawer }
    }
}

impl Shape for TextShape {
    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        self.drawer.draw_text(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle),
        Box::new(Line),
        Box::new(TextShape::default()),
    ];

    for shape in &shapes {
        shape.draw(out)?;
    }
    Ok(())
}
