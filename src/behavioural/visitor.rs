//! Visitor: add operations over a closed set of shapes without touching the
//! shapes themselves.
//!
//! `Shape::accept` picks the visitor method from the variant, and the
//! visitor type picks the behaviour, so the code that runs depends on both.

use std::f64::consts::PI;
use std::io::Write;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Square(Square),
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle(Circle { radius })
    }

    pub fn square(side: f64) -> Self {
        Shape::Square(Square { side })
    }

    pub fn accept<V: ShapeVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Shape::Circle(circle) => visitor.visit_circle(circle),
            Shape::Square(square) => visitor.visit_square(square),
        }
    }
}

pub trait ShapeVisitor {
    type Output;

    fn visit_circle(&mut self, circle: &Circle) -> Self::Output;
    fn visit_square(&mut self, square: &Square) -> Self::Output;
}

pub struct AreaVisitor;

impl ShapeVisitor for AreaVisitor {
    type Output = f64;

    fn visit_circle(&mut self, circle: &Circle) -> f64 {
        PI * circle.radius * circle.radius
    }

    fn visit_square(&mut self, square: &Square) -> f64 {
        square.side * square.side
    }
}

pub struct PrintNameVisitor;

impl ShapeVisitor for PrintNameVisitor {
    type Output = &'static str;

    fn visit_circle(&mut self, _circle: &Circle) -> &'static str {
        "Circle"
    }

    fn visit_square(&mut self, _square: &Square) -> &'static str {
        "Square"
    }
}

/// Stateful visitor: sums perimeters across every shape it visits.
#[derive(Default)]
pub struct PerimeterTotal {
    pub total: f64,
    pub visited: usize,
}

impl ShapeVisitor for PerimeterTotal {
    type Output = ();

    fn visit_circle(&mut self, circle: &Circle) {
        self.total += 2.0 * PI * circle.radius;
        self.visited += 1;
    }

    fn visit_square(&mut self, square: &Square) {
        self.total += 4.0 * square.side;
        self.visited += 1;
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let shapes = [Shape::circle(5.0), Shape::square(4.0)];

    for shape in &shapes {
        let name = shape.accept(&mut PrintNameVisitor);
        let area = shape.accept(&mut AreaVisitor);
        writeln!(out, "Area of {name}: {area:.2}")?;
    }

    for shape in &shapes {
        writeln!(out, "Shape name: {}", shape.accept(&mut PrintNameVisitor))?;
    }

    let mut perimeter = PerimeterTotal::default();
    shapes.iter().for_each(|shape| shape.accept(&mut perimeter));
    writeln!(
        out,
        "Total perimeter of {} shapes: {:.2}",
        perimeter.visited, perimeter.total
    )?;
    Ok(())
}
