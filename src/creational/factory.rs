//! Factory: callers ask for a pizza by kind and get back a trait object,
//! never naming the concrete type.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::{PatternError, Result};

pub trait Pizza {
    fn name(&self) -> &'static str;

    fn prepare(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Preparing {} pizza", self.name())
    }

    fn bake(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Baking {} pizza", self.name())
    }

    fn cut(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Cutting {} pizza", self.name())
    }

    fn pack(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Boxing {} pizza", self.name())
    }
}

pub struct MargheritaPizza;

impl Pizza for MargheritaPizza {
    fn name(&self) -> &'static str {
        "Margherita"
    }
}

pub struct VeggiePizza;

impl Pizza for VeggiePizza {
    fn name(&self) -> &'static str {
        "Veggie"
    }

    fn bake(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Baking Veggie pizza at a lower temperature")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PizzaKind {
    Margherita,
    Veggie,
}

impl fmt::Display for PizzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PizzaKind::Margherita => f.write_str("margherita"),
            PizzaKind::Veggie => f.write_str("veggie"),
        }
    }
}

impl FromStr for PizzaKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "margherita" | "margarita" => Ok(PizzaKind::Margherita),
            "veggie" => Ok(PizzaKind::Veggie),
            other => Err(PatternError::invalid_discriminant("pizza", other)),
        }
    }
}

#[derive(Default)]
pub struct PizzaFactory;

impl PizzaFactory {
    pub fn create(&self, kind: PizzaKind) -> Box<dyn Pizza> {
        match kind {
            PizzaKind::Margherita => Box::new(MargheritaPizza),
            PizzaKind::Veggie => Box::new(VeggiePizza),
        }
    }

    pub fn create_named(&self, name: &str) -> Result<Box<dyn Pizza>> {
        Ok(self.create(name.parse()?))
    }
}

/// Prepare, bake, cut and box.
pub fn make(pizza: &dyn Pizza, out: &mut dyn Write) -> io::Result<()> {
    pizza.prepare(out)?;
    pizza.bake(out)?;
    pizza.cut(out)?;
    pizza.pack(out)
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let factory = PizzaFactory;

    for kind in [PizzaKind::Margherita, PizzaKind::Veggie] {
        let pizza = factory.create(kind);
        make(pizza.as_ref(), out)?;
    }

    if let Err(err) = factory.create_named("hawaiian") {
        writeln!(out, "Order refused: {err}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_picks_concrete_type() {
        let factory = PizzaFactory;
        assert_eq!(factory.create(PizzaKind::Margherita).name(), "Margherita");
        assert_eq!(factory.create(PizzaKind::Veggie).name(), "Veggie");
    }

    #[test]
    fn test_make_runs_every_step() {
        let mut out = Vec::new();
        make(PizzaFactory.create(PizzaKind::Margherita).as_ref(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Preparing Margherita pizza\nBaking Margherita pizza\n\
             Cutting Margherita pizza\nBoxing Margherita pizza\n"
        );
    }

    #[test]
    fn test_named_lookup() {
        let factory = PizzaFactory;
        assert_eq!(factory.create_named(" Veggie ").unwrap().name(), "Veggie");
        assert!(matches!(
            factory.create_named("hawaiian"),
            Err(PatternError::InvalidDiscriminant { kind: "pizza", .. })
        ));
    }

    #[test]
    fn test_kind_display_parses_back() {
        for kind in [PizzaKind::Margherita, PizzaKind::Veggie] {
            assert_eq!(kind.to_string().parse::<PizzaKind>().unwrap(), kind);
        }
    }
}
