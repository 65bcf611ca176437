//! Builder: assemble a `Vehicle` step by step. Concrete builders decide what
//! each step means; the director fixes the order.

use std::fmt;
use std::io::Write;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vehicle {
    vehicle_type: String,
    brand: String,
    model: String,
    has_gps: bool,
    has_leather_seats: bool,
    has_sunroof: bool,
}

impl Vehicle {
    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn extras(&self) -> (bool, bool, bool) {
        (self.has_gps, self.has_leather_seats, self.has_sunroof)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vehicle Type: {}", self.vehicle_type)?;
        writeln!(f, "Brand: {}", self.brand)?;
        writeln!(f, "Model: {}", self.model)?;
        writeln!(f, "GPS: {}", yes_no(self.has_gps))?;
        writeln!(f, "Leather Seats: {}", yes_no(self.has_leather_seats))?;
        write!(f, "Sunroof: {}", yes_no(self.has_sunroof))
    }
}

pub trait VehicleBuilder {
    fn set_vehicle_type(&mut self);
    fn set_brand(&mut self);
    fn set_model(&mut self);
    fn add_gps(&mut self);
    fn add_leather_seats(&mut self);
    fn add_sunroof(&mut self);

    /// Hand over the finished vehicle and reset for the next one.
    fn build(&mut self) -> Vehicle;
}

#[derive(Default)]
pub struct CarBuilder {
    vehicle: Vehicle,
}

impl VehicleBuilder for CarBuilder {
    fn set_vehicle_type(&mut self) {
        self.vehicle.vehicle_type = "Car".to_string();
    }

    fn set_brand(&mut self) {
        self.vehicle.brand = "Toyota".to_string();
    }

    fn set_model(&mut self) {
        self.vehicle.model = "Camry".to_string();
    }

    fn add_gps(&mut self) {
        self.vehicle.has_gps = true;
    }

    fn add_leather_seats(&mut self) {
        self.vehicle.has_leather_seats = true;
    }

    fn add_sunroof(&mut self) {
        self.vehicle.has_sunroof = true;
    }

    fn build(&mut self) -> Vehicle {
        std::mem::take(&mut self.vehicle)
    }
}

#[derive(Default)]
pub struct MotorcycleBuilder {
    vehicle: Vehicle,
}

impl VehicleBuilder for MotorcycleBuilder {
    fn set_vehicle_type(&mut self) {
        self.vehicle.vehicle_type = "Motorcycle".to_string();
    }

    fn set_brand(&mut self) {
        self.vehicle.brand = "Harley-Davidson".to_string();
    }

    fn set_model(&mut self) {
        self.vehicle.model = "Sportster".to_string();
    }

    // Motorcycles take none of the extras.
    fn add_gps(&mut self) {}

    fn add_leather_seats(&mut self) {}

    fn add_sunroof(&mut self) {}

    fn build(&mut self) -> Vehicle {
        std::mem::take(&mut self.vehicle)
    }
}

pub struct VehicleDirector<'a> {
    builder: &'a mut dyn VehicleBuilder,
}

impl<'a> VehicleDirector<'a> {
    pub fn new(builder: &'a mut dyn VehicleBuilder) -> Self {
        VehicleDirector { builder }
    }

    pub fn construct(&mut self) -> Vehicle {
        self.builder.set_vehicle_type();
        self.builder.set_brand();
        self.builder.set_model();
        self.builder.add_gps();
        self.builder.add_leather_seats();
        self.builder.add_sunroof();
        self.builder.build()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut car_builder = CarBuilder::default();
    let mut motorcycle_builder = MotorcycleBuilder::default();

    let car = VehicleDirector::new(&mut car_builder).construct();
    let motorcycle = VehicleDirector::new(&mut motorcycle_builder).construct();

    writeln!(out, "Car Details:\n{car}")?;
    writeln!(out, "\nMotorcycle Details:\n{motorcycle}")?;
    Ok(())
}
