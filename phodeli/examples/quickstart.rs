//! Minimal end-to-end example: create measures, convert them, and print them.

use phodeli::{Angle, AngleUnit, Length, LengthUnit, Measure, Unit};

fn main() {
    let a = Angle::degrees(180.0);
    let r = a.transform(AngleUnit::Radians);
    assert!((r.amount() - core::f64::consts::PI).abs() < 1e-12);
    println!("{a} = {r}");

    let run = Length::km(42.195);
    println!("{run} = {:.9} = {}", run.transform(LengthUnit::Miles), run.to_meters());

    let finer = LengthUnit::Inches.max_precision(LengthUnit::Yards);
    println!("finer of inches and yards: {}", finer.name());
}
