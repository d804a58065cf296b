//! Formatting measures inside a character budget, with a locale and with configuration.
//!
//! Run with `RUST_LOG=trace` to see when the formatter cuts the integer part.

use anyhow::Result;
use phodeli::locale;
use phodeli::{Angle, FormatConfig, FormatFlags, FormatSpec, Length, Measure};

fn main() -> Result<()> {
    env_logger::init();

    let angle = Angle::degrees(1.23456789);
    for precision in [20, 8, 4, 3, 1] {
        println!("|{:>12.*}|", precision, angle);
    }
    println!("|{:<12}|", Angle::radians(0.5));
    println!("|{:#12}|", Length::mm(3.25));

    let locale = locale::resolve("de")?;
    let spec = FormatSpec::new()
        .with_width(14)
        .with_precision(10)
        .with_flags(FormatFlags::UPPERCASE);
    println!("|{}|", Length::mi(26.2188).format_with(&locale, &spec));
    println!("{}", Length::km(1234.5).localized(&locale));

    let config = FormatConfig::from_toml_str(
        r#"
locale = "fr"
width = 16
precision = 9
left_justify = true
"#,
    )?;
    println!("|{}|", config.format(&Angle::radians(core::f64::consts::FRAC_PI_2))?);

    Ok(())
}
