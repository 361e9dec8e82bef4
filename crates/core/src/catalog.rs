//! Cosmetic star catalog data.
//!
//! Nothing here feeds the transform pipeline; it only fills the status line
//! for the nearest star. Generation goes through a caller-supplied [`Rng`] so
//! seeded fields come out identical.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

const NAME_PREFIXES: [&str; 5] = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"];
const NAME_SUFFIXES: [&str; 5] = ["Centauri", "Cygni", "Eridani", "Draconis", "Lyrae"];

/// Spectral class shown in the catalog line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarClass {
    RedDwarf,
    YellowDwarf,
    WhiteDwarf,
    BlueGiant,
    RedGiant,
}

impl StarClass {
    pub const ALL: [StarClass; 5] = [
        StarClass::RedDwarf,
        StarClass::YellowDwarf,
        StarClass::WhiteDwarf,
        StarClass::BlueGiant,
        StarClass::RedGiant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StarClass::RedDwarf => "Red Dwarf",
            StarClass::YellowDwarf => "Yellow Dwarf",
            StarClass::WhiteDwarf => "White Dwarf",
            StarClass::BlueGiant => "Blue Giant",
            StarClass::RedGiant => "Red Giant",
        }
    }
}

impl fmt::Display for StarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display attributes attached to every star.
#[derive(Debug, Clone, PartialEq)]
pub struct StarInfo {
    pub name: String,
    pub class: StarClass,
    /// Surface temperature in Kelvin
    pub temperature: u32,
    /// Radius in solar radii
    pub size: f64,
    /// Age in billions of years
    pub age: f64,
}

impl StarInfo {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let prefix = NAME_PREFIXES.choose(rng).copied().unwrap_or("Alpha");
        let suffix = NAME_SUFFIXES.choose(rng).copied().unwrap_or("Centauri");
        let number: u32 = rng.gen_range(1..=999);
        let class = StarClass::ALL
            .choose(rng)
            .copied()
            .unwrap_or(StarClass::RedDwarf);

        Self {
            name: format!("{} {} {}", prefix, suffix, number),
            class,
            temperature: rng.gen_range(3000..=30000),
            size: rng.gen_range(0.1..100.0),
            age: rng.gen_range(0.1..10.0),
        }
    }
}

impl fmt::Display for StarInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} | Type: {} | Temp: {}K | Size: {:.2} solar radii | Age: {:.2} billion years",
            self.name, self.class, self.temperature, self.size, self.age
        )
    }
}
