//! Ionic current mechanisms and their equation text.
//!
//! Every mechanism renders to a list of lines of the form
//!
//!   `lhs = rhs : unit` or `dx/dt = rhs : unit`
//!
//! The first line is always the ohmic current named after the configured
//! `name`; the neuron sums these names into its voltage equation.

use std::fmt::Debug;

use crate::{error::Result, param::safe, spec::CurrentSpec};

pub mod calcium;
pub mod hh;
pub mod potassium;
pub mod synapse;

pub use calcium::{CaLReuveni, CaTHuguenard, CanDestexhe};
pub use hh::{Leak, TraubK, TraubNa, WangK, WangNa};
pub use potassium::MYamada;
pub use synapse::SynExp;

pub trait IonicCurrent: Debug {
    /// Resolve all parameters of `spec` into their bracketed form.
    fn from_spec(spec: &CurrentSpec, area: &str) -> Result<Self>
    where
        Self: Sized;

    /// Variable holding the current, as used in the voltage equation
    fn name(&self) -> &str;

    /// Equation lines, current equation first
    fn equations(&self) -> Vec<String>;

    fn render(&self) -> String {
        self.equations().join("\n")
    }
}

/// Name, area scaled conductance and reversal potential shared by all
/// conductance based currents.
#[derive(Debug, Clone, PartialEq)]
pub struct Ohmic {
    pub name: String,
    pub g: String,
    pub e: String,
}

impl Ohmic {
    pub fn new(spec: &CurrentSpec, area: &str) -> Result<Self> {
        let name = spec.name()?;
        let g = safe(safe(spec.require("g")?) + " * " + &safe(area));
        let e = spec.safe("E")?;
        Ok(Ohmic { name, g, e })
    }

    /// `name = g * gating * (v - E) : amp`; empty `gating` yields a leak.
    pub fn current(&self, gating: &str) -> String {
        if gating.is_empty() {
            format!("{} = {} * (v - {}) : amp", self.name, self.g, self.e)
        } else {
            format!(
                "{} = {} * {} * (v - {}) : amp",
                self.name, self.g, gating, self.e
            )
        }
    }
}

/// Intracellular calcium pool filled by a calcium current and relaxing
/// towards `caInf` with time constant `tau`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalciumPool {
    tau: String,
    ca_inf: String,
    k_unit: String,
    k_faraday: String,
    depth: String,
}

impl CalciumPool {
    pub fn new(spec: &CurrentSpec) -> Result<Self> {
        Ok(CalciumPool {
            tau: spec.safe("tau")?,
            ca_inf: spec.safe("caInf")?,
            k_unit: spec.safe("kUnit")?,
            k_faraday: spec.safe("kFaraday")?,
            depth: spec.safe("depth")?,
        })
    }

    /// Decay of `Ca_i` driven by the current `current`.
    pub fn equations(&self, current: &str) -> Vec<String> {
        vec![
            format!(
                "dCa_i/dt = driveChannel + ({} - Ca_i) / {} : mole * meter**-3",
                self.ca_inf, self.tau
            ),
            format!(
                "driveChannel = (-{} * {} / (cm ** 2)) / (2 * {} * {}) : mole * meter ** -3 * Hz",
                self.k_unit, current, self.k_faraday, self.depth
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> CurrentSpec {
        CurrentSpec::new("Any")
            .with("name", "ICa")
            .with("g", "0.1 * msiemens * cm ** -2")
            .with("E", 120)
            .with("tau", "80 * ms")
            .with("caInf", "2.4e-4 * mole * meter**-3")
            .with("kUnit", "1e4")
            .with("kFaraday", "96489 * coulomb / mole")
            .with("depth", "1 * umetre")
    }

    #[test]
    fn ohmic_wraps_conductance_and_area() {
        let o = Ohmic::new(&spec(), "1e-4").unwrap();
        assert_eq!(o.g, "((0.1 * msiemens * cm ** -2) * (1e-4))");
        assert_eq!(o.e, "(120)");
        assert_eq!(
            o.current(""),
            "ICa = ((0.1 * msiemens * cm ** -2) * (1e-4)) * (v - (120)) : amp"
        );
        assert_eq!(
            o.current("m ** 3"),
            "ICa = ((0.1 * msiemens * cm ** -2) * (1e-4)) * m ** 3 * (v - (120)) : amp"
        );
    }

    #[test]
    fn calcium_pool_couples_to_named_current() {
        let pool = CalciumPool::new(&spec()).unwrap();
        assert_eq!(
            pool.equations("ICa"),
            vec![
                "dCa_i/dt = driveChannel + ((2.4e-4 * mole * meter**-3) - Ca_i) / (80 * ms) : mole * meter**-3",
                "driveChannel = (-(1e4) * ICa / (cm ** 2)) / (2 * (96489 * coulomb / mole) * (1 * umetre)) : mole * meter ** -3 * Hz",
            ]
        );
    }

    #[test]
    fn calcium_pool_requires_all_constants() {
        let mut s = spec();
        s.fields.remove("depth");
        assert!(CalciumPool::new(&s).is_err());
    }
}
