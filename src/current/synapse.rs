//! Exponential synapse. The conductance is a state variable, named by the
//! `g` entry, that incoming spikes increment and that decays with `tau`.
//! Excitation or inhibition follows from `E` relative to rest.

use super::IonicCurrent;
use crate::{error::Result, spec::CurrentSpec};

#[derive(Debug, Clone, PartialEq)]
pub struct SynExp {
    name: String,
    g: String,
    e: String,
    tau: String,
}

impl IonicCurrent for SynExp {
    /// The area is ignored, `g` is a conductance and not a density.
    fn from_spec(spec: &CurrentSpec, _area: &str) -> Result<Self> {
        let name = spec.name()?;
        let g = spec.require("g")?.to_string();
        let e = spec.safe("E")?;
        let tau = spec.safe("tau")?;
        Ok(SynExp { name, g, e, tau })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn equations(&self) -> Vec<String> {
        vec![
            format!("{} = {} * (v - {}) : amp", self.name, self.g, self.e),
            format!("d{g}/dt = -{g} * (1. / {}) : siemens", self.tau, g = self.g),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conductance_is_a_decaying_state() {
        let spec = CurrentSpec::new("IonicCurrentSynExp")
            .with("name", "ISynI")
            .with("g", "gI")
            .with("E", "-75 * mV")
            .with("tau", "10 * ms");
        let syn = SynExp::from_spec(&spec, "20000 * umetre ** 2").unwrap();
        assert_eq!(
            syn.equations(),
            vec![
                "ISynI = gI * (v - (-75 * mV)) : amp",
                "dgI/dt = -gI * (1. / (10 * ms)) : siemens",
            ]
        );
    }
}
