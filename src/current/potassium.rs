//! Slow non-inactivating M-type potassium current after Yamada, Koch &
//! Adams, Methods in Neuronal Modeling (1989).

use super::{IonicCurrent, Ohmic};
use crate::{error::Result, spec::CurrentSpec};

#[derive(Debug, Clone, PartialEq)]
pub struct MYamada {
    ohm: Ohmic,
    tau: String,
}

impl IonicCurrent for MYamada {
    fn from_spec(spec: &CurrentSpec, area: &str) -> Result<Self> {
        let ohm = Ohmic::new(spec, area)?;
        let tau = spec.safe("tau")?;
        Ok(MYamada { ohm, tau })
    }

    fn name(&self) -> &str {
        &self.ohm.name
    }

    fn equations(&self) -> Vec<String> {
        vec![
            self.ohm.current("p"),
            String::from("dp/dt = (pInf - p) / pTau : 1"),
            String::from("pInf = 1. / (1 + exp(- (v + (35 * mV)) / (10 * mV))) : 1"),
            format!(
                "pTau = {} / (3.3 * exp((v + (35 * mV)) / (20 * mV)) + exp(- (v + (35 * mV)) / (20 * mV))) : ms",
                self.tau
            ),
        ]
    }
}
