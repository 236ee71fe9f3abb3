//! Hodgkin-Huxley leak, potassium and sodium currents in two
//! parameterisations:
//!
//! - Traub & Miles, Neuronal Networks of the Hippocampus (1991): two-rate
//!   kinetics shifted by the threshold `vT`.
//! - Wang & Buzsaki (1996) with the phi factor folded into the rates as in
//!   Kopell et al. (2010): relaxation towards steady state.

use super::{IonicCurrent, Ohmic};
use crate::{error::Result, spec::CurrentSpec};

/// Passive leak, identical in both parameterisations.
#[derive(Debug, Clone, PartialEq)]
pub struct Leak {
    ohm: Ohmic,
}

impl IonicCurrent for Leak {
    fn from_spec(spec: &CurrentSpec, area: &str) -> Result<Self> {
        Ok(Leak {
            ohm: Ohmic::new(spec, area)?,
        })
    }

    fn name(&self) -> &str {
        &self.ohm.name
    }

    fn equations(&self) -> Vec<String> {
        vec![self.ohm.current("")]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraubK {
    ohm: Ohmic,
    v_t: String,
}

impl IonicCurrent for TraubK {
    fn from_spec(spec: &CurrentSpec, area: &str) -> Result<Self> {
        let ohm = Ohmic::new(spec, area)?;
        let v_t = spec.safe("vT")?;
        Ok(TraubK { ohm, v_t })
    }

    fn name(&self) -> &str {
        &self.ohm.name
    }

    fn equations(&self) -> Vec<String> {
        let vt = &self.v_t;
        vec![
            self.ohm.current("(n ** 4)"),
            String::from("dn/dt = alphan * (1 - n) - betan * n : 1"),
            format!(
                "alphan = - 0.032 * (mV ** -1) * (v - {vt} - 15 * mV) / (exp(- (v - {vt} - 15 * mV) / (5 * mV)) - 1.) / ms : Hz",
                vt = vt
            ),
            format!("betan = 0.5 * exp(- (v - {vt} - 10 * mV) / (40 * mV)) / ms : Hz", vt = vt),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraubNa {
    ohm: Ohmic,
    v_t: String,
}

impl IonicCurrent for TraubNa {
    fn from_spec(spec: &CurrentSpec, area: &str) -> Result<Self> {
        let ohm = Ohmic::new(spec, area)?;
        let v_t = spec.safe("vT")?;
        Ok(TraubNa { ohm, v_t })
    }

    fn name(&self) -> &str {
        &self.ohm.name
    }

    fn equations(&self) -> Vec<String> {
        let vt = &self.v_t;
        vec![
            self.ohm.current("(m ** 3) * h"),
            String::from("dm/dt = alpham * (1 - m) - betam * m : 1"),
            String::from("dh/dt = alphah * (1 - h) - betah * h : 1"),
            format!(
                "alpham = - 0.32 * (mV ** -1) * (v - {vt} - 13 * mV) / (exp(- (v - {vt} - 13 * mV) / (4 * mV)) - 1.) / ms : Hz",
                vt = vt
            ),
            format!(
                "betam = 0.28 * (mV ** -1) * (v - {vt} - 40 * mV) / (exp((v - {vt} - 40 * mV) / (5 * mV)) - 1.) / ms : Hz",
                vt = vt
            ),
            format!("alphah = 0.128 * exp(- (v - {vt} - 17 * mV) / (18 * mV)) / ms : Hz", vt = vt),
            format!("betah = 4. / (1 + exp(- (v - {vt} - 40 * mV) / (5 * mV))) / ms : Hz", vt = vt),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WangK {
    ohm: Ohmic,
}

impl IonicCurrent for WangK {
    fn from_spec(spec: &CurrentSpec, area: &str) -> Result<Self> {
        Ok(WangK {
            ohm: Ohmic::new(spec, area)?,
        })
    }

    fn name(&self) -> &str {
        &self.ohm.name
    }

    fn equations(&self) -> Vec<String> {
        vec![
            self.ohm.current("(n ** 4)"),
            String::from("dn/dt = (n_inf - n) / tau_n : 1"),
            String::from("n_inf = alphan / (alphan + betan) : 1"),
            String::from("tau_n = 0.2 / (alphan + betan) : ms"),
            String::from("alphan = 0.01 * (mV ** -1) * (v + 34 * mV) / (1. - exp(- 0.1 * (mV ** -1) * (v + 34 * mV))) / ms : Hz"),
            String::from("betan = 0.125 * exp(- (v + 44 * mV) / (80 * mV)) / ms : Hz"),
        ]
    }
}

/// The activation m is integrated rather than replaced by m_inf, which
/// would make the system stiff.
#[derive(Debug, Clone, PartialEq)]
pub struct WangNa {
    ohm: Ohmic,
}

impl IonicCurrent for WangNa {
    fn from_spec(spec: &CurrentSpec, area: &str) -> Result<Self> {
        Ok(WangNa {
            ohm: Ohmic::new(spec, area)?,
        })
    }

    fn name(&self) -> &str {
        &self.ohm.name
    }

    fn equations(&self) -> Vec<String> {
        vec![
            self.ohm.current("(m ** 3) * h"),
            String::from("dm/dt = (m_inf - m) / tau_m : 1"),
            String::from("dh/dt = (h_inf - h) / tau_h : 1"),
            String::from("m_inf = alpham / (alpham + betam) : 1"),
            String::from("tau_m = 0.2 / (alpham + betam) : ms"),
            String::from("h_inf = alphah / (alphah + betah) : 1"),
            String::from("tau_h = 0.2 / (alphah + betah) : ms"),
            String::from("alpham = 0.1 * (mV ** -1) * (v + 35 * mV) / (1. - exp(- (v + 35 * mV) / (10 * mV))) / ms : Hz"),
            String::from("betam = 4 * exp(- (v + 60 * mV) / (18 * mV)) / ms : Hz"),
            String::from("alphah = 0.07 * exp(- (v + 58 * mV) / (20 * mV)) / ms : Hz"),
            String::from("betah = 1. / (exp((- 0.1 * (mV ** -1)) * (v + 28 * mV)) + 1.) / ms : Hz"),
        ]
    }
}
