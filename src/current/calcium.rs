//! Calcium currents and the calcium activated cation current.
//!
//! References:
//! - Reuveni et al., J Neurosci 13(11):4609-21 (1993), high voltage L-type.
//! - Huguenard & McCormick, J Neurophysiol 68(4):1373 (1992), low voltage T-type.
//! - Destexhe et al., J Neurophysiol 72(2):803-18 (1994), CAN.

use super::{CalciumPool, IonicCurrent, Ohmic};
use crate::{error::Result, param::safe, spec::CurrentSpec};

/// Default Q10 of T-type inactivation
pub const CAT_Q10: &str = "3";
/// Default temperature, a plain number of degrees Celsius
pub const CAT_TEMPERATURE: &str = "36";

#[derive(Debug, Clone, PartialEq)]
pub struct CaLReuveni {
    ohm: Ohmic,
    pool: CalciumPool,
}

impl IonicCurrent for CaLReuveni {
    fn from_spec(spec: &CurrentSpec, area: &str) -> Result<Self> {
        let ohm = Ohmic::new(spec, area)?;
        let pool = CalciumPool::new(spec)?;
        Ok(CaLReuveni { ohm, pool })
    }

    fn name(&self) -> &str {
        &self.ohm.name
    }

    fn equations(&self) -> Vec<String> {
        let mut result = vec![
            self.ohm.current("(mCaL ** 2) * hCaL"),
            String::from("dmCaL/dt = (alphamCaL * (1 - mCaL)) - (betamCaL * mCaL) : 1"),
            String::from("dhCaL/dt = (alphahCaL * (1 - hCaL)) - (betahCaL * hCaL) : 1"),
            String::from("alphamCaL = (0.055 * mV ** -1) * ((-27 * mV) - v) / (exp(((-27 * mV) - v) / (3.8 * mV)) - 1.) / ms : Hz"),
            String::from("betamCaL = 0.94 * exp(((-75 * mV) - v) / (17 * mV)) / ms : Hz"),
            String::from("alphahCaL = 0.000457 * exp(((-13 * mV) - v) / (50 * mV)) / ms : Hz"),
            String::from("betahCaL = 0.0065 / (exp(((-15 * mV) - v) / (28 * mV)) + 1.) / ms : Hz"),
        ];
        result.extend(self.pool.equations(&self.ohm.name));
        result
    }
}

/// T-type current; activation is instantaneous, inactivation relaxes with
/// a time constant scaled by `q10 ** ((tempC - 24) / 10)`. `tempC` is a
/// dimensionless number of degrees Celsius, `36 * celsius` does not fit the
/// exponent.
#[derive(Debug, Clone, PartialEq)]
pub struct CaTHuguenard {
    ohm: Ohmic,
    pool: CalciumPool,
    q10: String,
    temp_c: String,
}

impl IonicCurrent for CaTHuguenard {
    fn from_spec(spec: &CurrentSpec, area: &str) -> Result<Self> {
        let ohm = Ohmic::new(spec, area)?;
        let pool = CalciumPool::new(spec)?;
        let q10 = spec.safe_or("q10", CAT_Q10);
        let temp_c = spec.safe_or("tempC", CAT_TEMPERATURE);
        Ok(CaTHuguenard {
            ohm,
            pool,
            q10,
            temp_c,
        })
    }

    fn name(&self) -> &str {
        &self.ohm.name
    }

    fn equations(&self) -> Vec<String> {
        let mut result = vec![
            self.ohm.current("(mCaT ** 2) * hCaT"),
            String::from("dhCaT/dt = (hCaTInf - hCaT) / hCaTTau : 1"),
            String::from("mCaT = 1. / (1 + exp(-(v + (57 * mV)) / (6.2 * mV))) : 1"),
            String::from("hCaTInf = 1. / (1 + exp((v + (81 * mV)) / (4. * mV))) : 1"),
            String::from("hCaTTau = ((30.8 + (211.4 + exp((v + (113.2 * mV)) / (5 * mV))) / (1. + exp((v + (84 * mV)) / (3.2 * mV)))) / (hCaTPhi)) * ms : ms"),
            format!("hCaTPhi = {} ** (({} - 24) / 10) : 1", self.q10, self.temp_c),
        ];
        result.extend(self.pool.equations(&self.ohm.name));
        result
    }
}

/// Calcium activated non-selective cation current; reads `Ca_i` from a
/// calcium current of the same neuron. `temp` is unitless, like `tempC`.
#[derive(Debug, Clone, PartialEq)]
pub struct CanDestexhe {
    ohm: Ohmic,
    beta: String,
    cac: String,
    temp_adj: String,
}

impl IonicCurrent for CanDestexhe {
    fn from_spec(spec: &CurrentSpec, area: &str) -> Result<Self> {
        let ohm = Ohmic::new(spec, area)?;
        let beta = spec.safe("beta")?;
        let cac = spec.safe("cac")?;
        let temp_adj = safe(format!("3.0 ** (({} - 22) / 10)", spec.safe("temp")?));
        Ok(CanDestexhe {
            ohm,
            beta,
            cac,
            temp_adj,
        })
    }

    fn name(&self) -> &str {
        &self.ohm.name
    }

    fn equations(&self) -> Vec<String> {
        vec![
            self.ohm.current("mCAN ** 2"),
            String::from("dmCAN/dt = (mCANInf - mCAN) / mCANTau : 1"),
            format!("mCANInf = alpha2 / (alpha2 + {}) : 1", self.beta),
            format!(
                "mCANTau = 1. / (alpha2 + {}) / {} : second",
                self.beta, self.temp_adj
            ),
            format!("alpha2 = {} * (Ca_i / {}) ** 2 : Hz", self.beta, self.cac),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn pool(class: &str, name: &str) -> CurrentSpec {
        CurrentSpec::new(class)
            .with("name", name)
            .with("g", "1 * msiemens * cm ** -2")
            .with("E", "120 * mV")
            .with("tau", "5 * ms")
            .with("caInf", "2.4e-4 * mole * meter**-3")
            .with("kUnit", "1e4")
            .with("kFaraday", "96489 * coulomb / mole")
            .with("depth", "1 * umetre")
    }

    #[test]
    fn cat_defaults_to_q10_three_at_36_degrees() {
        let cat =
            CaTHuguenard::from_spec(&pool("IonicCurrentCaTHuguenard", "ICaT"), "1").unwrap();
        assert!(cat
            .equations()
            .contains(&String::from("hCaTPhi = (3) ** (((36) - 24) / 10) : 1")));

        let spec = pool("IonicCurrentCaTHuguenard", "ICaT")
            .with("q10", 2.5)
            .with("tempC", 24);
        let cat = CaTHuguenard::from_spec(&spec, "1").unwrap();
        assert!(cat
            .equations()
            .contains(&String::from("hCaTPhi = (2.5) ** (((24) - 24) / 10) : 1")));
    }

    #[test]
    fn cat_temperature_is_a_plain_number() {
        let spec = pool("IonicCurrentCaTHuguenard", "ICaT").with("tempC", 34.5);
        let cat = CaTHuguenard::from_spec(&spec, "1").unwrap();
        assert_eq!(
            cat.equations()[5],
            "hCaTPhi = (3) ** (((34.5) - 24) / 10) : 1"
        );
    }

    #[test]
    fn calcium_decay_has_same_shape_for_l_and_t() {
        let cal = CaLReuveni::from_spec(&pool("IonicCurrentCaLReuveni", "ICa"), "1").unwrap();
        let cat =
            CaTHuguenard::from_spec(&pool("IonicCurrentCaTHuguenard", "ICa"), "1").unwrap();
        let tail = |eqs: Vec<String>| eqs[eqs.len() - 2..].to_vec();
        assert_eq!(tail(cal.equations()), tail(cat.equations()));
        assert!(cal.render().contains("(-(1e4) * ICa / (cm ** 2))"));
    }

    #[test]
    fn can_temperature_adjustment() {
        let spec = CurrentSpec::new("IonicCurrentCANDestexhe")
            .with("name", "ICAN")
            .with("g", "0.25 * msiemens * cm ** -2")
            .with("E", "-20 * mV")
            .with("beta", "0.002 / ms")
            .with("cac", "1.1e-4 * mole * meter**-3")
            .with("temp", 36);
        let can = CanDestexhe::from_spec(&spec, "1").unwrap();
        assert_eq!(
            can.equations()[3],
            "mCANTau = 1. / (alpha2 + (0.002 / ms)) / (3.0 ** (((36) - 22) / 10)) : second"
        );
        assert_eq!(
            can.equations()[4],
            "alpha2 = (0.002 / ms) * (Ca_i / (1.1e-4 * mole * meter**-3)) ** 2 : Hz"
        );
    }

    #[test]
    fn can_requires_temperature() {
        let spec = CurrentSpec::new("IonicCurrentCANDestexhe")
            .with("name", "ICAN")
            .with("g", 1)
            .with("E", 1)
            .with("beta", 1)
            .with("cac", 1);
        assert!(matches!(
            CanDestexhe::from_spec(&spec, "1"),
            Err(Error::MissingParameter { field, .. }) if field == "temp"
        ));
    }
}
