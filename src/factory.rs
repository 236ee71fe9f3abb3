use tracing::trace;

use crate::{
    current::{
        CaLReuveni, CaTHuguenard, CanDestexhe, IonicCurrent, Leak, MYamada, SynExp, TraubK,
        TraubNa, WangK, WangNa,
    },
    error::{Error, Result},
    spec::CurrentSpec,
    Map,
};

/// Builds one current from its configuration and the neuron's area.
pub type Constructor = fn(&CurrentSpec, &str) -> Result<Box<dyn IonicCurrent>>;

fn build<C: IonicCurrent + 'static>(
    spec: &CurrentSpec,
    area: &str,
) -> Result<Box<dyn IonicCurrent>> {
    Ok(Box::new(C::from_spec(spec, area)?))
}

/// Known current classes
pub const CURRENTS: &[(&str, Constructor)] = &[
    ("IonicCurrentHHTraubLeak", build::<Leak>),
    ("IonicCurrentHHTraubK", build::<TraubK>),
    ("IonicCurrentHHTraubNa", build::<TraubNa>),
    ("IonicCurrentHHWangLeak", build::<Leak>),
    ("IonicCurrentHHWangK", build::<WangK>),
    ("IonicCurrentHHWangNa", build::<WangNa>),
    ("IonicCurrentMYamada", build::<MYamada>),
    ("IonicCurrentCaLReuveni", build::<CaLReuveni>),
    ("IonicCurrentCaTHuguenard", build::<CaTHuguenard>),
    ("IonicCurrentCANDestexhe", build::<CanDestexhe>),
    ("IonicCurrentSynExp", build::<SynExp>),
];

/// Instantiate a current from the built-in table.
pub fn make_current(spec: &CurrentSpec, area: &str) -> Result<Box<dyn IonicCurrent>> {
    Factory::default().make_current(spec, area)
}

/// Lookup table class -> constructor. Starts out with [`CURRENTS`], further
/// mechanisms can be registered before any neuron is built.
#[derive(Clone)]
pub struct Factory {
    table: Map<String, Constructor>,
}

impl Default for Factory {
    fn default() -> Self {
        let table = CURRENTS
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        Factory { table }
    }
}

impl Factory {
    pub fn empty() -> Self {
        Factory { table: Map::new() }
    }

    /// Add or replace a class, returning the previous constructor if any.
    pub fn register(&mut self, class: &str, ctor: Constructor) -> Option<Constructor> {
        self.table.insert(class.to_string(), ctor)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(|k| k.as_str())
    }

    pub fn contains(&self, class: &str) -> bool {
        self.table.contains_key(class)
    }

    pub fn make_current(&self, spec: &CurrentSpec, area: &str) -> Result<Box<dyn IonicCurrent>> {
        let class = spec.class.as_deref().unwrap_or_default();
        let ctor = self
            .table
            .get(class)
            .ok_or_else(|| Error::UnknownCurrentType {
                class: class.to_string(),
                current: spec.label(),
            })?;
        trace!("Building current '{}' of class {}", spec.label(), class);
        ctor(spec, area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn unknown_class_is_an_error() {
        let spec = CurrentSpec::new("IonicCurrentNope").with("name", "IX");
        match make_current(&spec, "1") {
            Err(Error::UnknownCurrentType { class, current }) => {
                assert_eq!(class, "IonicCurrentNope");
                assert_eq!(current, "IX");
            }
            r => panic!("Unexpected {:?}", r),
        }
    }

    #[test]
    fn missing_class_is_not_defaulted() {
        let spec = CurrentSpec::default().with("name", "IX").with("g", 1).with("E", 0);
        assert!(matches!(
            make_current(&spec, "1"),
            Err(Error::UnknownCurrentType { class, .. }) if class.is_empty()
        ));
    }

    #[test]
    fn all_builtins_are_registered() {
        let factory = Factory::default();
        assert_eq!(factory.classes().count(), 11);
        for (class, _) in CURRENTS {
            assert!(factory.contains(class));
        }
    }

    #[derive(Debug)]
    struct Ghk {
        name: String,
    }

    impl IonicCurrent for Ghk {
        fn from_spec(spec: &CurrentSpec, _: &str) -> Result<Self> {
            Ok(Ghk { name: spec.name()? })
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn equations(&self) -> Vec<String> {
            vec![format!("{} = 0 * amp : amp", self.name)]
        }
    }

    #[test]
    fn register_new_mechanism() {
        let mut factory = Factory::default();
        assert!(factory.register("Ghk", build::<Ghk>).is_none());
        let spec = CurrentSpec::new("Ghk").with("name", "IGhk");
        let current = factory.make_current(&spec, "1").unwrap();
        assert_eq!(current.name(), "IGhk");
        assert_eq!(current.render(), "IGhk = 0 * amp : amp");
        assert!(make_current(&spec, "1").is_err());
    }
}
