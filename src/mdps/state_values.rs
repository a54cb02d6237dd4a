use crate::*;
use std::collections::HashMap;
use thiserror::Error;

/// A reachable next state had no entry in the value table.
///
/// The table must cover every state the dynamics can reach from the pair
/// being evaluated; that is a caller precondition, surfaced here instead of
/// crashing inside a map index.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("no value recorded for state {state}")]
pub struct MissingStateValue {
    pub state: Discrete,
}

/// State to long-term value estimate, as maintained by whatever evaluation
/// loop sits above this crate. Never mutated here.
#[derive(Clone, Debug, Default)]
pub struct StateValues(HashMap<Discrete, Continous>);

impl StateValues {
    pub fn lookup(&self, state: Discrete) -> Result<Continous, MissingStateValue> {
        self.0
            .get(&state)
            .copied()
            .ok_or(MissingStateValue { state })
    }
}

impl<const N: usize> From<[(Discrete, Continous); N]> for StateValues {
    fn from(entries: [(Discrete, Continous); N]) -> Self {
        Self(HashMap::from(entries))
    }
}

impl FromIterator<(Discrete, Continous)> for StateValues {
    fn from_iter<T: IntoIterator<Item = (Discrete, Continous)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
