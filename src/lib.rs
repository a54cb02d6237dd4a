extern crate serde;
extern crate thiserror;

pub mod envs;
pub mod mdps;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type Discrete = i32;
pub type Continous = f64;

/// One outcome of taking an action in a state: the state the process lands
/// in, the probability of landing there, and the immediate reward paid out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub next_state: Discrete,
    pub probability: Continous,
    pub reward: f64,
    pub done: bool,
}

/// Tabular dynamics: (state, action) to the outcomes reachable from it.
/// A pair with no entry has no reachable next states (terminal or invalid).
pub type Transitions = HashMap<(Discrete, Discrete), Vec<Transition>>;
