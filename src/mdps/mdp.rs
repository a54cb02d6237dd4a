use crate::*;
use std::rc::Rc;

/// Markov Decision Process - Sutton & Barto 2018.
///
/// Gamma is deliberately not part of the model; it is a parameter of the
/// evaluation, passed per call.
pub trait Mdp {
    fn n_s(&self) -> usize;

    fn n_a(&self) -> usize;

    fn transitions(&self) -> Rc<Transitions>;

    /// The outcomes reachable by taking `a` in `s`. Empty for pairs the
    /// dynamics table has no entry for (terminal states, invalid actions).
    fn next_states(&self, s: Discrete, a: Discrete) -> Vec<Transition> {
        self.transitions().get(&(s, a)).cloned().unwrap_or_default()
    }
}
