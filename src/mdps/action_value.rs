use super::mdp::Mdp;
use super::state_values::{MissingStateValue, StateValues};
use crate::*;

/// Computes Q(s, a): the expected one-step-lookahead discounted return of
/// taking `a` in `s` and following `state_values` thereafter.
///
/// Q(s, a) = sum over s' of P(s' | s, a) * (R(s, a, s') + gamma * V(s'))
///
/// A pair with no reachable next states sums over the empty set and yields 0.
/// Gamma is not range-checked, and probabilities are trusted to sum to 1;
/// both are the caller's contract. The one failure surfaced here is a
/// reachable next state missing from `state_values`.
pub fn action_value(
    mdp: &dyn Mdp,
    state_values: &StateValues,
    s: Discrete,
    a: Discrete,
    gamma: Continous,
) -> Result<Continous, MissingStateValue> {
    let mut q = 0.;
    for t in mdp.next_states(s, a) {
        q += t.probability * (t.reward + gamma * state_values.lookup(t.next_state)?);
    }

    Ok(q)
}
