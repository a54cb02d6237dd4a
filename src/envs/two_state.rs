#[cfg(test)]
use crate::mdps::mdp::Mdp;
#[cfg(test)]
use crate::*;
#[cfg(test)]
use std::rc::Rc;

/// Two states A = 0 and B = 1 with a single "move" action. Moving from A
/// stays in A with probability 0.2 (reward 1) and reaches B with probability
/// 0.8 (reward 5). B has no outgoing entries, so it acts as a terminal state.
#[cfg(test)]
pub struct TwoState {
    n_s: usize,
    n_a: usize,
    transitions: Rc<Transitions>,
}

#[cfg(test)]
impl TwoState {
    pub fn new() -> Self {
        let transitions = Transitions::from([(
            (0, 0),
            vec![
                Transition {
                    next_state: 0,
                    probability: 0.2,
                    reward: 1.,
                    done: false,
                },
                Transition {
                    next_state: 1,
                    probability: 0.8,
                    reward: 5.,
                    done: true,
                },
            ],
        )]);

        Self {
            n_s: 2,
            n_a: 1,
            transitions: Rc::new(transitions),
        }
    }
}

#[cfg(test)]
impl Mdp for TwoState {
    fn n_s(&self) -> usize {
        self.n_s
    }

    fn n_a(&self) -> usize {
        self.n_a
    }

    fn transitions(&self) -> Rc<Transitions> {
        Rc::clone(&self.transitions)
    }
}
