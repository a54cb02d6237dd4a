pub mod action_value;
pub mod mdp;
pub mod state_values;
