pub mod two_state;
