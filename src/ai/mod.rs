pub mod eval;
pub mod minimax;
pub mod simple;

pub use eval::{evaluate_for, evaluate_state};
pub use minimax::{choose_action, choose_action_unpruned, SearchResult, SearchStats};
pub use simple::choose_greedy;
