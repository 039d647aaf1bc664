mod policy;
mod random;

pub use policy::MovePolicy;
pub use random::RandomPolicy;
