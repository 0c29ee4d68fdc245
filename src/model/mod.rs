//! Defines the `Network`, a Bayesian (directed) graphical model over boolean variables
//! representing the factorization of a probability distribution P.

pub mod blanket;
pub mod description;
pub mod directed;

pub use self::blanket::BlanketPosterior;
pub use self::description::{NetworkDescription, VariableDescription};
pub use self::directed::{Network, NetworkBuilder};
