pub mod gate;
pub mod policy;

pub use gate::session_gate;
pub use policy::{classify, RouteClass};
