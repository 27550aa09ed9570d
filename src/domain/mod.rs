// Domain layer: office data types and the clock port. No runtime dependencies.

pub mod model;
pub mod ports;
