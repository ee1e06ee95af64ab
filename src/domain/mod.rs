// Domain layer: models and ports. No I/O beyond the trait definitions.

pub mod model;
pub mod ports;
