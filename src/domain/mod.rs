// Domain layer: manifest directive models and ports. No I/O here.

pub mod model;
pub mod ports;
