// Domain layer: time-slot models, departments and ports. No I/O here.

pub mod department;
pub mod model;
pub mod ports;
