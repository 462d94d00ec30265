// Domain layer: records flowing through a run and the ports the driver talks to.

pub mod model;
pub mod ports;
