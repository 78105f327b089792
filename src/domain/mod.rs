// Domain layer: the box value object and the port the engine reads from.

pub mod model;
pub mod ports;
