// Domain layer: color values, verdicts and the ports the audit writes through.

pub mod model;
pub mod ports;
