// Domain layer: survey models and collaborator ports (interfaces).

pub mod model;
pub mod ports;
