// Domain layer: entity shapes and ports. No transport or GraphQL types here.

pub mod model;
pub mod ports;
