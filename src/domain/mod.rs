// Domain layer: models, the landmark catalog and ports (interfaces).

pub mod catalog;
pub mod model;
pub mod ports;
pub mod selection;
