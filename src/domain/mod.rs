// Domain layer: location value types shared by the accessors, projections and exporters.

pub mod model;
