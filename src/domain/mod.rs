// Domain layer - Probe records and options

pub mod model;
pub mod options;
