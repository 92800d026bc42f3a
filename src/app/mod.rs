// Application layer - Use case interactors

pub mod container;
pub mod probe_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use probe_interactor::{OutputFormat, ProbeInteractor, ProbeRequest, ProbeResponse};
