use std::sync::Arc;

use crate::adapters::StdProcessAdapter;
use crate::app::probe_interactor::ProbeInteractor;
use crate::ports::ProcessPort;

pub trait AppContainer: Send + Sync {
    fn probe_interactor(&self) -> Arc<ProbeInteractor>;
}

pub struct DefaultAppContainer {
    probe_interactor: Arc<ProbeInteractor>,
}

impl DefaultAppContainer {
    pub fn new() -> Self {
        Self::with_process_port(Arc::new(StdProcessAdapter::new()))
    }

    pub fn with_process_port(process_port: Arc<dyn ProcessPort>) -> Self {
        Self {
            probe_interactor: Arc::new(ProbeInteractor::new(process_port)),
        }
    }
}

impl Default for DefaultAppContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContainer for DefaultAppContainer {
    fn probe_interactor(&self) -> Arc<ProbeInteractor> {
        Arc::clone(&self.probe_interactor)
    }
}
