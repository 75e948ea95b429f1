use crate::application::signal_engine::build_signal;
use crate::domain::entities::signal::Signal;
use crate::domain::error::DomainError;
use crate::domain::ports::clock::Clock;
use crate::domain::values::signal_request::SignalRequest;
use std::sync::Arc;
use tracing::info;

pub struct GenerateSignalUseCase {
    clock: Arc<dyn Clock>,
}

impl GenerateSignalUseCase {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn execute(&self, request: &SignalRequest, last_price: f64) -> Result<Signal, DomainError> {
        let now = self.clock.now();
        let signal = build_signal(request, last_price, now)?;
        info!(
            id = signal.id(),
            action = %signal.action(),
            entry = signal.entry(),
            confidence = signal.confidence().value(),
            "signal built"
        );
        Ok(signal)
    }
}
