use thiserror::Error;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("steps must be positive and even, got {steps}")]
    InvalidArgument {
        steps: i64
    },
    #[error("integrand failed at x = {x}")]
    CallableFault {
        x: f64,
        #[source]
        source: BoxedError
    }
}

impl IntegrationError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, IntegrationError::InvalidArgument { .. })
    }
}
