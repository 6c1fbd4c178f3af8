use thiserror::Error;

pub type WtResult<T> = Result<T, WtError>;

/// Shared numeric fault reported by the engine's float validation.
#[derive(Error, Debug)]
pub enum WtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
