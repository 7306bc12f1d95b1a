//! Error handling and exit codes.

use fibdev_cli::ClientError;
use fibdev_core::{exit_codes, FibError};
use fibdev_session::SessionError;

/// Process exit code for the outcome of a run.
#[must_use]
pub fn exit_status(result: &anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => exit_code(err),
    }
}

/// Exit code for a failed run.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<ClientError>() {
        return match err {
            ClientError::Cancelled => exit_codes::ERROR_CANCELED,
            ClientError::Session(err) => session_code(err),
        };
    }
    if let Some(err) = err.downcast_ref::<SessionError>() {
        return session_code(err);
    }
    if let Some(err) = err.downcast_ref::<FibError>() {
        return fib_code(err);
    }
    exit_codes::ERROR_GENERIC
}

fn session_code(err: &SessionError) -> i32 {
    match err {
        SessionError::Busy => exit_codes::ERROR_BUSY,
        SessionError::Config(_) => exit_codes::ERROR_CONFIG,
        SessionError::Compute(err) => fib_code(err),
    }
}

fn fib_code(err: &FibError) -> i32 {
    match err {
        FibError::Config(_) | FibError::InvalidVariant(_) => exit_codes::ERROR_CONFIG,
        FibError::Allocation { .. }
        | FibError::CapacityExceeded { .. }
        | FibError::InvalidInput(_) => exit_codes::ERROR_GENERIC,
    }
}
