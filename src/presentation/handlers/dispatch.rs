use std::future::Future;

use crate::application::services::ServiceError;

/// Runs a downstream call on its own task so a dropped connection does not
/// cancel it; the result is simply discarded in that case.
pub async fn run_to_completion<F, T>(call: F) -> Result<T, ServiceError>
where
    F: Future<Output = Result<T, ServiceError>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(call)
        .await
        .map_err(|e| ServiceError::Aborted(e.to_string()))?
}
