//! Continuation-style adapter over the async facade.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::error::{Error, Result};

/// Run `future` on the current tokio runtime and hand its outcome to
/// exactly one of the two continuations, exactly once.
///
/// Continuations run on a runtime worker thread. Aborting the returned
/// handle before the future completes drops both continuations uncalled.
///
/// Must be called from within a tokio runtime.
///
/// # Example
///
/// ```rust,ignore
/// let client = client.clone();
/// sfsdk_net::dispatch(
///     async move { client.describe_global().await },
///     |global| println!("{} object types", global.sobjects.len()),
///     |err| eprintln!("describeGlobal failed: {err}"),
/// );
/// ```
pub fn dispatch<T, Fut, S, F>(future: Fut, on_success: S, on_failure: F) -> JoinHandle<()>
where
    T: Send + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
    S: FnOnce(T) + Send + 'static,
    F: FnOnce(Error) + Send + 'static,
{
    tokio::spawn(async move {
        match future.await {
            Ok(value) => on_success(value),
            Err(err) => on_failure(err),
        }
    })
}
