use std::{
    fmt,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures::future::{BoxFuture, FutureExt};

use crate::error::Error;

/// A future returned by [`Speaker::speak`](crate::Speaker::speak) that waits
/// until the emission is complete.
#[must_use = "You need to call `.await` to wait the emission to complete"]
pub struct WaitFuture<'a> {
    future: BoxFuture<'a, Result<(), Error>>,
}

impl<'a> WaitFuture<'a> {
    /// Creates a new `WaitFuture` from the specified future.
    pub fn new(future: impl Future<Output = Result<(), Error>> + Send + 'a) -> Self {
        Self {
            future: future.boxed(),
        }
    }

    /// Creates a new `WaitFuture` which is immediately complete.
    pub fn ready() -> Self {
        Self::new(async { Ok(()) })
    }
}

impl Future for WaitFuture<'_> {
    type Output = Result<(), Error>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.poll_unpin(cx)
    }
}

impl fmt::Debug for WaitFuture<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaitFuture").finish_non_exhaustive()
    }
}
