//! The byte-stream collaborator.
//!
//! Outbound frames leave through a [`Transport`]. Inbound frames arrive
//! through the stack's receive callback, which hands them to the
//! dispatcher task via an [`Inbox`].

use embassy_sync::{
    blocking_mutex::raw::RawMutex,
    channel::{Channel, Sender, TrySendError},
};
use embedded_io_async::Write;
use heapless::Vec;

use crate::error::Rejected;

/// Describes outbound frame channels.
#[allow(async_fn_in_trait)]
pub trait Transport {
    type Error: core::fmt::Debug;

    /// Send one complete frame.
    async fn send(&mut self, frame: &[u8]) -> Result<(), Self::Error>;
}

/// Frames written to a UART-style stream service.
pub struct StreamTransport<W: Write> {
    port: W,
}

impl<W: Write> StreamTransport<W> {
    pub const fn new(port: W) -> Self {
        Self { port }
    }

    pub fn into_inner(self) -> W {
        self.port
    }
}

impl<W: Write> Transport for StreamTransport<W> {
    type Error = W::Error;

    async fn send(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        self.port.write_all(frame).await?;
        self.port.flush().await
    }
}

/// One inbound frame, copied out of the stack's receive buffer.
pub type InboundFrame<const N: usize> = Vec<u8, N>;

/// Queue between the receive callback and the dispatcher task.
///
/// `K` bounds the frames in flight; `K = 1` keeps a single frame
/// outstanding at a time.
pub type Inbox<M, const N: usize, const K: usize> = Channel<M, InboundFrame<N>, K>;

/// Hand received bytes to the dispatcher task without blocking.
///
/// Meant to be called from the stack's synchronous receive callback.
pub fn deliver<M: RawMutex, const N: usize, const K: usize>(
    inbox: &Sender<'_, M, InboundFrame<N>, K>,
    bytes: &[u8],
) -> Result<(), Rejected> {
    let frame = InboundFrame::<N>::from_slice(bytes).map_err(|_| Rejected::Oversized)?;

    inbox.try_send(frame).map_err(|_: TrySendError<_>| Rejected::Busy)
}
