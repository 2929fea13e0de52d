use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Receiver, mutex::Mutex};
use embedded_hal_async::delay::DelayNs;

use crate::{
    config::Config,
    counter::Counter,
    error::Error,
    frame::{self, FrameBuf},
    handler,
    registry::{self, FrameDescriptor, Handler},
    sensor::TemperatureSensor,
    transport::{InboundFrame, Transport},
};

/// Routes inbound frames to their handlers and
/// sends the handlers' responses.
///
/// Every operation takes `&self`; the transport and sensor sit behind
/// async mutexes and the counter behind a blocking one, so a single
/// dispatcher may serve several tasks.
pub struct Dispatcher<M, T, S, D>
where
    M: RawMutex,
    T: Transport,
    S: TemperatureSensor,
    D: DelayNs + Clone,
{
    transport: Mutex<M, T>,
    #[cfg_attr(not(feature = "sensor"), allow(dead_code))]
    sensor: Mutex<M, S>,
    delay: D,
    counter: Counter<M>,
    config: Config,
}

impl<M, T, S, D> Dispatcher<M, T, S, D>
where
    M: RawMutex,
    T: Transport,
    S: TemperatureSensor,
    D: DelayNs + Clone,
{
    pub const fn new(transport: T, sensor: S, delay: D, config: Config) -> Self {
        Self {
            transport: Mutex::new(transport),
            sensor: Mutex::new(sensor),
            delay,
            counter: Counter::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn counter(&self) -> &Counter<M> {
        &self.counter
    }

    /// The peer enabled or disabled notifications.
    pub fn on_subscription_changed(&self, enabled: bool) {
        info!(
            "notifications {=str}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    /// Handle one inbound frame to completion.
    ///
    /// Unrecognized frames and handler failures are logged and
    /// dropped; at most one response is sent per frame.
    pub async fn on_received(&self, frame: &[u8]) {
        trace!("received payload {=[u8]:x}", frame);

        let Some(descriptor) = registry::lookup(frame) else {
            match frame.first() {
                Some(&opcode) => error!("invalid opcode received {=u8:#x}", opcode),
                None => error!("empty frame discarded"),
            }

            return;
        };

        if let Err(err) = self.dispatch(descriptor, frame).await {
            error!(
                "error {=i32} from opcode {=u8:#x}",
                err.code(),
                descriptor.opcode.byte()
            );
        }
    }

    /// Process delivered frames one at a time, in order, forever.
    pub async fn run<const N: usize, const K: usize>(
        &self,
        inbox: Receiver<'_, M, InboundFrame<N>, K>,
    ) {
        loop {
            let frame = inbox.receive().await;

            self.on_received(&frame).await;
        }
    }

    async fn dispatch(&self, descriptor: &FrameDescriptor, frame: &[u8]) -> Result<(), Error> {
        let response = self.respond(descriptor, frame).await?;

        debug_assert_eq!(descriptor.response_len, response.len());

        self.transport
            .lock()
            .await
            .send(&response)
            .await
            .map_err(|_| Error::Transport)
    }

    async fn respond(&self, descriptor: &FrameDescriptor, frame: &[u8]) -> Result<FrameBuf, Error> {
        let opcode = descriptor.opcode;

        let response = match descriptor.handler {
            Handler::Ping => frame::encode(opcode, &handler::ping(frame::decode(frame)?))?,
            Handler::Counter => frame::encode(
                opcode,
                &handler::counter(&self.counter, frame::decode(frame)?),
            )?,
            Handler::Delay => {
                let report = handler::delay(
                    self.delay.clone(),
                    self.config.delay_ms,
                    frame::decode(frame)?,
                )
                .await;

                frame::encode(opcode, &report)?
            }
            #[cfg(feature = "sensor")]
            Handler::Temperature => {
                let mut sensor = self.sensor.lock().await;
                let report = handler::temperature(&mut *sensor, frame::decode(frame)?).await?;

                frame::encode(opcode, &report)?
            }
            #[cfg(feature = "sensor")]
            Handler::TempSensorConfig => {
                let mut sensor = self.sensor.lock().await;
                let report = handler::configure_sensor(&mut *sensor, frame::decode(frame)?).await;

                frame::encode(opcode, &report)?
            }
        };

        Ok(response)
    }
}
