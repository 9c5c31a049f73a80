//! UART transport for the Junxion dispatcher.
//!
//! The dispatcher polls its serial port once per tick and must never wait for
//! input. Received bytes are therefore moved by [`pump_rx`], running in its
//! own task, into an [`RxQueue`]; [`SerialPort`] reads from that queue without
//! blocking and writes straight to the UART.
//!
//! # Pins
//!
//! Uses UART1:
//! - GPIO 8: TX
//! - GPIO 9: RX

use defmt::warn;
use embassy_rp::uart::{Async, Error as UartError, UartRx, UartTx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::pipe::Pipe;
use embedded_io::{ErrorKind, ErrorType, Read, ReadReady, Write};

/// Bytes buffered between the receive task and the tick loop.
pub const RX_QUEUE_LEN: usize = 64;

pub type RxQueue = Pipe<CriticalSectionRawMutex, RX_QUEUE_LEN>;

/// UART failure seen by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct SerialError(pub UartError);

impl embedded_io::Error for SerialError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Non-blocking serial port over a receive queue and a UART transmitter.
pub struct SerialPort<'d> {
    rx: &'d RxQueue,
    tx: UartTx<'d, Async>,
}

impl<'d> SerialPort<'d> {
    #[must_use]
    pub fn new(rx: &'d RxQueue, tx: UartTx<'d, Async>) -> Self {
        Self { rx, tx }
    }
}

impl ErrorType for SerialPort<'_> {
    type Error = SerialError;
}

impl Read for SerialPort<'_> {
    /// Returns 0 when the queue is empty; check [`ReadReady`] first.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(self.rx.try_read(buf).unwrap_or(0))
    }
}

impl ReadReady for SerialPort<'_> {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.rx.is_empty())
    }
}

impl Write for SerialPort<'_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.tx.blocking_write(buf).map_err(SerialError)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush().map_err(SerialError)
    }
}

/// Move received bytes into `queue` forever.
///
/// Bytes that arrive while the queue is full are dropped; the frame parser
/// resynchronizes on the next header.
pub async fn pump_rx(rx: &mut UartRx<'_, Async>, queue: &RxQueue) -> ! {
    let mut byte = [0u8; 1];
    loop {
        if let Err(e) = rx.read(&mut byte).await {
            warn!("uart rx error: {:?}", e);
            continue;
        }
        if queue.try_write(&byte).is_err() {
            warn!("rx queue full, dropping byte");
        }
    }
}
