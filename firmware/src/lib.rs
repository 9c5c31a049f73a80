//! Glove controller firmware for RP2040.
//!
//! This crate provides the board side of the glove controller: it reads the
//! bend sensors and buttons, runs gesture detection, and talks to the host
//! over the Junxion serial protocol.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and, every tick:
//! 1. Reads the thumb buttons, the finger buttons and every bend sensor
//! 2. Feeds the samples to the per-finger gesture engines
//! 3. Answers pending host commands and, while streaming, sends a data frame
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | UART1 TX | 8    | Junxion serial transmit (115200 baud, 8N1) |
//! | UART1 RX | 9    | Junxion serial receive |
//! | I2C0 SDA | 4    | Bend sensors and button expander |
//! | I2C0 SCL | 5    | Bend sensors and button expander |
//! | Thumbs   | 10-13 | Thumb buttons |
//! | LED      | 25   | On-board LED (heartbeat) |
//!
//! # Architecture
//!
//! Two Embassy tasks:
//!
//! - **RX Task**: Moves UART bytes into a queue ([`serial::pump_rx`])
//! - **Glove Task**: Ticks at a fixed rate, sampling the [`hand::Hand`] and
//!   running [`Junxion::update`] over a [`serial::SerialPort`]
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)

#![no_std]

// Re-export core types for convenience
pub use glove_core::{Glove, GloveConfig, Junxion, JunxionError, PinAdapter, DEFAULT_GLOVE_CONFIG};

pub mod hand;
pub mod serial;

pub use hand::Hand;
pub use serial::{pump_rx, RxQueue, SerialError, SerialPort};

/// Period of the sampling and protocol loop.
pub const TICK_MS: u64 = 10;
