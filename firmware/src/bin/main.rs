#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::{error, info};
use defmt_rtt as _;
use embassy_embedded_hal::shared_bus::blocking::i2c::I2cDevice;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Blocking, Config as I2cConfig, I2c};
use embassy_rp::peripherals::{I2C0, UART1};
use embassy_rp::uart::{Async, Config as UartConfig, Uart, UartRx};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Delay, Duration, Instant, Ticker};
use glove_firmware::{
    pump_rx, Glove, Hand, Junxion, RxQueue, SerialPort, DEFAULT_GLOVE_CONFIG, TICK_MS,
};
use junxion_proto::JUNXION_BAUDRATE;
use static_cell::StaticCell;

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => embassy_rp::uart::InterruptHandler<UART1>;
});

type SensorBus = I2c<'static, I2C0, Blocking>;
type SharedI2c = I2cDevice<'static, NoopRawMutex, SensorBus>;

/// Bytes received from the host, drained by the glove task every tick.
static RX_QUEUE: RxQueue = RxQueue::new();

/// Sensor bus shared by the bend sensors and the button expander.
static I2C_BUS: StaticCell<Mutex<NoopRawMutex, RefCell<SensorBus>>> = StaticCell::new();

/// Heartbeat period in ticks.
const HEARTBEAT_TICKS: u32 = 50;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Glove controller starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = JUNXION_BAUDRATE;

    let uart = Uart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let (tx, rx) = uart.split();
    let serial = SerialPort::new(&RX_QUEUE, tx);

    // --- Sensor Setup ---
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, I2cConfig::default());
    let bus = I2C_BUS.init(Mutex::new(RefCell::new(i2c)));

    let thumbs = [
        Input::new(p.PIN_10, Pull::Up),
        Input::new(p.PIN_11, Pull::Up),
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
    ];
    let hand = Hand::probe(|| I2cDevice::new(bus), &mut Delay, thumbs);

    // On-board LED as heartbeat
    let led = Output::new(p.PIN_25, Level::Low);

    // Spawn tasks
    spawner.spawn(rx_task(rx)).unwrap();
    spawner.spawn(glove_task(hand, serial, led)).unwrap();

    info!("Glove controller initialized, waiting for host...");
}

/// RX task - moves UART bytes into the receive queue.
#[embassy_executor::task]
async fn rx_task(mut rx: UartRx<'static, Async>) {
    pump_rx(&mut rx, &RX_QUEUE).await
}

/// Glove task - samples the hand and runs the Junxion protocol every tick.
#[embassy_executor::task]
async fn glove_task(
    mut hand: Hand<SharedI2c>,
    mut serial: SerialPort<'static>,
    mut led: Output<'static>,
) {
    let mut glove = Glove::new(&DEFAULT_GLOVE_CONFIG, hand.sensors_present());
    let mut junxion = Junxion::new();
    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));
    let mut ticks: u32 = 0;

    loop {
        hand.sample(&mut glove, Instant::now().as_millis());

        if let Err(e) = junxion.update(&glove, &mut serial) {
            error!("Junxion update failed: {}", e);
        }

        ticks = ticks.wrapping_add(1);
        if ticks % HEARTBEAT_TICKS == 0 {
            led.toggle();
        }

        ticker.next().await;
    }
}
