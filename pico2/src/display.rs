//! Display driver for the 1.8" ST7735S panel (160x128, SPI).
//!
//! Pin mapping:
//! - DC: GPIO16
//! - CS: GPIO17
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Reset: GPIO20
//! - Backlight: GPIO21 (held high)

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7735s;
use mipidsi::options::{ColorOrder, Orientation, Rotation};
use mipidsi::Builder;
use static_cell::StaticCell;

/// Bytes staged per SPI transfer by the display interface.
const INTERFACE_BUFFER_LEN: usize = 512;

static INTERFACE_BUFFER: StaticCell<[u8; INTERFACE_BUFFER_LEN]> = StaticCell::new();

/// Display type alias for the ST7735S with a wired reset pin.
pub type RemoteDisplay<'d> = mipidsi::Display<
    SpiInterface<'static, ExclusiveDevice<Spi<'d, SPI0, Blocking>, Output<'d>, NoDelay>, Output<'d>>,
    ST7735s,
    Output<'d>,
>;

/// Initialize the panel in landscape.
///
/// Panics if called twice (the interface buffer is a single static) or if
/// the panel does not accept its init sequence.
pub fn init_display<'d>(
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
    rst: Output<'d>,
) -> RemoteDisplay<'d> {
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();
    let buffer = INTERFACE_BUFFER.init([0; INTERFACE_BUFFER_LEN]);
    let di = SpiInterface::new(spi_device, dc, buffer);

    // Native panel is 128x160 (portrait); rotate 90° for 160x128
    Builder::new(ST7735s, di)
        .reset_pin(rst)
        .display_size(128, 160)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .color_order(ColorOrder::Bgr)
        .init(&mut embassy_time::Delay)
        .unwrap()
}

/// SPI configuration for the ST7735S (15 MHz max write clock).
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 15_000_000;
    config
}
