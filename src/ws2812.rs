//! A [`PixelTransmitter`] that clocks WS2812 cells out of an RP2040 PIO state machine.
//!
//! The PIO program is assembled at startup. Each cell is one 24-bit word, shifted out most
//! significant bit first at [`WS2812_FREQUENCY_KHZ`].

use embassy_rp::Peri;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::program::{Assembler, JmpCondition, OutDestination, SetDestination, SideSet};
use embassy_rp::pio::{
    Common, Config, FifoJoin, Instance, LoadedProgram, Pio, PioPin, ShiftConfig, ShiftDirection,
    StateMachine,
};
use embassy_time::Timer;
use fixed::types::U24F8;

use crate::pio_irqs::Pio0Irqs;
use crate::{PixelTransmitter, WS2812_FREQUENCY_KHZ};

const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;
const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;
/// The line must stay low this long before cells latch a frame.
const RESET_DELAY_US: u64 = 55;

fn load_ws2812_program<'d, PIO: Instance>(common: &mut Common<'d, PIO>) -> LoadedProgram<'d, PIO> {
    let side_set = SideSet::new(false, 1, false);
    let mut assembler: Assembler<32> = Assembler::new_with_side_set(side_set);

    let mut wrap_target = assembler.label();
    let mut wrap_source = assembler.label();
    let mut do_zero = assembler.label();
    assembler.set_with_side_set(SetDestination::PINDIRS, 1, 0);
    assembler.bind(&mut wrap_target);
    assembler.out_with_delay_and_side_set(OutDestination::X, 1, T3 - 1, 0);
    assembler.jmp_with_delay_and_side_set(JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
    assembler.jmp_with_delay_and_side_set(JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
    assembler.bind(&mut do_zero);
    assembler.nop_with_delay_and_side_set(T2 - 1, 0);
    assembler.bind(&mut wrap_source);

    let program = assembler.assemble_with_wrap(wrap_source, wrap_target);
    common.load_program(&program)
}

/// WS2812 transmitter on one PIO state machine.
///
/// Keeps the PIO's common resources alive for as long as the state machine runs.
pub struct PioPixelTransmitter<'d, PIO: Instance, const S: usize> {
    _common: Common<'d, PIO>,
    sm: StateMachine<'d, PIO, S>,
}

impl<'d, PIO: Instance, const S: usize> PioPixelTransmitter<'d, PIO, S> {
    /// Loads the WS2812 program into `common` and starts `sm` driving `pin`.
    pub fn new(
        mut common: Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, S>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        let program = load_ws2812_program(&mut common);
        let mut cfg = Config::default();

        let out_pin = common.make_pio_pin(pin);
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&program, &[&out_pin]);

        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let ws2812_freq = U24F8::from_num(WS2812_FREQUENCY_KHZ);
        let bit_freq = ws2812_freq.saturating_mul_int(CYCLES_PER_BIT);
        cfg.clock_divider = clock_freq.saturating_div(bit_freq);

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_enable(true);

        Self {
            _common: common,
            sm,
        }
    }
}

impl PioPixelTransmitter<'static, embassy_rp::peripherals::PIO0, 0> {
    /// Binds PIO0's interrupt and drives `pin` from state machine 0.
    pub fn new_pio0(
        pio: Peri<'static, embassy_rp::peripherals::PIO0>,
        pin: Peri<'static, impl PioPin>,
    ) -> Self {
        let Pio { common, sm0, .. } = Pio::new(pio, Pio0Irqs);
        Self::new(common, sm0, pin)
    }
}

impl<PIO: Instance, const S: usize> PixelTransmitter for PioPixelTransmitter<'_, PIO, S> {
    async fn send(&mut self, packed_grb: u32) {
        // The top 24 bits of the word go out; the low byte is padding.
        self.sm.tx().wait_push(packed_grb.wrapping_shl(8)).await;
    }

    async fn end_frame(&mut self) {
        Timer::after_micros(RESET_DELAY_US).await;
    }
}
