//! Host test support: mock hardware and a stepping simulator for async tasks.

use core::cell::{Cell, RefCell};
use core::future::Future;
use core::pin::Pin;
use std::boxed::Box;
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard};
use std::vec::Vec;

use embassy_futures::poll_once;
use embassy_time::{Duration, MockDriver};

use crate::hal::{
    BumpSensor, Buzzer, Color, ColorLed, EdgeTrigger, InterruptPort, ModeButtons, ModeInputs,
    Motor, MotorCommand, OverrideSwitch, StatusLed,
};
use crate::system::reading::SensorReading;

/// The mock clock is process global; simulations take turns.
static CLOCK: Mutex<()> = Mutex::new(());

/// Simulation step
pub const TICK: Duration = Duration::from_millis(1);

type Task<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// Runs a set of tasks against the mock clock, polling each once per [`TICK`].
pub struct Sim<'a> {
    tasks: Vec<Option<Task<'a>>>,
    _clock: MutexGuard<'static, ()>,
}

impl<'a> Sim<'a> {
    /// Takes the mock clock and resets it to zero.
    pub fn new() -> Self {
        let clock = CLOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        MockDriver::get().reset();
        Self {
            tasks: Vec::new(),
            _clock: clock,
        }
    }

    /// Adds a task; tasks are identified by spawn order.
    pub fn spawn(&mut self, task: impl Future<Output = ()> + 'a) {
        self.tasks.push(Some(Box::pin(task)));
    }

    /// Polls every unfinished task once, then advances the clock by one tick.
    pub fn step(&mut self) {
        self.poll_all();
        MockDriver::get().advance(TICK);
    }

    /// Steps for `duration` of simulated time.
    pub fn run_for(&mut self, duration: Duration) {
        for _ in 0..duration.as_ticks() / TICK.as_ticks() {
            self.step();
        }
        self.poll_all();
    }

    /// Steps until `done` holds or `limit` has elapsed. Returns whether `done` held.
    pub fn run_until(&mut self, limit: Duration, mut done: impl FnMut() -> bool) -> bool {
        for _ in 0..limit.as_ticks() / TICK.as_ticks() {
            self.poll_all();
            if done() {
                return true;
            }
            MockDriver::get().advance(TICK);
        }
        self.poll_all();
        done()
    }

    /// Returns `true` if task `index` ran to completion.
    pub fn is_finished(&self, index: usize) -> bool {
        self.tasks[index].is_none()
    }

    fn poll_all(&mut self) {
        for slot in self.tasks.iter_mut() {
            let finished = match slot {
                Some(task) => poll_once(task.as_mut()).is_ready(),
                None => false,
            };
            if finished {
                *slot = None;
            }
        }
    }
}

/// Mode buttons whose state the test sets
#[derive(Clone, Default)]
pub struct MockButtons(Rc<Cell<ModeInputs>>);

impl MockButtons {
    /// Sets the pressed buttons.
    pub fn press(&self, inputs: ModeInputs) {
        self.0.set(inputs);
    }
}

impl ModeButtons for MockButtons {
    fn sample(&mut self) -> ModeInputs {
        self.0.get()
    }
}

/// Status LED counting toggles and recording explicit sets
#[derive(Clone, Default)]
pub struct MockStatusLed {
    on: Rc<Cell<bool>>,
    toggles: Rc<Cell<u32>>,
    sets: Rc<RefCell<Vec<bool>>>,
}

impl MockStatusLed {
    /// Current level
    pub fn is_on(&self) -> bool {
        self.on.get()
    }

    /// Number of toggles so far
    pub fn toggles(&self) -> u32 {
        self.toggles.get()
    }

    /// Every explicit `set` in order
    pub fn sets(&self) -> Vec<bool> {
        self.sets.borrow().clone()
    }
}

impl StatusLed for MockStatusLed {
    fn set(&mut self, on: bool) {
        self.on.set(on);
        self.sets.borrow_mut().push(on);
    }

    fn toggle(&mut self) {
        self.on.set(!self.on.get());
        self.toggles.set(self.toggles.get() + 1);
    }
}

/// Motor recording every command
#[derive(Clone, Default)]
pub struct MockMotor(Rc<RefCell<Vec<MotorCommand>>>);

impl MockMotor {
    /// Every command in order
    pub fn commands(&self) -> Vec<MotorCommand> {
        self.0.borrow().clone()
    }
}

impl Motor for MockMotor {
    fn drive(&mut self, command: MotorCommand) {
        self.0.borrow_mut().push(command);
    }
}

/// Colour LED recording every colour shown
#[derive(Clone, Default)]
pub struct MockColorLed(Rc<RefCell<Vec<Color>>>);

impl MockColorLed {
    /// Every colour in order
    pub fn colors(&self) -> Vec<Color> {
        self.0.borrow().clone()
    }

    /// Colour currently shown
    pub fn current(&self) -> Option<Color> {
        self.0.borrow().last().copied()
    }
}

impl ColorLed for MockColorLed {
    fn set_color(&mut self, color: Color) {
        self.0.borrow_mut().push(color);
    }
}

/// Bump sensor with test controlled levels, counting reads and arms
#[derive(Clone, Default)]
pub struct MockBumpSensor {
    bits: Rc<Cell<u8>>,
    reads: Rc<Cell<u32>>,
    arms: Rc<Cell<u32>>,
}

impl MockBumpSensor {
    /// Sets the pressed channels.
    pub fn set(&self, bits: u8) {
        self.bits.set(bits);
    }

    /// Number of reads so far
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }

    /// Number of times the edge interrupt was armed
    pub fn arms(&self) -> u32 {
        self.arms.get()
    }
}

impl BumpSensor for MockBumpSensor {
    fn read(&mut self) -> SensorReading {
        self.reads.set(self.reads.get() + 1);
        SensorReading::from_bits(self.bits.get())
    }
}

impl EdgeTrigger for MockBumpSensor {
    fn arm(&mut self) {
        self.arms.set(self.arms.get() + 1);
    }
}

/// One call made on an [`InterruptPort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortCall {
    /// `status()` was read
    Status,
    /// `clear()` was called
    Clear,
}

/// Interrupt port with a latched status, recording the call order
#[derive(Clone, Default)]
pub struct MockPort {
    status: Rc<Cell<u8>>,
    calls: Rc<RefCell<Vec<PortCall>>>,
}

impl MockPort {
    /// Latches the channels that raised the interrupt.
    pub fn raise(&self, bits: u8) {
        self.status.set(bits);
    }

    /// Every call in order
    pub fn calls(&self) -> Vec<PortCall> {
        self.calls.borrow().clone()
    }
}

impl InterruptPort for MockPort {
    fn status(&mut self) -> SensorReading {
        self.calls.borrow_mut().push(PortCall::Status);
        SensorReading::from_bits(self.status.get())
    }

    fn clear(&mut self) {
        self.calls.borrow_mut().push(PortCall::Clear);
        self.status.set(0);
    }
}

/// One call made on a [`Buzzer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerCall {
    /// `tone(hz)`
    Tone(u32),
    /// `silence()`
    Silence,
}

/// Buzzer recording every call
#[derive(Clone, Default)]
pub struct MockBuzzer(Rc<RefCell<Vec<BuzzerCall>>>);

impl MockBuzzer {
    /// Every call in order
    pub fn calls(&self) -> Vec<BuzzerCall> {
        self.0.borrow().clone()
    }

    /// Number of tones started
    pub fn tones(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|call| matches!(call, BuzzerCall::Tone(_)))
            .count()
    }

    /// Returns `true` if the last call left the buzzer sounding.
    pub fn is_sounding(&self) -> bool {
        matches!(self.0.borrow().last(), Some(BuzzerCall::Tone(_)))
    }
}

impl Buzzer for MockBuzzer {
    fn tone(&mut self, frequency_hz: u32) {
        self.0.borrow_mut().push(BuzzerCall::Tone(frequency_hz));
    }

    fn silence(&mut self) {
        self.0.borrow_mut().push(BuzzerCall::Silence);
    }
}

/// Override switch whose level the test sets
#[derive(Clone, Default)]
pub struct MockSwitch(Rc<Cell<bool>>);

impl MockSwitch {
    /// Presses or releases the switch.
    pub fn set(&self, on: bool) {
        self.0.set(on);
    }
}

impl OverrideSwitch for MockSwitch {
    fn is_on(&mut self) -> bool {
        self.0.get()
    }
}
