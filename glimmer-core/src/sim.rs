//! Simulated bench for host tests
//!
//! Time is counted in ticks: every input poll costs one tick and every spin
//! iteration costs one tick. The input level follows a script of
//! `(level, ticks)` segments; past the end of the script it holds the last
//! level. Output transitions are recorded with the tick they happened at.

use core::cell::{Cell, RefCell};

use glimmer_hal::{InputPin, LoopDelay, OutputPin};
use heapless::Vec;

const MAX_EDGES: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub at: u32,
    pub high: bool,
}

impl Edge {
    pub const fn high(at: u32) -> Self {
        Self { at, high: true }
    }

    pub const fn low(at: u32) -> Self {
        Self { at, high: false }
    }
}

pub struct Bench {
    script: &'static [(bool, u32)],
    now: Cell<u32>,
    output_high: Cell<bool>,
    edges: RefCell<Vec<Edge, MAX_EDGES>>,
}

impl Bench {
    pub fn new(script: &'static [(bool, u32)]) -> Self {
        Self {
            script,
            now: Cell::new(0),
            output_high: Cell::new(false),
            edges: RefCell::new(Vec::new()),
        }
    }

    pub fn now(&self) -> u32 {
        self.now.get()
    }

    pub fn edges(&self) -> Vec<Edge, MAX_EDGES> {
        self.edges.borrow().clone()
    }

    pub fn input(&self) -> SimInput<'_> {
        SimInput { bench: self }
    }

    pub fn output(&self) -> SimOutput<'_> {
        SimOutput { bench: self }
    }

    pub fn delay(&self) -> SimDelay<'_> {
        SimDelay { bench: self }
    }

    fn level_at(&self, tick: u32) -> bool {
        let mut end = 0u32;
        for &(level, ticks) in self.script {
            end += ticks;
            if tick < end {
                return level;
            }
        }
        self.script.last().map_or(false, |&(level, _)| level)
    }

    fn advance(&self, ticks: u32) {
        self.now.set(self.now.get() + ticks);
    }

    fn drive(&self, high: bool) {
        if self.output_high.get() != high {
            self.output_high.set(high);
            self.edges
                .borrow_mut()
                .push(Edge {
                    at: self.now(),
                    high,
                })
                .expect("edge log full");
        }
    }
}

pub struct SimInput<'a> {
    bench: &'a Bench,
}

impl InputPin for SimInput<'_> {
    fn is_high(&mut self) -> bool {
        let level = self.bench.level_at(self.bench.now());
        self.bench.advance(1);
        level
    }
}

pub struct SimOutput<'a> {
    bench: &'a Bench,
}

impl OutputPin for SimOutput<'_> {
    fn set_high(&mut self) {
        self.bench.drive(true);
    }

    fn set_low(&mut self) {
        self.bench.drive(false);
    }

    fn toggle(&mut self) {
        self.bench.drive(!self.bench.output_high.get());
    }

    fn is_set_high(&self) -> bool {
        self.bench.output_high.get()
    }
}

pub struct SimDelay<'a> {
    bench: &'a Bench,
}

impl LoopDelay for SimDelay<'_> {
    fn spin(&mut self, loops: u16) {
        self.bench.advance(loops as u32);
    }
}
