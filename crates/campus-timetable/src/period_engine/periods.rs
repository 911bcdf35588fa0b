//! Period code lookup table.
//!
//! Each numbered period has an A and a B half-slot. Periods 1-10 run on a
//! uniform 30-minute grid from 09:00. From 10B onward the evening slots are
//! shorter and separated by break gaps, so the table is written out by hand
//! rather than computed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-slot letter of a period code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Half {
    A,
    B,
}

/// A period code such as `1A` or `12B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodCode {
    pub period: u8,
    pub half: Half,
}

impl PeriodCode {
    pub const fn new(period: u8, half: Half) -> Self {
        Self { period, half }
    }

    /// Parses a `<digits><letter>` token, ignoring surrounding whitespace and case.
    ///
    /// Returns `None` for anything that is not shaped like a period code. A
    /// well-formed code can still be absent from the table (e.g. `99A`).
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let split = token.find(|c: char| !c.is_ascii_digit())?;
        let (digits, rest) = token.split_at(split);
        if digits.is_empty() || digits.len() > 2 {
            return None;
        }
        let half = match rest {
            "A" | "a" => Half::A,
            "B" | "b" => Half::B,
            _ => return None,
        };
        let period = digits.parse::<u8>().ok()?;
        Some(Self { period, half })
    }

    /// Start of this half-slot in minutes since midnight, if the code exists.
    pub fn minute(self) -> Option<u32> {
        minute_of(self)
    }
}

impl fmt::Display for PeriodCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.half {
            Half::A => 'A',
            Half::B => 'B',
        };
        write!(f, "{}{}", self.period, letter)
    }
}

const fn code(period: u8, half: Half) -> PeriodCode {
    PeriodCode::new(period, half)
}

/// Every known half-slot with its start minute, in time order.
static PERIOD_TABLE: [(PeriodCode, u32); 30] = [
    (code(1, Half::A), 540),
    (code(1, Half::B), 570),
    (code(2, Half::A), 600),
    (code(2, Half::B), 630),
    (code(3, Half::A), 660),
    (code(3, Half::B), 690),
    (code(4, Half::A), 720),
    (code(4, Half::B), 750),
    (code(5, Half::A), 780),
    (code(5, Half::B), 810),
    (code(6, Half::A), 840),
    (code(6, Half::B), 870),
    (code(7, Half::A), 900),
    (code(7, Half::B), 930),
    (code(8, Half::A), 960),
    (code(8, Half::B), 990),
    (code(9, Half::A), 1020),
    (code(9, Half::B), 1050),
    (code(10, Half::A), 1080),
    // evening slots: 25-minute halves with a 5-minute break before each A
    (code(10, Half::B), 1105),
    (code(11, Half::A), 1135),
    (code(11, Half::B), 1160),
    (code(12, Half::A), 1190),
    (code(12, Half::B), 1215),
    (code(13, Half::A), 1245),
    (code(13, Half::B), 1270),
    (code(14, Half::A), 1300),
    (code(14, Half::B), 1325),
    (code(15, Half::A), 1355),
    (code(15, Half::B), 1380),
];

/// Looks up the start minute of a period code.
pub fn minute_of(code: PeriodCode) -> Option<u32> {
    PERIOD_TABLE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, minute)| *minute)
}

/// Parses and looks up a raw token in one step.
pub fn lookup(token: &str) -> Option<u32> {
    PeriodCode::parse(token).and_then(minute_of)
}

/// Returns the half-slot that starts exactly at `minute`, if any.
pub fn code_at(minute: u32) -> Option<PeriodCode> {
    PERIOD_TABLE
        .iter()
        .find(|(_, m)| *m == minute)
        .map(|(c, _)| *c)
}

/// All half-slots in time order, for drawing period labels.
pub fn entries() -> impl Iterator<Item = (PeriodCode, u32)> {
    PERIOD_TABLE.iter().copied()
}
