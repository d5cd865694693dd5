//! Reserved kernel codes.
//!
//! The lowest four codes belong to the process lifecycle state machine
//! (success, yield, exit, end). A fifth marker, FINALIZED, denotes the
//! terminal state of the whole lifecycle and lives outside the byte range:
//! its code is 0x255 (597), kept wide so it can never be confused with an
//! in-range octet such as 0x55.

use super::octet::Octet;
use core::fmt;

/// A reserved lifecycle code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reserved {
    /// 0x00: operation completed successfully.
    Success,
    /// 0x01: process yielded control.
    Yielding,
    /// 0x02: process exited externally.
    Exiting,
    /// 0x03: process terminated normally.
    Ending,
    /// 0x255: lifecycle completely ended. Out of the byte range.
    Finalized,
}

impl Reserved {
    /// All reserved codes in code order.
    pub const ALL: [Self; 5] = [
        Self::Success,
        Self::Yielding,
        Self::Exiting,
        Self::Ending,
        Self::Finalized,
    ];

    /// The logical code. Only FINALIZED exceeds 0xFF.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Success => 0x00,
            Self::Yielding => 0x01,
            Self::Exiting => 0x02,
            Self::Ending => 0x03,
            Self::Finalized => 0x255,
        }
    }

    /// The in-range octet for this code, or `None` for FINALIZED.
    #[inline]
    #[must_use]
    pub const fn octet(self) -> Option<Octet> {
        let code = self.code();
        if code <= 0xFF {
            Some(Octet::new(code as u8))
        } else {
            None
        }
    }

    /// Looks up the reserved code carried by an octet.
    ///
    /// ```
    /// use hyperbyte::{Octet, Reserved};
    ///
    /// assert_eq!(Reserved::from_octet(Octet::new(0x02)), Some(Reserved::Exiting));
    /// assert_eq!(Reserved::from_octet(Octet::new(0xFF)), None);
    /// ```
    #[must_use]
    pub fn from_octet(octet: Octet) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.code() == u16::from(octet.value()))
    }

    /// Constant name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Yielding => "YIELDING",
            Self::Exiting => "EXITING",
            Self::Ending => "ENDING",
            Self::Finalized => "FINALIZED",
        }
    }

    /// Short message for constrained displays.
    #[must_use]
    pub const fn short(self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Yielding => "YIELD",
            Self::Exiting => "EXIT",
            Self::Ending => "END",
            Self::Finalized => "FINAL",
        }
    }

    /// Verbose message.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Yielding => "Yielded (protothread)",
            Self::Exiting => "Exiting (protothread)",
            Self::Ending => "Ending (protothread)",
            Self::Finalized => "Lifecycle finalized",
        }
    }
}

impl fmt::Debug for Reserved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:#x})", self.name(), self.code())
    }
}

impl fmt::Display for Reserved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True iff the octet carries a reserved code (0x00..=0x03).
#[inline]
#[must_use]
pub fn is_reserved(octet: Octet) -> bool {
    Reserved::from_octet(octet).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_octets() {
        let reserved: Vec<u8> = Octet::all()
            .filter(|&o| is_reserved(o))
            .map(Octet::value)
            .collect();
        assert_eq!(reserved, vec![0x00, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_finalized_is_out_of_band() {
        assert_eq!(Reserved::Finalized.code(), 597);
        assert_eq!(Reserved::Finalized.octet(), None);
        // Truncating the code would land on 0x55 (BEFORE); it must not.
        assert!(!is_reserved(Octet::new(0x55)));
        assert!(!is_reserved(Octet::MAX));
    }

    #[test]
    fn test_in_range_roundtrip() {
        for r in &Reserved::ALL[..4] {
            let o = r.octet();
            assert!(o.is_some());
            assert_eq!(o.and_then(Reserved::from_octet), Some(*r));
        }
    }
}
