//! Per-function stack frame layout.
//!
//! Maps local variable names to `rbp`-relative byte offsets. Every
//! variable occupies a 4-byte slot; the first lands at `-4` and each
//! subsequent one 4 bytes further down. Offsets are never reused and the
//! map only grows while its function is being compiled.

/// One tracked variable: its name and `rbp`-relative offset.
#[derive(Debug)]
struct Slot<'a> {
    name: &'a str,
    offset: i32,
}

/// A per-function map from variable name to stack offset.
///
/// Lookup is by exact byte equality over a flat vector; at the handful of
/// locals a function has, a linear scan is the right tool.
///
/// Invariant: `next_offset == -4 - 4 * len` at all times.
#[derive(Debug)]
pub(super) struct StackFrame<'a> {
    slots: Vec<Slot<'a>>,
    next_offset: i32,
}

impl<'a> StackFrame<'a> {
    /// Creates an empty frame with the next free slot at `-4`.
    pub(super) fn new() -> Self {
        StackFrame {
            slots: Vec::new(),
            next_offset: -4,
        }
    }

    /// Registers a new variable and returns its allocated offset.
    ///
    /// Duplicate names get a fresh slot; the most recent registration
    /// wins lookups. There is no scope tracking by design.
    pub(super) fn add(&mut self, name: &'a str) -> i32 {
        let offset = self.next_offset;
        self.slots.push(Slot { name, offset });
        self.next_offset -= 4;
        offset
    }

    /// Looks up the offset for `name`, or `None` when it was never
    /// registered.
    pub(super) fn find(&self, name: &str) -> Option<i32> {
        self.slots
            .iter()
            .rev()
            .find(|slot| slot.name == name)
            .map(|slot| slot.offset)
    }

    /// Builds the memory operand for `name`, e.g. `[rbp-4]`.
    ///
    /// The sign is always explicit: `[rbp-N]` below the base pointer,
    /// `[rbp+N]` above it. Unregistered names fall back to the not-found
    /// sentinel offset 0; with no scope checking in the pipeline that
    /// case only arises for source that was wrong anyway.
    pub(super) fn operand(&self, name: &str) -> String {
        let offset = self.find(name).unwrap_or(0);
        format!("[rbp{:+}]", offset)
    }
}
