use core::cell::Cell;

use embassy_sync::blocking_mutex::{raw::RawMutex, Mutex};

/// The COUNTER opcode's state.
///
/// Starts at zero, is never reset, and wraps
/// on overflow.
pub struct Counter<M: RawMutex> {
    count: Mutex<M, Cell<u32>>,
}

impl<M: RawMutex> Default for Counter<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> Counter<M> {
    pub const fn new() -> Self {
        Self {
            count: Mutex::new(Cell::new(0)),
        }
    }

    /// Increment the counter by 1 and return the new value.
    #[inline]
    pub fn increment(&self) -> u32 {
        self.count.lock(|count| {
            let next = count.get().wrapping_add(1);
            count.set(next);

            next
        })
    }

    /// Get the current value of the counter.
    #[inline]
    pub fn read(&self) -> u32 {
        self.count.lock(Cell::get)
    }

    #[cfg(test)]
    pub(crate) fn set(&self, value: u32) {
        self.count.lock(|count| count.set(value));
    }
}

#[cfg(test)]
mod tests {
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::Counter;

    #[test]
    fn starts_at_zero() {
        let counter = Counter::<NoopRawMutex>::new();

        assert_eq!(0, counter.read());
    }

    #[test]
    fn sequence() {
        let counter = Counter::<NoopRawMutex>::new();

        for expected in 1..=10 {
            assert_eq!(expected, counter.increment());
            assert_eq!(expected, counter.read());
        }
    }

    #[test]
    fn wraps() {
        let counter = Counter::<NoopRawMutex>::new();
        counter.set(u32::MAX - 1);

        assert_eq!(u32::MAX, counter.increment());
        assert_eq!(0, counter.increment());
        assert_eq!(1, counter.increment());
    }
}
