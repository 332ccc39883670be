//! core/driver.rs
//! Ownership of the one-second tick.
//!
//! The GUI never holds a timer handle. Instead it asks the driver which
//! generation (if any) should be ticking; the subscription is keyed on that
//! number, so bumping it tears the old timer down and starts a new one.
//! Every tick carries the generation it was made for and is dropped on
//! mismatch, so a late tick can't touch a superseded session.

#[derive(Debug, Default)]
pub struct TickDriver {
    generation: u64,
    armed: bool,
}

impl TickDriver {
    /// Cancel whatever was ticking and start a new generation.
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        self.generation
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.armed = false;
    }

    /// Generation that should currently be ticking.
    pub fn armed(&self) -> Option<u64> {
        self.armed.then_some(self.generation)
    }

    pub fn accepts(&self, generation: u64) -> bool {
        self.armed && generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disarmed() {
        let d = TickDriver::default();
        assert_eq!(d.armed(), None);
        assert!(!d.accepts(0));
    }

    #[test]
    fn arm_replaces_previous_generation() {
        let mut d = TickDriver::default();
        let first = d.arm();
        assert!(d.accepts(first));

        let second = d.arm();
        assert_ne!(first, second);
        assert!(!d.accepts(first));
        assert!(d.accepts(second));
        assert_eq!(d.armed(), Some(second));
    }

    #[test]
    fn cancel_rejects_everything_until_rearmed() {
        let mut d = TickDriver::default();
        let g = d.arm();
        d.cancel();
        assert_eq!(d.armed(), None);
        assert!(!d.accepts(g));

        let next = d.arm();
        assert!(next != g);
        assert!(d.accepts(next));
    }
}
