use crate::error::{RecompError, Result};

/// Access to the supplement tools.
///
/// Starts locked; one acknowledgement unlocks it for the rest of the
/// session. There is no transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessGate {
    #[default]
    Locked,
    Unlocked,
}

impl AccessGate {
    pub fn acknowledge(&mut self) {
        *self = AccessGate::Unlocked;
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self, AccessGate::Unlocked)
    }

    pub fn ensure_unlocked(&self) -> Result<()> {
        if self.is_unlocked() {
            Ok(())
        } else {
            Err(RecompError::Locked)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_locked() {
        let gate = AccessGate::default();
        assert!(!gate.is_unlocked());
        assert!(matches!(gate.ensure_unlocked(), Err(RecompError::Locked)));
    }

    #[test]
    fn test_acknowledge_is_terminal() {
        let mut gate = AccessGate::default();
        gate.acknowledge();
        gate.acknowledge();
        assert_eq!(gate, AccessGate::Unlocked);
        assert!(gate.ensure_unlocked().is_ok());
    }
}
