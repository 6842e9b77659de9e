/// Input event detected in a drained serial batch.
///
/// Transient: produced by a detector, consumed inline by the dispatcher,
/// never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ButtonPressed,
    SwitchChanged(bool),
}

#[derive(Debug, thiserror::Error)]
#[error("switch chars must be distinct, got {0:#04x} for both off and on")]
pub struct SwitchConfigError(pub u8);

/// Single-char momentary button.
#[derive(Debug, Clone, Copy)]
pub struct ButtonDetector {
    press_byte: u8,
}

impl ButtonDetector {
    pub fn new(press_byte: u8) -> Self {
        Self { press_byte }
    }

    /// At most one press per batch: the first matching byte wins and the
    /// rest of the batch is ignored (debounce-by-batch).
    pub fn recv(&self, batch: &[u8]) -> Vec<Event> {
        if batch.contains(&self.press_byte) {
            log::debug!("button: pressed");
            vec![Event::ButtonPressed]
        } else {
            Vec::new()
        }
    }
}

/// Two-char off/on toggle switch.
#[derive(Debug, Clone, Copy)]
pub struct SwitchDetector {
    off_byte: u8,
    on_byte: u8,
}

impl SwitchDetector {
    pub fn new(off_byte: u8, on_byte: u8) -> Result<Self, SwitchConfigError> {
        if off_byte == on_byte {
            return Err(SwitchConfigError(off_byte));
        }
        Ok(Self { off_byte, on_byte })
    }

    /// Every matching byte produces a change event, in arrival order;
    /// multiple transitions within one poll interval are all reported.
    pub fn recv(&self, batch: &[u8]) -> Vec<Event> {
        let mut events = Vec::new();
        for &byte in batch {
            let value = if byte == self.off_byte {
                false
            } else if byte == self.on_byte {
                true
            } else {
                continue;
            };
            log::debug!("switch: {}", i32::from(value));
            events.push(Event::SwitchChanged(value));
        }
        events
    }
}

/// Event-detection policy applied to each drained batch, selected by
/// configuration at startup.
#[derive(Debug, Clone, Copy)]
pub enum Detector {
    Button(ButtonDetector),
    Switch(SwitchDetector),
}

impl Detector {
    pub fn recv(&self, batch: &[u8]) -> Vec<Event> {
        match self {
            Detector::Button(button) => button.recv(batch),
            Detector::Switch(switch) => switch.recv(batch),
        }
    }
}
