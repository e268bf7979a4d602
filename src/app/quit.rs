/// Keys that quit the demo when all are held at once. Escape does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboKey {
    Four,
    Zero,
    One,
}

impl ComboKey {
    fn index(self) -> usize {
        match self {
            ComboKey::Four => 0,
            ComboKey::Zero => 1,
            ComboKey::One => 2,
        }
    }
}

#[derive(Debug, Default)]
pub struct QuitCombo {
    held: [bool; 3],
}

impl QuitCombo {
    /// Records a press or release. Returns true once every combo key is down.
    pub fn key(&mut self, key: ComboKey, pressed: bool) -> bool {
        self.held[key.index()] = pressed;
        self.is_held()
    }
    pub fn is_held(&self) -> bool {
        self.held.iter().all(|held| *held)
    }
}
