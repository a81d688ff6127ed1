#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ViewPort {
    pub height: u16,
    pub width: u16,
}

impl ViewPort {
    pub fn new(height: u16, width: u16) -> Self {
        Self { height, width }
    }

    pub fn get_last_row(&self) -> usize {
        usize::from(self.height).saturating_sub(1)
    }

    pub fn get_last_column(&self) -> usize {
        usize::from(self.width).saturating_sub(1)
    }
}
