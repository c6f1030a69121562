#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub symbol: String,
    pub hydrogen_count: u32,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(symbol: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            symbol: symbol.into(),
            hydrogen_count: 0,
            position,
        }
    }

    pub fn with_hydrogens(mut self, count: u32) -> Self {
        self.hydrogen_count = count;
        self
    }
}
