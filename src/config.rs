/// Capacity settings for a `DynArray` (and the heap that sits on one).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArrayConfig {
    /// Number of slots allocated up front. Zero defers allocation until the
    /// first insert.
    pub initial_capacity: usize,

    /// Slots added by `DynArray::grow(0)`, and the minimum step when an append
    /// finds the array full. Zero is treated as `DEFAULT_GROWTH_INCREMENT`.
    pub growth_increment: usize,
}

impl ArrayConfig {
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;
    pub const DEFAULT_GROWTH_INCREMENT: usize = 5;

    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_increment: Self::DEFAULT_GROWTH_INCREMENT,
        }
    }

    pub fn with_growth_increment(mut self, growth_increment: usize) -> Self {
        self.growth_increment = growth_increment;
        self
    }

    /// The increment actually used; never zero.
    pub fn effective_increment(&self) -> usize {
        if self.growth_increment == 0 {
            Self::DEFAULT_GROWTH_INCREMENT
        } else {
            self.growth_increment
        }
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
