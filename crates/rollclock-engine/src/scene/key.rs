use super::ZIndex;

/// Paint-order key: lower `z` first, then insertion `order` within a layer.
///
/// Field order matters; the derived `Ord` compares `z` before `order`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_dominates_insertion_order() {
        assert!(SortKey::new(ZIndex(0), 9) < SortKey::new(ZIndex(1), 0));
        assert!(SortKey::new(ZIndex(-1), 5) < SortKey::new(ZIndex(0), 0));
        assert!(SortKey::new(ZIndex(2), 1) < SortKey::new(ZIndex(2), 2));
    }
}
