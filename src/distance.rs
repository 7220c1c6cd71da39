/// How far apart two values are. Used by [`Tree::closest_value`][crate::Tree::closest_value] to
/// decide which value is nearest a target.
pub trait Distance {
    /// The type distances are measured in. Smaller is closer.
    type Output: Ord;

    /// The (non-negative) distance between `self` and `other`.
    fn distance(&self, other: &Self) -> Self::Output;
}

macro_rules! impl_distance {
    ($($t:ty => $out:ty),* $(,)?) => {
        $(
            impl Distance for $t {
                type Output = $out;

                fn distance(&self, other: &Self) -> $out {
                    self.abs_diff(*other)
                }
            }
        )*
    };
}

impl_distance! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
}
