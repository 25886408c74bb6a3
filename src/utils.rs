/// Szudzik's pairing of two integers, with wrapping arithmetic.
///
/// Below the overflow point it is a bijection `N x N -> N`; past it the
/// result is only used to spread keys over cache slots.
pub fn pairing2(a: u64, b: u64) -> u64 {
    if a < b {
        b.wrapping_mul(b).wrapping_add(a)
    } else {
        a.wrapping_mul(a).wrapping_add(a).wrapping_add(b)
    }
}

pub fn pairing3(a: u64, b: u64, c: u64) -> u64 {
    pairing2(pairing2(a, b), c)
}

/// Slot hash for computed-table keys.
pub trait MyHash {
    fn hash(&self) -> u64;
}
