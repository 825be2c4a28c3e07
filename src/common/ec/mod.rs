mod block;
mod galois;

pub(crate) use block::*;
pub use galois::*;

/// Generator polynomial of degree `ecc_len`, the product of `(x - a^i)` for
/// `i` in `0..ecc_len`. Coefficients are returned in the log domain, highest
/// degree first, with the implicit leading 1 dropped.
pub fn generator_polynomial(ecc_len: usize) -> Vec<u8> {
    let mut poly = vec![1u8];
    for i in 0..ecc_len {
        let root = EXP_TABLE[i];
        let mut next = vec![0u8; poly.len() + 1];
        for (j, &coeff) in poly.iter().enumerate() {
            next[j] ^= coeff;
            next[j + 1] ^= gf_mul(coeff, root);
        }
        poly = next;
    }

    debug_assert!(!poly.contains(&0), "Generator polynomial has a zero coefficient");
    poly[1..].iter().map(|&c| LOG_TABLE[c as usize]).collect()
}
