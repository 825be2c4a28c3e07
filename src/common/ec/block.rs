use super::{mod_n, EXP_TABLE, LOG_TABLE};

/// One error correction block: data codewords followed by the ecc codewords
/// computed for them.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct Block {
    data: Vec<u8>,
    // Data length
    dlen: usize,
}

impl Block {
    pub fn new(raw: &[u8], ecc_len: usize, gen_poly: &[u8]) -> Self {
        debug_assert_eq!(gen_poly.len(), ecc_len, "Generator degree doesn't match ecc length");

        let dlen = raw.len();
        let mut data = Vec::with_capacity(dlen + ecc_len);
        data.extend_from_slice(raw);
        data.resize(dlen + ecc_len, 0);
        let mut block = Self { data, dlen };
        block.compute_ecc(gen_poly);
        block
    }

    #[cfg(test)]
    pub fn data_len(&self) -> usize {
        self.dlen
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..self.dlen]
    }

    pub fn ecc(&self) -> &[u8] {
        &self.data[self.dlen..]
    }

    // Shift register division of the data polynomial by the generator. The
    // register sits right after the data and ends up holding the remainder.
    fn compute_ecc(&mut self, gen_poly: &[u8]) {
        let (data, ecc) = self.data.split_at_mut(self.dlen);
        ecc.fill(0);
        for &b in data.iter() {
            let lead_coeff = b ^ ecc.first().copied().unwrap_or(0);
            ecc.rotate_left(1);
            if let Some(last) = ecc.last_mut() {
                *last = 0;
            }
            if lead_coeff == 0 {
                continue;
            }

            let log_lead_coeff = LOG_TABLE[lead_coeff as usize] as usize;
            for (e, &g) in ecc.iter_mut().zip(gen_poly.iter()) {
                *e ^= EXP_TABLE[mod_n(g as usize + log_lead_coeff)];
            }
        }
    }
}
