//! Alternating 0/1 sequences, the building block of every pattern matrix.

/// Immutable 0/1 sequence whose value at `i` depends only on `i & 1` and
/// the phase it was built with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlternatingVector {
    bits: Vec<u8>,
    start_high: bool,
}

impl AlternatingVector {
    #[inline]
    pub fn get(&self, i: usize) -> u8 {
        self.bits[i]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline]
    pub fn start_high(&self) -> bool {
        self.start_high
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.bits.iter()
    }
}

/// `start_high` gives 1,0,1,0,...; otherwise 0,1,0,1,...
pub fn build_alternating(len: usize, start_high: bool) -> AlternatingVector {
    let phase = start_high as u8;
    let bits = (0..len).map(|i| phase ^ (i & 1) as u8).collect();
    AlternatingVector { bits, start_high }
}

/// Both phases of one length, built once and shared by every matrix that
/// needs columns of that height.
#[derive(Clone, Debug)]
pub struct AlternatingPair {
    high: AlternatingVector,
    low: AlternatingVector,
}

impl AlternatingPair {
    pub fn new(len: usize) -> Self {
        Self {
            high: build_alternating(len, true),
            low: build_alternating(len, false),
        }
    }

    #[inline]
    pub fn get(&self, start_high: bool) -> &AlternatingVector {
        if start_high { &self.high } else { &self.low }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.low.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }
}
