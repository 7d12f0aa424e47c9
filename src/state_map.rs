use super::*;

/// Maps each board discovered during search to the board it was first
/// reached from. Doubles as the visited set: a board is visited iff it
/// is a key. The first recorded predecessor wins; later insertions for
/// the same board are rejected and reported.
///
/// Keys are the 33 playable bits of a board packed into a dense 33-bit
/// integer: the root array is indexed by the top 13 key bits, followed
/// by four 16-way levels and a 16-slot leaf. Vacant leaf slots hold
/// [`Board::EMPTY`], which can never be a real predecessor.
#[derive(Clone, Debug)]
pub struct PredecessorMap {
    raw: Box<[Option<Box<Bucket0>>; ROOT_BUCKETS]>,
    len: usize,
}

const ROOT_BUCKETS: usize = 1 << 13;

type BucketNode<T> = [Option<Box<T>>; 16];

#[derive(Clone, Debug)]
struct Bucket0(BucketNode<Bucket1>);

#[derive(Clone, Debug)]
struct Bucket1(BucketNode<Bucket2>);

#[derive(Clone, Debug)]
struct Bucket2(BucketNode<Bucket3>);

#[derive(Clone, Debug)]
struct Bucket3(BucketNode<[Board; 16]>);

#[derive(Clone, Copy, Debug)]
pub struct DidAddendAlreadyExist {
    pub did_addend_already_exist: bool,
}

impl Default for Bucket0 {
    fn default() -> Self {
        Self(core::array::from_fn(|_| None))
    }
}

impl Default for Bucket1 {
    fn default() -> Self {
        Self(core::array::from_fn(|_| None))
    }
}

impl Default for Bucket2 {
    fn default() -> Self {
        Self(core::array::from_fn(|_| None))
    }
}

impl Default for Bucket3 {
    fn default() -> Self {
        Self(core::array::from_fn(|_| None))
    }
}

impl PredecessorMap {
    pub fn empty() -> Self {
        let mut raw = Vec::with_capacity(ROOT_BUCKETS);
        for _ in 0..ROOT_BUCKETS {
            raw.push(None);
        }

        Self {
            raw: raw.into_boxed_slice().try_into().unwrap(),
            len: 0,
        }
    }

    /// Records `predecessor` as the board `board` was reached from,
    /// unless `board` already has one. Never overwrites.
    pub fn add(&mut self, board: Board, predecessor: Board) -> DidAddendAlreadyExist {
        debug_assert!(board.is_within_legal_cells());
        debug_assert!(predecessor.is_within_legal_cells());

        let key = board.packed();

        let bucket0 = self.raw[(key >> 20) as usize].get_or_insert_with(Default::default);
        let bucket1 =
            bucket0.0[((key >> 16) & 0b1111) as usize].get_or_insert_with(Default::default);
        let bucket2 =
            bucket1.0[((key >> 12) & 0b1111) as usize].get_or_insert_with(Default::default);
        let bucket3 =
            bucket2.0[((key >> 8) & 0b1111) as usize].get_or_insert_with(Default::default);
        let leaf = bucket3.0[((key >> 4) & 0b1111) as usize]
            .get_or_insert_with(|| Box::new([Board::EMPTY; 16]));
        let slot = &mut leaf[(key & 0b1111) as usize];

        let did_addend_already_exist = *slot != Board::EMPTY;

        if !did_addend_already_exist {
            *slot = predecessor;
            self.len += 1;
        }

        DidAddendAlreadyExist {
            did_addend_already_exist,
        }
    }

    /// The board `board` was first reached from, or `None` if `board`
    /// was never discovered. The search's start board is never a key,
    /// so `None` is the expected answer once backtracking reaches it.
    pub fn predecessor(&self, board: Board) -> Option<Board> {
        let key = board.packed();

        let bucket0 = self.raw[(key >> 20) as usize].as_ref()?;
        let bucket1 = bucket0.0[((key >> 16) & 0b1111) as usize].as_ref()?;
        let bucket2 = bucket1.0[((key >> 12) & 0b1111) as usize].as_ref()?;
        let bucket3 = bucket2.0[((key >> 8) & 0b1111) as usize].as_ref()?;
        let leaf = bucket3.0[((key >> 4) & 0b1111) as usize].as_ref()?;
        let slot = leaf[(key & 0b1111) as usize];

        if slot == Board::EMPTY {
            None
        } else {
            Some(slot)
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Visits every `(board, predecessor)` entry in increasing board
    /// order. Packing drops only bits that are always zero, so packed
    /// key order and raw board order agree.
    pub fn visit_in_key_order(&self, mut visitor: impl FnMut(Board, Board)) {
        for (i0, bucket0) in self.raw.iter().enumerate() {
            let Some(bucket0) = bucket0 else {
                continue;
            };
            let prefix0 = (i0 as u64) << 20;

            for (i1, bucket1) in bucket0.0.iter().enumerate() {
                let Some(bucket1) = bucket1 else {
                    continue;
                };
                let prefix1 = prefix0 | ((i1 as u64) << 16);

                for (i2, bucket2) in bucket1.0.iter().enumerate() {
                    let Some(bucket2) = bucket2 else {
                        continue;
                    };
                    let prefix2 = prefix1 | ((i2 as u64) << 12);

                    for (i3, bucket3) in bucket2.0.iter().enumerate() {
                        let Some(bucket3) = bucket3 else {
                            continue;
                        };
                        let prefix3 = prefix2 | ((i3 as u64) << 8);

                        for (i4, leaf) in bucket3.0.iter().enumerate() {
                            let Some(leaf) = leaf else {
                                continue;
                            };
                            let prefix4 = prefix3 | ((i4 as u64) << 4);

                            for (i5, slot) in leaf.iter().enumerate() {
                                if *slot != Board::EMPTY {
                                    let key = prefix4 | i5 as u64;
                                    visitor(Board::from_packed(key), *slot);
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn to_sorted_vec(&self) -> Vec<(Board, Board)> {
        let mut raw = Vec::with_capacity(self.len);
        self.visit_in_key_order(|board, predecessor| raw.push((board, predecessor)));
        raw
    }
}

impl Board {
    /// Concatenates the playable bits of each row, top row highest,
    /// into a dense 33-bit key. Padding bits must be zero.
    pub(crate) fn packed(self) -> u64 {
        let b = self.0;

        ((b >> 57) & 0b111) << 30
            | ((b >> 48) & 0b111) << 27
            | ((b >> 37) & 0b111_1111) << 20
            | ((b >> 28) & 0b111_1111) << 13
            | ((b >> 19) & 0b111_1111) << 6
            | ((b >> 12) & 0b111) << 3
            | ((b >> 3) & 0b111)
    }

    /// Inverse of [`Board::packed`].
    pub(crate) fn from_packed(key: u64) -> Board {
        Board(
            ((key >> 30) & 0b111) << 57
                | ((key >> 27) & 0b111) << 48
                | ((key >> 20) & 0b111_1111) << 37
                | ((key >> 13) & 0b111_1111) << 28
                | ((key >> 6) & 0b111_1111) << 19
                | ((key >> 3) & 0b111) << 12
                | (key & 0b111) << 3,
        )
    }
}
