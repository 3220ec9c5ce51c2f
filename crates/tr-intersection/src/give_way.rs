//! Give-way arbitration between the vehicles waiting at an intersection.
//!
//! Arbitration sees the front vehicle of every incoming lane with traffic.
//! Turns passed in here are already resolved:
//! `Turn::Invalid` has been replaced by `Turn::Straight`.
//!
//! | Contenders | Who proceeds                                                   |
//! |------------|----------------------------------------------------------------|
//! | 0          | nobody                                                         |
//! | 1          | the sole contender                                             |
//! | 2          | both if their turns match; else straight, else left            |
//! | 3+         | one vehicle: highest rank, ties to the last in N, E, S, W order |
//!
//! Rank is `Straight > Left > Right`.

use tr_core::Turn;

use crate::Approach;

/// A front vehicle asking to cross.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Contender {
    pub from: Approach,
    pub turn: Turn,
}

/// Right-of-way rank of a resolved turn.
#[inline]
pub fn rank(turn: Turn) -> u8 {
    match turn {
        Turn::Straight | Turn::Invalid => 2,
        Turn::Left                     => 1,
        Turn::Right                    => 0,
    }
}

/// Decide which contenders proceed this tick.
///
/// `contenders` must be in scan order.  Returns a mask parallel to it.
pub fn arbitrate(contenders: &[Contender]) -> Vec<bool> {
    let mut go = vec![false; contenders.len()];
    match contenders {
        [] => {}
        [_] => go[0] = true,
        [a, b] => {
            if a.turn == b.turn {
                go[0] = true;
                go[1] = true;
            } else if rank(a.turn) > rank(b.turn) {
                go[0] = true;
            } else {
                go[1] = true;
            }
        }
        _ => {
            // `max_by_key` keeps the last of equal maxima.
            if let Some((i, _)) = contenders
                .iter()
                .enumerate()
                .max_by_key(|(_, c)| rank(c.turn))
            {
                go[i] = true;
            }
        }
    }
    go
}
