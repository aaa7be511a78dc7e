//! Swiss pairing pass over ordered standings.

use super::models::{Pairing, Standing};

/// Pair adjacent entries of an ordered standings list
///
/// Entries 0-1, 2-3, ... become one pairing each, so players meet the opponent
/// closest to them in the ranking. A trailing entry left over by an odd count is
/// not paired; see [`unpaired`].
pub fn pair_adjacent(standings: &[Standing]) -> Vec<Pairing> {
    standings
        .chunks_exact(2)
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect()
}

/// Returns the entry [`pair_adjacent`] leaves out, if the count is odd
pub fn unpaired(standings: &[Standing]) -> Option<&Standing> {
    standings.chunks_exact(2).remainder().first()
}
