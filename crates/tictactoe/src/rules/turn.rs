//! Turn projection: whose symbol moves next.

use super::super::{MoveList, Symbol};
use tracing::instrument;

/// Returns the symbol due to move after `moves`.
///
/// Symbols strictly alternate from whoever opened the game. Only the list
/// length and its oldest move are inspected; an empty list yields
/// [`Symbol::FIRST`].
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn active_symbol(moves: &MoveList) -> Symbol {
    match moves.first() {
        None => Symbol::FIRST,
        Some(opening) if moves.len() % 2 == 0 => opening.player,
        Some(opening) => opening.player.opponent(),
    }
}
