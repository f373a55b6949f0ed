//! Pseudo-legal outcome generation.
//!
//! Every function here answers the same question: given a piece and an
//! origin/destination pair, what could happen? The answers are pseudo-legal;
//! whether an outcome leaves the mover's own king in check is the board's
//! business ([`Board::legal_moves`]).
//!
//! [`Board::legal_moves`]: crate::Board::legal_moves

use crate::Board;
use chess_core::{CastlingDetails, Move, MoveDetails, PieceKind, Side, Square};

/// Generates every pseudo-legal outcome of the given intent.
///
/// Returns nothing if either square is out of bounds, the origin is empty,
/// or the piece there does not belong to the intent's active color.
pub fn generate_outcomes(intent: Move, board: &Board) -> Vec<MoveDetails> {
    let Some(kind) = moving_piece_kind(intent, board) else {
        return Vec::new();
    };
    let mut outcomes = outcomes_by_kind(kind, intent, board);
    if kind == PieceKind::CastleableKing {
        outcomes.extend(castling_outcome(intent, board));
    }
    outcomes
}

/// Generates outcomes from plain piece movement, with castling excluded by
/// construction.
///
/// Attack detection probes through this instead of [`generate_outcomes`]:
/// castling can never capture, and skipping it here keeps the castling
/// transit-safety check from recursing into castling generation.
pub(crate) fn movement_outcomes(intent: Move, board: &Board) -> Vec<MoveDetails> {
    match moving_piece_kind(intent, board) {
        Some(kind) => outcomes_by_kind(kind, intent, board),
        None => Vec::new(),
    }
}

/// Returns the kind of the piece the intent may move, if there is one.
fn moving_piece_kind(intent: Move, board: &Board) -> Option<PieceKind> {
    if board.is_out_of_bounds(intent.from) || board.is_out_of_bounds(intent.to) {
        return None;
    }
    let piece = board.piece_at(intent.from)?;
    (piece.color == intent.active_color).then_some(piece.kind)
}

fn outcomes_by_kind(kind: PieceKind, intent: Move, board: &Board) -> Vec<MoveDetails> {
    match kind {
        PieceKind::Pawn => pawn_outcomes(intent, board),
        PieceKind::Knight => knight_outcome(intent, board).into_iter().collect(),
        PieceKind::Bishop => bishop_outcome(intent, board).into_iter().collect(),
        PieceKind::Rook | PieceKind::CastleableRook => {
            rook_outcome(intent, board).into_iter().collect()
        }
        PieceKind::Queen => queen_outcome(intent, board).into_iter().collect(),
        PieceKind::King | PieceKind::CastleableKing => {
            king_step_outcome(intent, board).into_iter().collect()
        }
    }
}

/// A hop lands on its destination directly: legal onto an empty square or an
/// enemy piece. A piece can never hop onto itself, so `from == to` yields
/// nothing.
fn check_hopping(intent: Move, board: &Board) -> Option<MoveDetails> {
    match board.piece_at(intent.to) {
        Some(piece) if piece.color == intent.active_color => None,
        Some(_) => Some(MoveDetails::capture(intent.to)),
        None => Some(MoveDetails::plain()),
    }
}

/// A slide walks unit steps toward the destination. It fails if the walk
/// leaves the board (the direction never reaches the destination in a
/// straight line) or if any intermediate square is occupied; the final
/// square follows the hopping rule.
fn check_sliding(intent: Move, board: &Board) -> Option<MoveDetails> {
    let rank_step = (intent.to.rank - intent.from.rank).clamp(-1, 1);
    let file_step = (intent.to.file - intent.from.file).clamp(-1, 1);
    let mut current = intent.from;
    loop {
        current = current.offset(rank_step, file_step);
        if board.is_out_of_bounds(current) {
            return None;
        }
        if current == intent.to {
            return check_hopping(intent, board);
        }
        if board.is_occupied(current) {
            return None;
        }
    }
}

fn pawn_outcomes(intent: Move, board: &Board) -> Vec<MoveDetails> {
    let direction = intent.active_color.pawn_direction();
    let on_start_rank = intent.from.rank == intent.active_color.pawn_rank();
    let is_promotion = intent.to.rank == intent.active_color.promotion_rank();

    let rank_change = intent.to.rank - intent.from.rank;
    let file_change = intent.to.file - intent.from.file;

    // A two-square advance passes over the square a capturer could take
    // en passant next turn.
    if on_start_rank && rank_change == 2 * direction && file_change == 0 {
        let passing_over = intent.from.offset(direction, 0);
        if board.is_occupied(passing_over) || board.is_occupied(intent.to) {
            return Vec::new();
        }
        let mut details = MoveDetails::plain();
        details.en_passant_target = Some(passing_over);
        return vec![details];
    }

    if rank_change != direction {
        return Vec::new();
    }

    // A single advance onto an empty square.
    if file_change == 0 {
        if board.is_occupied(intent.to) {
            return Vec::new();
        }
        return expand_promotions(MoveDetails::plain(), is_promotion);
    }

    if file_change != -1 && file_change != 1 {
        return Vec::new();
    }

    // A diagonal step must capture: either an ordinary capture of the piece
    // on the destination, or en passant, where the captured pawn sits beside
    // the origin rather than on the destination.
    if let Some(piece) = board.piece_at(intent.to) {
        if piece.color == intent.active_color {
            return Vec::new();
        }
        return expand_promotions(MoveDetails::capture(intent.to), is_promotion);
    }
    if board.en_passant_target() == Some(intent.to) {
        let captured = Square::new(intent.from.rank, intent.to.file);
        return vec![MoveDetails::capture(captured)];
    }
    Vec::new()
}

/// Fans one outcome out into four on the promotion rank, in the fixed order
/// knight, bishop, rook, queen.
fn expand_promotions(base: MoveDetails, is_promotion: bool) -> Vec<MoveDetails> {
    if !is_promotion {
        return vec![base];
    }
    PieceKind::PROMOTABLE
        .iter()
        .map(|&kind| MoveDetails {
            promote_to: Some(kind),
            ..base
        })
        .collect()
}

fn knight_outcome(intent: Move, board: &Board) -> Option<MoveDetails> {
    let rank_change = (intent.to.rank - intent.from.rank).abs();
    let file_change = (intent.to.file - intent.from.file).abs();
    if rank_change + file_change == 3 && rank_change != 0 && file_change != 0 {
        return check_hopping(intent, board);
    }
    None
}

fn bishop_outcome(intent: Move, board: &Board) -> Option<MoveDetails> {
    let rank_change = intent.to.rank - intent.from.rank;
    let file_change = intent.to.file - intent.from.file;
    if rank_change == file_change || rank_change == -file_change {
        return check_sliding(intent, board);
    }
    None
}

fn rook_outcome(intent: Move, board: &Board) -> Option<MoveDetails> {
    let rank_change = intent.to.rank - intent.from.rank;
    let file_change = intent.to.file - intent.from.file;
    if rank_change == 0 || file_change == 0 {
        return check_sliding(intent, board);
    }
    None
}

fn queen_outcome(intent: Move, board: &Board) -> Option<MoveDetails> {
    bishop_outcome(intent, board).or_else(|| rook_outcome(intent, board))
}

fn king_step_outcome(intent: Move, board: &Board) -> Option<MoveDetails> {
    let rank_change = (intent.to.rank - intent.from.rank).abs();
    let file_change = (intent.to.file - intent.from.file).abs();
    if rank_change <= 1 && file_change <= 1 {
        return check_hopping(intent, board);
    }
    None
}

/// The castling destinations are fixed: file c for an a-side castle and
/// file g for an h-side castle, whatever file the king started on. The rook
/// has no fixed file in Chess960, so it is found by searching outward from
/// the king.
fn castling_outcome(intent: Move, board: &Board) -> Option<MoveDetails> {
    let (side, direction) = if intent.to == Square::new(intent.from.rank, 2) {
        (Side::ASide, -1)
    } else if intent.to == Square::new(intent.from.rank, 6) {
        (Side::HSide, 1)
    } else {
        return None;
    };

    // The first piece outward from the king must be a friendly rook that has
    // never moved; every square strictly between must be empty.
    let mut rook_from = intent.from.offset(0, direction);
    loop {
        if board.is_out_of_bounds(rook_from) {
            return None;
        }
        match board.piece_at(rook_from) {
            None => rook_from = rook_from.offset(0, direction),
            Some(piece) => {
                if piece.kind != PieceKind::CastleableRook || piece.color != intent.active_color {
                    return None;
                }
                break;
            }
        }
    }

    // Every square the king crosses, origin and destination included, must
    // be safe in the current position. The probe relocates the king alone;
    // full move simulation here would recurse through castling generation.
    let king_step = (intent.to.file - intent.from.file).clamp(-1, 1);
    let mut transit = intent.from;
    loop {
        if board.would_piece_be_attacked(intent.from, transit) {
            return None;
        }
        if transit == intent.to {
            break;
        }
        transit = transit.offset(0, king_step);
    }

    let rook_to = match side {
        Side::ASide => Square::new(intent.from.rank, 3),
        Side::HSide => Square::new(intent.from.rank, 5),
    };
    Some(MoveDetails {
        castling: Some(CastlingDetails {
            rook_from,
            rook_to,
            side,
        }),
        ..MoveDetails::plain()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, Piece};

    fn sq(text: &str) -> Square {
        Square::parse(text).unwrap()
    }

    fn intent(color: Color, from: &str, to: &str) -> Move {
        Move::new(color, sq(from), sq(to))
    }

    fn empty_board() -> Board {
        Board::new([[None; 8]; 8])
    }

    fn with_pieces(pieces: &[(&str, PieceKind, Color)]) -> Board {
        let mut ranks: [crate::Rank; 8] = [[None; 8]; 8];
        for &(text, kind, color) in pieces {
            let square = sq(text);
            ranks[square.rank as usize][square.file as usize] = Some(Piece::new(kind, color));
        }
        Board::new(ranks)
    }

    #[test]
    fn rejects_wrong_color_and_empty_origin() {
        let board = Board::default();
        assert!(generate_outcomes(intent(Color::Black, "e2", "e4"), &board).is_empty());
        assert!(generate_outcomes(intent(Color::White, "e4", "e5"), &board).is_empty());
    }

    #[test]
    fn rejects_out_of_bounds() {
        let board = Board::default();
        let off = Move::new(Color::White, Square::new(1, 4), Square::new(8, 4));
        assert!(generate_outcomes(off, &board).is_empty());
        let off = Move::new(Color::White, Square::new(-1, -1), Square::new(3, 4));
        assert!(generate_outcomes(off, &board).is_empty());
    }

    #[test]
    fn from_equals_to_yields_nothing() {
        let board = Board::default();
        for from in ["e1", "b1", "c1", "d2"] {
            assert!(generate_outcomes(intent(Color::White, from, from), &board).is_empty());
        }
    }

    #[test]
    fn knight_moves() {
        let board = Board::default();
        assert_eq!(
            generate_outcomes(intent(Color::White, "g1", "f3"), &board),
            vec![MoveDetails::plain()]
        );
        // Not an L-shape.
        assert!(generate_outcomes(intent(Color::White, "g1", "g3"), &board).is_empty());
        // Own piece on the destination.
        assert!(generate_outcomes(intent(Color::White, "g1", "e2"), &board).is_empty());
        // Knights jump over the pawn wall.
        assert_eq!(
            generate_outcomes(intent(Color::White, "b1", "a3"), &board),
            vec![MoveDetails::plain()]
        );
    }

    #[test]
    fn sliding_is_blocked_by_intermediate_pieces() {
        let board = Board::default();
        // The bishop is boxed in by its own pawns.
        assert!(generate_outcomes(intent(Color::White, "c1", "e3"), &board).is_empty());
        // The rook cannot slide through its own pawn.
        assert!(generate_outcomes(intent(Color::White, "a1", "a4"), &board).is_empty());

        let sparse = with_pieces(&[
            ("c1", PieceKind::Bishop, Color::White),
            ("f4", PieceKind::Pawn, Color::Black),
        ]);
        assert_eq!(
            generate_outcomes(intent(Color::White, "c1", "f4"), &sparse),
            vec![MoveDetails::capture(sq("f4"))]
        );
        // Beyond the capture the path is blocked.
        assert!(generate_outcomes(intent(Color::White, "c1", "g5"), &sparse).is_empty());
    }

    #[test]
    fn sliding_rejects_crooked_lines() {
        let board = with_pieces(&[("d4", PieceKind::Rook, Color::White)]);
        assert!(generate_outcomes(intent(Color::White, "d4", "e6"), &board).is_empty());
        let board = with_pieces(&[("d4", PieceKind::Bishop, Color::White)]);
        assert!(generate_outcomes(intent(Color::White, "d4", "d6"), &board).is_empty());
    }

    #[test]
    fn queen_slides_both_ways() {
        let board = with_pieces(&[("d1", PieceKind::Queen, Color::White)]);
        assert_eq!(
            generate_outcomes(intent(Color::White, "d1", "d7"), &board).len(),
            1
        );
        assert_eq!(
            generate_outcomes(intent(Color::White, "d1", "h5"), &board).len(),
            1
        );
        assert!(generate_outcomes(intent(Color::White, "d1", "e3"), &board).is_empty());
    }

    #[test]
    fn pawn_double_advance() {
        let board = Board::default();
        let outcomes = generate_outcomes(intent(Color::White, "e2", "e4"), &board);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].en_passant_target, Some(sq("e3")));
        assert_eq!(outcomes[0].captured_square, None);

        // Only from the start rank.
        let advanced = with_pieces(&[("e3", PieceKind::Pawn, Color::White)]);
        assert!(generate_outcomes(intent(Color::White, "e3", "e5"), &advanced).is_empty());

        // Blocked by a piece on either square.
        let blocked = with_pieces(&[
            ("e2", PieceKind::Pawn, Color::White),
            ("e3", PieceKind::Knight, Color::Black),
        ]);
        assert!(generate_outcomes(intent(Color::White, "e2", "e4"), &blocked).is_empty());
    }

    #[test]
    fn pawn_single_advance_and_captures() {
        let board = with_pieces(&[
            ("d4", PieceKind::Pawn, Color::White),
            ("e5", PieceKind::Pawn, Color::Black),
            ("c5", PieceKind::Knight, Color::White),
        ]);
        // Forward onto an empty square.
        assert_eq!(
            generate_outcomes(intent(Color::White, "d4", "d5"), &board),
            vec![MoveDetails::plain()]
        );
        // Diagonal capture of the enemy pawn.
        assert_eq!(
            generate_outcomes(intent(Color::White, "d4", "e5"), &board),
            vec![MoveDetails::capture(sq("e5"))]
        );
        // No capturing friends, no empty-square diagonals.
        assert!(generate_outcomes(intent(Color::White, "d4", "c5"), &board).is_empty());
        let open = with_pieces(&[("d4", PieceKind::Pawn, Color::White)]);
        assert!(generate_outcomes(intent(Color::White, "d4", "e5"), &open).is_empty());
        // Pawns never move backwards or sideways.
        assert!(generate_outcomes(intent(Color::White, "d4", "d3"), &board).is_empty());
        assert!(generate_outcomes(intent(Color::White, "d4", "e4"), &board).is_empty());
    }

    #[test]
    fn pawn_promotion_fans_out() {
        let board = with_pieces(&[
            ("b7", PieceKind::Pawn, Color::White),
            ("a8", PieceKind::Rook, Color::Black),
        ]);
        let advance = generate_outcomes(intent(Color::White, "b7", "b8"), &board);
        let kinds: Vec<_> = advance.iter().map(|d| d.promote_to.unwrap()).collect();
        assert_eq!(
            kinds,
            vec![
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen
            ]
        );

        let capture = generate_outcomes(intent(Color::White, "b7", "a8"), &board);
        assert_eq!(capture.len(), 4);
        assert!(capture
            .iter()
            .all(|d| d.captured_square == Some(sq("a8")) && d.promote_to.is_some()));
    }

    #[test]
    fn en_passant_captures_beside_the_origin() {
        let mut board = with_pieces(&[
            ("e5", PieceKind::Pawn, Color::White),
            ("d7", PieceKind::Pawn, Color::Black),
            ("e1", PieceKind::King, Color::White),
            ("e8", PieceKind::King, Color::Black),
        ]);
        let double = Move::new(Color::Black, sq("d7"), sq("d5"));
        assert!(board.make_move(double, |_| Some(0)).is_some());
        assert_eq!(board.en_passant_target(), Some(sq("d6")));

        let outcomes = generate_outcomes(intent(Color::White, "e5", "d6"), &board);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].captured_square, Some(sq("d5")));
    }

    #[test]
    fn castling_on_a_clear_standard_board() {
        let board = with_pieces(&[
            ("e1", PieceKind::CastleableKing, Color::White),
            ("h1", PieceKind::CastleableRook, Color::White),
            ("a1", PieceKind::CastleableRook, Color::White),
            ("e8", PieceKind::King, Color::Black),
        ]);

        let kingside = generate_outcomes(intent(Color::White, "e1", "g1"), &board);
        assert_eq!(kingside.len(), 1);
        let castling = kingside[0].castling.unwrap();
        assert_eq!(castling.side, Side::HSide);
        assert_eq!(castling.rook_from, sq("h1"));
        assert_eq!(castling.rook_to, sq("f1"));

        let queenside = generate_outcomes(intent(Color::White, "e1", "c1"), &board);
        assert_eq!(queenside.len(), 1);
        let castling = queenside[0].castling.unwrap();
        assert_eq!(castling.side, Side::ASide);
        assert_eq!(castling.rook_from, sq("a1"));
        assert_eq!(castling.rook_to, sq("d1"));
    }

    #[test]
    fn castling_requires_an_untouched_rook() {
        let board = with_pieces(&[
            ("e1", PieceKind::CastleableKing, Color::White),
            ("h1", PieceKind::Rook, Color::White),
            ("e8", PieceKind::King, Color::Black),
        ]);
        assert!(generate_outcomes(intent(Color::White, "e1", "g1"), &board).is_empty());
    }

    #[test]
    fn castling_requires_an_untouched_king() {
        let board = with_pieces(&[
            ("e1", PieceKind::King, Color::White),
            ("h1", PieceKind::CastleableRook, Color::White),
            ("e8", PieceKind::King, Color::Black),
        ]);
        assert!(generate_outcomes(intent(Color::White, "e1", "g1"), &board).is_empty());
    }

    #[test]
    fn castling_requires_empty_squares_between() {
        let board = with_pieces(&[
            ("e1", PieceKind::CastleableKing, Color::White),
            ("h1", PieceKind::CastleableRook, Color::White),
            ("g1", PieceKind::Knight, Color::White),
            ("e8", PieceKind::King, Color::Black),
        ]);
        assert!(generate_outcomes(intent(Color::White, "e1", "g1"), &board).is_empty());
    }

    #[test]
    fn castling_requires_a_safe_transit() {
        // The black rook covers f1, which the king must cross.
        let board = with_pieces(&[
            ("e1", PieceKind::CastleableKing, Color::White),
            ("h1", PieceKind::CastleableRook, Color::White),
            ("f8", PieceKind::Rook, Color::Black),
            ("a8", PieceKind::King, Color::Black),
        ]);
        assert!(generate_outcomes(intent(Color::White, "e1", "g1"), &board).is_empty());

        // Covering h1 does not matter; the king never crosses it.
        let board = with_pieces(&[
            ("e1", PieceKind::CastleableKing, Color::White),
            ("h1", PieceKind::CastleableRook, Color::White),
            ("h8", PieceKind::Rook, Color::Black),
            ("a8", PieceKind::King, Color::Black),
        ]);
        assert_eq!(
            generate_outcomes(intent(Color::White, "e1", "g1"), &board).len(),
            1
        );
    }

    #[test]
    fn castling_rejects_a_checked_king() {
        let board = with_pieces(&[
            ("e1", PieceKind::CastleableKing, Color::White),
            ("h1", PieceKind::CastleableRook, Color::White),
            ("e8", PieceKind::Rook, Color::Black),
            ("a8", PieceKind::King, Color::Black),
        ]);
        assert!(generate_outcomes(intent(Color::White, "e1", "g1"), &board).is_empty());
    }

    #[test]
    fn chess960_castling_searches_for_the_rook() {
        // King on b1 with its rook on a1: the a-side castle still lands on
        // c1, with the rook on d1.
        let board = with_pieces(&[
            ("b1", PieceKind::CastleableKing, Color::White),
            ("a1", PieceKind::CastleableRook, Color::White),
            ("e8", PieceKind::King, Color::Black),
        ]);
        let outcomes = generate_outcomes(intent(Color::White, "b1", "c1"), &board);
        let castling = outcomes
            .iter()
            .find_map(|d| d.castling)
            .expect("castling outcome");
        assert_eq!(castling.side, Side::ASide);
        assert_eq!(castling.rook_from, sq("a1"));
        assert_eq!(castling.rook_to, sq("d1"));
        // The plain king step to c1 is offered alongside the castle.
        assert!(outcomes.iter().any(|d| d.castling.is_none()));
    }

    #[test]
    fn ordinary_pieces_never_castle() {
        let board = with_pieces(&[
            ("e1", PieceKind::King, Color::White),
            ("h1", PieceKind::CastleableRook, Color::White),
        ]);
        let outcomes = generate_outcomes(intent(Color::White, "e1", "g1"), &board);
        assert!(outcomes.is_empty());
    }
}
