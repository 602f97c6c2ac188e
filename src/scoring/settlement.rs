use super::{round_to_thousands, RankPointTable, RETURN_POINTS, SEAT_COUNT};

/// Raw end-of-round table points, one entry per seat.
pub type RawRoundInput = [i32; SEAT_COUNT];

/// Settles one round: converts the four raw table points into zero-sum
/// final scores in thousand-point units, returned in seat order.
///
/// Seats are placed by raw score, highest first; equal scores place the
/// lower seat index higher. Seats placing 2nd through 4th pay or collect
/// their shortfall against the return baseline plus the placement bonus;
/// the winner takes the negated sum of the rest, so the four results
/// always add up to exactly zero.
pub fn settle_round(inputs: &RawRoundInput, rank_points: &RankPointTable) -> [i32; SEAT_COUNT] {
    let mut placed: Vec<(usize, i32)> = inputs.iter().copied().enumerate().collect();
    // Stable sort: ties keep seat order.
    placed.sort_by(|a, b| b.1.cmp(&a.1));

    let mut finals = [0i32; SEAT_COUNT];
    let mut winner_take = 0;
    for (position, &(seat, raw)) in placed.iter().enumerate().skip(1) {
        let shortfall = RETURN_POINTS / 1000 - round_to_thousands(raw);
        let settled = rank_points[position] - shortfall;
        finals[seat] = settled;
        winner_take -= settled;
    }
    finals[placed[0].0] = winner_take;

    finals
}
