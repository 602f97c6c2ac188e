/// Rounds a raw point total to thousand-point units, rounding up when
/// the hundreds digit of the remainder is 6 or more and dropping it
/// otherwise.
///
/// Negative totals floor: the remainder keeps the dividend's sign, so
/// its hundreds digit can never reach 6.
pub fn round_to_thousands(points: i32) -> i32 {
    let remainder = points % 1000;
    if remainder == 0 {
        return points / 1000;
    }
    let base = points.div_euclid(1000);
    if remainder / 100 >= 6 {
        base + 1
    } else {
        base
    }
}
