//! ASCII heart pattern generation for the console printer.
//!
//! Builds the two-part star heart as plain rows of `' '` and `'*'`, leaving
//! styling and the per-character typing delay to the binary. The loop
//! structure is preserved exactly, including trailing spaces on the taper
//! rows, so the printed shape matches the classic output character for
//! character.

/// Build the heart pattern for the given line count.
///
/// The upper section renders `lines + 1` rows of two half-lobes; the lower
/// section renders `2 * lines` rows of a narrowing triangle. Non-positive
/// counts produce a degenerate (possibly empty) pattern rather than an
/// error, matching the original's unvalidated input handling.
#[must_use]
pub fn pattern(lines: i32) -> Vec<String> {
    let temp = lines;
    let mut rows = Vec::new();

    // Upper section: two lobes separated by a gap that closes at the base
    let mut i = lines;
    while i >= 0 {
        let mut row = String::new();
        push_spaces(&mut row, i);
        push_stars(&mut row, temp - 1 - i);
        push_stars(&mut row, temp - i);
        push_spaces(&mut row, i);
        push_spaces(&mut row, i);
        push_stars(&mut row, temp - i);
        push_stars(&mut row, temp - 1 - i);
        rows.push(row);
        i -= 1;
    }

    // Lower section: indented taper down to the point
    let mut lp = 0;
    while lp <= 2 * lines - 1 {
        let mut row = String::new();
        push_spaces(&mut row, lp);
        push_stars(&mut row, 2 * lines - 1 - lp);
        push_stars(&mut row, 2 * lines - 1 - lp);
        rows.push(row);
        lp += 1;
    }

    rows
}

fn push_spaces(row: &mut String, count: i32) {
    for _ in 0..count.max(0) {
        row.push(' ');
    }
}

fn push_stars(row: &mut String, count: i32) {
    for _ in 0..count.max(0) {
        row.push('*');
    }
}
