use mazepath_core::Cell;

pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

/// Parses `ROW,COL` (spaces allowed) into a cell.
pub fn parse_cell(value: &str) -> Result<Cell, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got '{}'", value))?;

    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid row '{}'", row.trim()))?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid column '{}'", col.trim()))?;

    Ok(Cell::new(row, col))
}
