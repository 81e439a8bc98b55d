/// Format letter for the month field
pub const MONTH_CHAR: char = 'm';
/// Format letter for the day field
pub const DAY_CHAR: char = 'd';
/// Format letter for the year field
pub const YEAR_CHAR: char = 'y';

/// Largest month accepted from typed text (December)
pub const MAX_MONTH: u32 = 12;
/// Largest day accepted from typed text, regardless of month
pub const MAX_DAY: u32 = 31;

/// A typed year needs at least this many digits before it is committed
pub const MIN_YEAR_DIGITS: usize = 4;
/// A typed month may not be longer than this
pub const MAX_MONTH_DIGITS: usize = 2;
/// A typed day may not be longer than this
pub const MAX_DAY_DIGITS: usize = 2;

/// Token width of an unpadded field (`m`, `d`, `y`)
pub const UNPADDED_WIDTH: usize = 1;
/// Token width of a zero-padded field (`mm`, `dd`) or a two-digit year (`yy`)
pub const PADDED_WIDTH: usize = 2;

/// Number of dates in a range value
pub const RANGE_LEN: usize = 2;

/// Separator used when a range value is displayed as a single string
pub const RANGE_SEPARATOR: char = '/';
