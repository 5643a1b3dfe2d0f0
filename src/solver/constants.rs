// Defaults for the classic game: four cards, make 24
pub const DEFAULT_TARGET: f64 = 24.0;
pub const DEFAULT_OPERAND_COUNT: usize = 4;
pub const EPSILON: f64 = 1e-9;
