//! Tests for configuration constant consistency

#[cfg(test)]
mod tests {
    use gridstash::io::configuration::{
        DEFAULT_CELL_PIXELS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_MAX_STACK,
        ELEMENT_PALETTE, ELEMENT_SYMBOLS, EMPTY_CELL_COLOUR, EMPTY_CELL_SYMBOL,
        MAX_GRID_DIMENSION, RANDOM_PLACEMENT_ATTEMPTS,
    };
    use std::collections::HashSet;

    // Tests that default grid sizes are accepted by the dimension limit
    #[test]
    fn test_defaults_within_limits() {
        assert!((1..=MAX_GRID_DIMENSION).contains(&DEFAULT_GRID_WIDTH));
        assert!((1..=MAX_GRID_DIMENSION).contains(&DEFAULT_GRID_HEIGHT));
        assert!(DEFAULT_CELL_PIXELS > 0);
        assert!(RANDOM_PLACEMENT_ATTEMPTS > 0);
        assert_eq!(DEFAULT_MAX_STACK, 1);
    }

    // Tests that text symbols are distinct and never collide with empty cells
    #[test]
    fn test_symbols_are_distinguishable() {
        let symbols: HashSet<char> = ELEMENT_SYMBOLS.chars().collect();

        assert_eq!(symbols.len(), ELEMENT_SYMBOLS.chars().count());
        assert!(!symbols.contains(&EMPTY_CELL_SYMBOL));
    }

    #[test]
    fn test_palette_is_opaque_and_distinct_from_empty() {
        for colour in ELEMENT_PALETTE {
            assert_eq!(colour[3], 255);
            assert_ne!(colour, EMPTY_CELL_COLOUR);
        }
    }
}
