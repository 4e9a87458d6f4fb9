use crate::constants::NEIGHBORHOOD_SIZE;

/// PDA seed encoding of a signed coordinate: two's-complement
/// little-endian, as the on-chain programs derive their addresses.
pub fn coord_seed(value: i64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Neighborhood containing a space coordinate (floor division, so negative
/// coordinates map to negative neighborhoods).
pub fn neighborhood_coords(space_x: i64, space_y: i64) -> (i64, i64) {
    (
        space_x.div_euclid(NEIGHBORHOOD_SIZE),
        space_y.div_euclid(NEIGHBORHOOD_SIZE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_seed_is_twos_complement() {
        assert_eq!(coord_seed(-1), [0xff; 8]);
        assert_eq!(coord_seed(1), [1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_negative_spaces_floor_to_negative_neighborhoods() {
        assert_eq!(neighborhood_coords(0, 199), (0, 0));
        assert_eq!(neighborhood_coords(200, -1), (1, -1));
        assert_eq!(neighborhood_coords(-200, -201), (-1, -2));
    }
}
