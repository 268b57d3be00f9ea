use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint, FieldBytes, SecretKey};

use super::constants::{
    COMPRESSED_LEN, COORDINATE_LEN, FIELD_PRIME, GENERATOR_X, GENERATOR_Y, TAG_COMPRESSED_EVEN,
    TAG_COMPRESSED_ODD, TAG_UNCOMPRESSED, UNCOMPRESSED_LEN,
};
use crate::error::Error;

/// An affine secp256k1 point that is known to satisfy y^2 = x^3 + 7, kept as
/// canonical big-endian coordinates. The point at infinity is not
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: [u8; COORDINATE_LEN],
    y: [u8; COORDINATE_LEN],
}

impl Point {
    /// Validates an integer pair given as 32-byte big-endian coordinates.
    pub fn from_coordinates(x: &[u8; 32], y: &[u8; 32]) -> Result<Self, Error> {
        // (0, 0) would stand for infinity; reject it by name rather than
        // relying on it being off the curve.
        if x == &[0; COORDINATE_LEN] && y == &[0; COORDINATE_LEN] {
            return Err(Error::InvalidPair);
        }

        let (x_field, y_field) = (FieldBytes::from(*x), FieldBytes::from(*y));
        let encoded = EncodedPoint::from_affine_coordinates(&x_field, &y_field, false);
        // k256 rejects coordinates not below p and pairs off the curve
        Self::from_encoded(&encoded).ok_or(Error::InvalidPair)
    }

    pub fn generator() -> Self {
        Self {
            x: GENERATOR_X,
            y: GENERATOR_Y,
        }
    }

    /// scalar * G, delegated to k256.
    pub fn from_secret_key(secret_key: &SecretKey) -> Self {
        let encoded_point = secret_key.public_key().to_encoded_point(false);
        let bytes = encoded_point.as_bytes();

        let mut x = [0u8; COORDINATE_LEN];
        let mut y = [0u8; COORDINATE_LEN];
        x.copy_from_slice(&bytes[1..1 + COORDINATE_LEN]);
        y.copy_from_slice(&bytes[1 + COORDINATE_LEN..UNCOMPRESSED_LEN]);

        Self { x, y }
    }

    pub fn x_bytes(&self) -> [u8; 32] {
        self.x
    }

    pub fn y_bytes(&self) -> [u8; 32] {
        self.y
    }

    pub fn is_y_odd(&self) -> bool {
        self.y[COORDINATE_LEN - 1] & 1 == 1
    }

    // Compress point to 33 bytes (0x02/0x03 + x coordinate)
    pub fn compress(&self) -> [u8; COMPRESSED_LEN] {
        let mut result = [0u8; COMPRESSED_LEN];
        result[0] = if self.is_y_odd() { TAG_COMPRESSED_ODD } else { TAG_COMPRESSED_EVEN };
        result[1..].copy_from_slice(&self.x);
        result
    }

    // Serialize uncompressed point to 65 bytes (0x04 + x + y)
    pub fn serialize_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let mut result = [0u8; UNCOMPRESSED_LEN];
        result[0] = TAG_UNCOMPRESSED;
        result[1..1 + COORDINATE_LEN].copy_from_slice(&self.x);
        result[1 + COORDINATE_LEN..].copy_from_slice(&self.y);
        result
    }

    /// Recovers y from x and the parity tag.
    pub fn from_compressed(data: &[u8; COMPRESSED_LEN]) -> Result<Self, Error> {
        if data[0] != TAG_COMPRESSED_EVEN && data[0] != TAG_COMPRESSED_ODD {
            return Err(Error::InvalidBinary("compressed key must start with 0x02 or 0x03"));
        }
        // big-endian, so byte order is numeric order
        if data[1..] >= FIELD_PRIME[..] {
            return Err(Error::InvalidBinary("x coordinate is not below the field prime"));
        }

        let encoded = EncodedPoint::from_bytes(data)
            .map_err(|_| Error::InvalidBinary("malformed compressed key"))?;
        Self::from_encoded(&encoded).ok_or(Error::InvalidBinary("x coordinate is not on the curve"))
    }

    pub fn from_uncompressed(data: &[u8; UNCOMPRESSED_LEN]) -> Result<Self, Error> {
        if data[0] != TAG_UNCOMPRESSED {
            return Err(Error::InvalidBinary("uncompressed key must start with 0x04"));
        }

        let mut x = [0u8; COORDINATE_LEN];
        let mut y = [0u8; COORDINATE_LEN];
        x.copy_from_slice(&data[1..1 + COORDINATE_LEN]);
        y.copy_from_slice(&data[1 + COORDINATE_LEN..]);

        Self::from_coordinates(&x, &y)
            .map_err(|_| Error::InvalidBinary("coordinates are not a point on the curve"))
    }

    /// Decodes through k256, which checks the curve equation and picks the
    /// square root matching a compressed tag.
    fn from_encoded(encoded: &EncodedPoint) -> Option<Self> {
        let affine: AffinePoint = Option::from(AffinePoint::from_encoded_point(encoded))?;
        let uncompressed = affine.to_encoded_point(false);

        let mut x = [0u8; COORDINATE_LEN];
        let mut y = [0u8; COORDINATE_LEN];
        x.copy_from_slice(uncompressed.x()?);
        y.copy_from_slice(uncompressed.y()?);

        Some(Self { x, y })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const PAIR_X: &str = "b805174bd496b275e711d5a9f1bcbaa4bba1a77176dbdb5fdd8b769da62a36a9";
    const PAIR_Y: &str = "c3dfa7c8ccb509f9a66efd6d8d1db6b25aa7c100476154b6303d76c28eda099b";

    fn bytes32(s: &str) -> [u8; 32] {
        hex::decode(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn should_accept_points_on_the_curve() {
        let point = Point::from_coordinates(&bytes32(PAIR_X), &bytes32(PAIR_Y)).unwrap();
        assert_eq!(point.x_bytes(), bytes32(PAIR_X));
        assert_eq!(point.y_bytes(), bytes32(PAIR_Y));
        assert!(point.is_y_odd());

        let g = Point::from_coordinates(&GENERATOR_X, &GENERATOR_Y).unwrap();
        assert_eq!(g, Point::generator());
        assert!(!g.is_y_odd());
    }

    #[test]
    fn should_reject_the_zero_pair() {
        assert_eq!(Point::from_coordinates(&[0; 32], &[0; 32]), Err(Error::InvalidPair));
    }

    #[test]
    fn should_reject_points_off_the_curve() {
        let mut y = bytes32(PAIR_Y);
        y[31] ^= 1;
        assert_eq!(Point::from_coordinates(&bytes32(PAIR_X), &y), Err(Error::InvalidPair));
        assert_eq!(
            Point::from_coordinates(&[0xff; 32], &bytes32(PAIR_Y)),
            Err(Error::InvalidPair)
        );
    }

    #[test]
    fn should_reject_coordinates_not_below_the_prime() {
        // p itself reduces to zero, so it must not be read as a coordinate
        assert_eq!(
            Point::from_coordinates(&FIELD_PRIME, &GENERATOR_Y),
            Err(Error::InvalidPair)
        );
        assert_eq!(
            Point::from_coordinates(&GENERATOR_X, &FIELD_PRIME),
            Err(Error::InvalidPair)
        );
    }

    #[test]
    fn should_compress_with_parity_tag() {
        let compressed = Point::generator().compress();
        let expected = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
        assert_eq!(hex::encode(compressed), expected);

        let point = Point::from_coordinates(&bytes32(PAIR_X), &bytes32(PAIR_Y)).unwrap();
        assert_eq!(point.compress()[0], TAG_COMPRESSED_ODD);
    }

    #[test]
    fn should_decompress_both_parities() {
        let g = Point::generator();
        assert_eq!(Point::from_compressed(&g.compress()).unwrap(), g);

        // Flipping the tag yields the negated point, -G.
        let mut flipped = g.compress();
        flipped[0] = TAG_COMPRESSED_ODD;
        let negated = Point::from_compressed(&flipped).unwrap();
        assert_eq!(negated.x_bytes(), g.x_bytes());
        assert!(negated.is_y_odd());
        assert_eq!(
            hex::encode(negated.y_bytes()),
            "b7c52588d95c3b9aa25b0403f1eef75702e84bb7597aabe663b82f6f04ef2777"
        );
    }

    #[test]
    fn should_reject_compressed_x_without_root() {
        let mut data = [0u8; 33];
        data[0] = TAG_COMPRESSED_EVEN;
        data[32] = 5;
        assert!(matches!(Point::from_compressed(&data), Err(Error::InvalidBinary(_))));
    }

    #[test]
    fn should_reject_compressed_x_not_below_the_prime() {
        let mut data = [0xffu8; 33];
        data[0] = TAG_COMPRESSED_EVEN;
        assert_eq!(
            Point::from_compressed(&data),
            Err(Error::InvalidBinary("x coordinate is not below the field prime"))
        );

        data[1..].copy_from_slice(&FIELD_PRIME);
        assert_eq!(
            Point::from_compressed(&data),
            Err(Error::InvalidBinary("x coordinate is not below the field prime"))
        );
    }

    #[test]
    fn should_reject_bad_tags() {
        let mut compressed = Point::generator().compress();
        compressed[0] = TAG_UNCOMPRESSED;
        assert!(matches!(Point::from_compressed(&compressed), Err(Error::InvalidBinary(_))));

        let mut uncompressed = Point::generator().serialize_uncompressed();
        uncompressed[0] = TAG_COMPRESSED_EVEN;
        assert!(matches!(Point::from_uncompressed(&uncompressed), Err(Error::InvalidBinary(_))));
    }

    #[test]
    fn should_map_off_curve_uncompressed_to_binary_error() {
        let mut uncompressed = Point::generator().serialize_uncompressed();
        uncompressed[64] ^= 1;
        assert!(matches!(Point::from_uncompressed(&uncompressed), Err(Error::InvalidBinary(_))));

        let mut out_of_range = Point::generator().serialize_uncompressed();
        out_of_range[1..1 + COORDINATE_LEN].copy_from_slice(&FIELD_PRIME);
        assert!(matches!(Point::from_uncompressed(&out_of_range), Err(Error::InvalidBinary(_))));
    }

    #[test]
    fn should_multiply_generator_by_scalar() {
        let mut one = [0u8; 32];
        one[31] = 1;
        let secret_key = SecretKey::from_bytes((&one).into()).unwrap();
        assert_eq!(Point::from_secret_key(&secret_key), Point::generator());

        let scalar = bytes32("d862dc70f3a40b52e9ed3567b073e32dc543f3b51c9eae8f3ac3e95a05af6b65");
        let secret_key = SecretKey::from_bytes((&scalar).into()).unwrap();
        let point = Point::from_secret_key(&secret_key);
        assert_eq!(point.x_bytes(), bytes32(PAIR_X));
        assert_eq!(point.y_bytes(), bytes32(PAIR_Y));
    }
}
