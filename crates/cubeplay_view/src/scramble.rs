use cubeplay_core::{Face, Twist, TwistDirection};
use rand::Rng;

/// Generates a random scramble of `length` twists.
///
/// Each twist is drawn uniformly from the 18 face twists, except that a twist
/// is never on the same face as the one before it. Longer cancellations such
/// as `F B F'` are allowed.
pub fn generate_scramble<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<Twist> {
    let mut twists: Vec<Twist> = Vec::with_capacity(length);
    while twists.len() < length {
        let face = Face::ALL[rng.random_range(0..Face::ALL.len())];
        let direction = TwistDirection::ALL[rng.random_range(0..TwistDirection::ALL.len())];
        if twists.last().is_some_and(|prev| prev.face == face) {
            continue;
        }
        twists.push(Twist::new(face, direction));
    }
    twists
}
