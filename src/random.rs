use crate::{Bag, Rack, Racks, Scores, Tile, WordList, PLAYERS, RACK_LEN};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Every two letter word of the standard tournament list. Small enough to build quickly and
/// large enough for one tile plays almost anywhere.
pub const TWO_LETTER_WORDS: [&str; 107] = [
    "aa", "ab", "ad", "ae", "ag", "ah", "ai", "al", "am", "an", "ar", "as", "at", "aw", "ax",
    "ay", "ba", "be", "bi", "bo", "by", "da", "de", "do", "ed", "ef", "eh", "el", "em", "en",
    "er", "es", "ew", "ex", "fa", "fe", "gi", "go", "ha", "he", "hi", "hm", "ho", "id", "if",
    "in", "is", "it", "jo", "ka", "ki", "la", "li", "lo", "ma", "me", "mi", "mm", "mo", "mu",
    "my", "na", "ne", "no", "nu", "od", "oe", "of", "oh", "oi", "ok", "om", "on", "op", "or",
    "os", "ow", "ox", "oy", "pa", "pe", "pi", "po", "qi", "re", "sh", "si", "so", "ta", "te",
    "ti", "to", "uh", "um", "un", "up", "us", "ut", "we", "wo", "xi", "xu", "ya", "ye", "yo",
    "za", "zo",
];

/// A [word list](WordList) of [TWO_LETTER_WORDS].
pub fn two_letter_words() -> WordList {
    TWO_LETTER_WORDS.into_iter().collect()
}

/// Parses a rack written as letters, with `'_'` for an unplayed blank.
pub fn rack_from(tiles: &str) -> Rack {
    tiles
        .chars()
        .map(|character| match character {
            '_' => Tile::Blank,
            letter => Tile::Letter(letter),
        })
        .collect()
}

/// A rack of a random, small, non-zero number of random [tiles](Tile), at most [RACK_LEN].
pub fn random_rack<R: Rng + ?Sized>(rng: &mut R) -> Rack {
    let rack_len = rng.gen_range(1..=RACK_LEN);
    (0..rack_len).map(|_| rng.gen::<Tile>()).collect()
}

/// It inserts a random, small, non-zero number of [tiles](Tile) into the bag.
///
/// # Returns
///
/// The number of additional [tiles](Tile) in the bag.
pub fn random_bag<R: Rng + ?Sized>(rng: &mut R, bag: &mut Bag) -> usize {
    let bag_len = rng.gen_range(10..20);
    bag.extend((0..bag_len).map(|_| rng.gen::<Tile>()));

    bag_len
}

/// Replaces each player's rack with a full rack of random [tiles](Tile).
pub fn random_racks<R: Rng + ?Sized>(rng: &mut R, racks: &mut Racks) {
    for rack in racks {
        rack.clear();
        rack.extend((0..RACK_LEN).map(|_| rng.gen::<Tile>()));
    }
}

/// Sets each player's score to a random, medium, non-zero number.
pub fn random_scores<R: Rng + ?Sized>(rng: &mut R, scores: &mut Scores) {
    let possible_scores = Uniform::from(100..200);
    scores.fill_with(|| possible_scores.sample(rng));
}

/// Sets the current player to a random player.
///
/// # Returns
///
/// The index of the player whose turn it is.
pub fn random_current_player<R: Rng + ?Sized>(rng: &mut R, current_player: &mut usize) -> usize {
    *current_player = rng.gen_range(0..PLAYERS);
    *current_player
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lexicon;
    use itertools::Itertools;

    #[test]
    fn two_letter_words_unique() {
        assert!(TWO_LETTER_WORDS.iter().all_unique());
        assert!(TWO_LETTER_WORDS.iter().all(|word| word.len() == 2));
        assert_eq!(TWO_LETTER_WORDS.len(), two_letter_words().len());
        assert!(two_letter_words().contains("qi"));
    }

    #[test]
    fn rack_from_blanks() {
        assert_eq!(
            vec![Tile::Letter('a'), Tile::Blank, Tile::Letter('b')],
            rack_from("a_b").to_vec()
        );
    }

    #[test]
    fn random_rack_bounded() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let rack = random_rack(&mut rng);
            assert!((1..=RACK_LEN).contains(&rack.len()));
        }
    }

    #[test]
    fn random_bag_empty() {
        let mut bag = Bag::new();

        let bag_len = random_bag(&mut rand::thread_rng(), &mut bag);

        assert_eq!(bag.len(), bag_len);
    }

    #[test]
    fn random_racks_full() {
        let mut racks = Racks::default();

        random_racks(&mut rand::thread_rng(), &mut racks);

        for rack in &racks {
            assert_eq!(RACK_LEN, rack.len());
        }
    }

    #[test]
    fn random_scores_zeros() {
        let mut scores = Scores::default();

        random_scores(&mut rand::thread_rng(), &mut scores);

        for score in scores {
            assert!(score > 0);
        }
    }

    #[test]
    fn random_current_player_some_players() {
        let mut current_player = 0;

        let random_current_player =
            random_current_player(&mut rand::thread_rng(), &mut current_player);

        assert!((0..PLAYERS).contains(&random_current_player));
        assert_eq!(random_current_player, current_player);
    }
}
