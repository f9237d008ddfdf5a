//! Property tests for the public engine API.
//!
//! Every algorithm must round-trip the alphabetic projection of its input
//! through `run` with the same key. Lossy corners (Playfair fillers,
//! transposition padding) are pinned down explicitly rather than avoided.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use ciphercraft::ciphers::{Cipher, RailFence};
use ciphercraft::engine::{AlgorithmId, Direction, TransformRequest, run, run_with};
use ciphercraft::error::{EngineError, ValidationError};
use ciphercraft::format::FormatOptions;
use ciphercraft::key::validate;
use ciphercraft::text::CanonicalText;

/// One valid key per algorithm.
const KEYS: [(AlgorithmId, &str); 6] = [
    (AlgorithmId::Caesar, "-7"),
    (AlgorithmId::Monoalphabetic, "QWERTYUIOPASDFGHJKLZXCVBNM"),
    (AlgorithmId::Playfair, "SECRET"),
    (AlgorithmId::Vigenere, "SECRET"),
    (AlgorithmId::Transposition, "5 4 2 3 1 7 6"),
    (AlgorithmId::RailFence, "3"),
];

/// Texts with no doubled letters inside a Playfair pair, even letter
/// count, no `J`, and no trailing `X`, so every algorithm is exact.
const TEXTS: [&str; 4] = [
    "Attack at dawn",
    "The quick brown fox dumps over two lazy dogs",
    "Meet me at noon, 12:00!",
    "",
];

fn encode(algorithm: AlgorithmId, key: &str, text: &str) -> String {
    run(&TransformRequest::new(Direction::Encode, algorithm, key, text))
        .unwrap()
        .result
}

fn decode(algorithm: AlgorithmId, key: &str, text: &str) -> String {
    run(&TransformRequest::new(Direction::Decode, algorithm, key, text))
        .unwrap()
        .result
}

fn letters_only(text: &str) -> String {
    CanonicalText::new(text).letters_string()
}

// ═══════════════════════════════════════════════════════════════════════
// Round-trip laws
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn roundtrip_recovers_letter_projection() {
    for (algorithm, key) in KEYS {
        for text in TEXTS {
            let encoded = encode(algorithm, key, text);
            let decoded = decode(algorithm, key, &encoded);
            assert_eq!(
                letters_only(&decoded),
                letters_only(text),
                "{} with key {:?} on {:?}",
                algorithm,
                key,
                text
            );
        }
    }
}

/// Substitution-family ciphers keep non-letters in place, so the full
/// canonical text comes back.
#[test]
fn substitution_family_keeps_non_letters() {
    for algorithm in [
        AlgorithmId::Caesar,
        AlgorithmId::Monoalphabetic,
        AlgorithmId::Vigenere,
    ] {
        let key = KEYS.iter().find(|(a, _)| *a == algorithm).unwrap().1;
        let text = "Meet me at noon, 12:00!";
        let encoded = encode(algorithm, key, text);
        assert_eq!(encoded.len(), text.len());
        assert_eq!(decode(algorithm, key, &encoded), "MEET ME AT NOON, 12:00!");
    }
}

/// Grid and route ciphers strip everything but letters.
#[test]
fn grid_family_strips_non_letters() {
    for algorithm in [
        AlgorithmId::Playfair,
        AlgorithmId::Transposition,
        AlgorithmId::RailFence,
    ] {
        let key = KEYS.iter().find(|(a, _)| *a == algorithm).unwrap().1;
        let encoded = encode(algorithm, key, "Meet me at noon, 12:00!");
        assert!(
            encoded.chars().all(|c| c.is_ascii_uppercase()),
            "{} produced {:?}",
            algorithm,
            encoded
        );
    }
}

#[test]
fn results_are_uppercase() {
    for (algorithm, key) in KEYS {
        let encoded = encode(algorithm, key, "lower case input");
        assert_eq!(encoded, encoded.to_uppercase());
    }
}

/// Case folding must not expand a pass-through symbol into extra letters.
#[test]
fn non_ascii_symbols_survive_roundtrip() {
    assert_eq!(encode(AlgorithmId::Caesar, "3", "straße"), "VWUDßH");
    for algorithm in [
        AlgorithmId::Caesar,
        AlgorithmId::Monoalphabetic,
        AlgorithmId::Vigenere,
    ] {
        let key = KEYS.iter().find(|(a, _)| *a == algorithm).unwrap().1;
        let decoded = decode(algorithm, key, &encode(algorithm, key, "straße"));
        assert_eq!(decoded, "STRAßE", "{}", algorithm);
        assert_eq!(letters_only(&decoded), "STRAE");
    }
}

/// Grouping is a transposition ciphertext presentation; it never touches
/// other algorithms or decoded plaintext.
#[test]
fn grouping_only_splits_transposition_ciphertext() {
    let options = FormatOptions {
        show_steps: false,
        group_size: Some(5),
    };
    let with_groups = |direction, algorithm, key: &str, text: &str| {
        run_with(
            &TransformRequest::new(direction, algorithm, key, text),
            &options,
        )
        .unwrap()
        .result
    };

    let encoded = with_groups(Direction::Encode, AlgorithmId::Caesar, "3", "HELLOWORLD");
    assert_eq!(encoded, "KHOORZRUOG");
    assert_eq!(
        with_groups(Direction::Decode, AlgorithmId::Caesar, "3", &encoded),
        "HELLOWORLD"
    );

    let encoded = with_groups(Direction::Encode, AlgorithmId::Transposition, "2 1", "HELLOWORLD");
    assert_eq!(encoded, "ELWRD HLOOL");
    assert_eq!(
        with_groups(Direction::Decode, AlgorithmId::Transposition, "2 1", &encoded),
        "HELLOWORLD"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Caesar
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn caesar_shift_additivity() {
    for k in 0..26 {
        let once = encode(AlgorithmId::Caesar, &k.to_string(), "Zebra Crossing");
        let back = encode(AlgorithmId::Caesar, &(26 - k).to_string(), &once);
        assert_eq!(back, "ZEBRA CROSSING", "k = {}", k);
    }
}

#[test]
fn caesar_negative_shift_wraps() {
    assert_eq!(
        encode(AlgorithmId::Caesar, "-1", "abc"),
        encode(AlgorithmId::Caesar, "25", "abc")
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Monoalphabetic
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn monoalphabetic_key_shapes() {
    assert!(validate(AlgorithmId::Monoalphabetic, "QWERTYUIOPASDFGHJKLZXCVBNM").is_ok());
    assert_eq!(
        validate(AlgorithmId::Monoalphabetic, "QWERTYUIOPASDFGHJKLZXCVBN"),
        Err(ValidationError::WrongLength { count: 25 })
    );
    assert!(matches!(
        validate(AlgorithmId::Monoalphabetic, "QQERTYUIOPASDFGHJKLZXCVBNM"),
        Err(ValidationError::DuplicateLetters { ref letters }) if letters == "Q"
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// Transposition
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn transposition_key_shapes() {
    assert!(validate(AlgorithmId::Transposition, "5 4 2 3 1 7 6").is_ok());
    assert!(matches!(
        validate(AlgorithmId::Transposition, "1 2 2"),
        Err(ValidationError::InvalidPermutation { .. })
    ));
}

/// Plaintext ending in the padding letter loses it on decode.
#[test]
fn transposition_trailing_filler_is_lossy() {
    let key = "3 1 2";
    let encoded = encode(AlgorithmId::Transposition, key, "BOX");
    assert_eq!(encoded, "OXB");
    assert_eq!(decode(AlgorithmId::Transposition, key, &encoded), "BO");
}

// ═══════════════════════════════════════════════════════════════════════
// Rail fence
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn rail_fence_one_rail_is_identity_on_letters() {
    let fence = RailFence::new(1);
    let text = CanonicalText::new("We are discovered, flee!");
    assert_eq!(fence.encode(&text), "WEAREDISCOVEREDFLEE");
}

#[test]
fn rail_fence_rejects_one_rail_at_validation() {
    let request = TransformRequest::new(Direction::Encode, AlgorithmId::RailFence, "1", "abc");
    assert_eq!(
        run(&request),
        Err(EngineError::InvalidParameter(ValidationError::TooFewRails {
            rails: 1
        }))
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Playfair
// ═══════════════════════════════════════════════════════════════════════

/// `LL` is split with the filler, so the decoded text keeps the `X`.
#[test]
fn playfair_hello_is_filler_expanded() {
    let encoded = encode(AlgorithmId::Playfair, "SECRET", "HELLO");
    assert_eq!(encoded, "ISKYIQ");
    assert_eq!(encoded.len() % 2, 0);
    assert_eq!(decode(AlgorithmId::Playfair, "SECRET", &encoded), "HELXLO");
}

#[test]
fn playfair_odd_length_is_padded() {
    let encoded = encode(AlgorithmId::Playfair, "SECRET", "CAT");
    assert_eq!(encoded.len(), 4);
    assert_eq!(decode(AlgorithmId::Playfair, "SECRET", &encoded), "CATX");
}

// ═══════════════════════════════════════════════════════════════════════
// Vigenère
// ═══════════════════════════════════════════════════════════════════════

/// Checks the result letter by letter against `(p + k) mod 26`.
#[test]
fn vigenere_matches_tableau_arithmetic() {
    let plain = "ATTACKATDAWN";
    let key = "SECRET";
    let expected: String = plain
        .bytes()
        .zip(key.bytes().cycle())
        .map(|(p, k)| (b'A' + ((p - b'A') + (k - b'A')) % 26) as char)
        .collect();

    let encoded = encode(AlgorithmId::Vigenere, key, plain);
    assert_eq!(encoded, expected);
    assert_eq!(encoded, "SXVRGDSXFRAG");
}

// ═══════════════════════════════════════════════════════════════════════
// Independence
// ═══════════════════════════════════════════════════════════════════════

/// Requests share nothing; running them from many threads gives the same
/// answers as running them one by one.
#[test]
fn concurrent_requests_are_independent() {
    let expected: Vec<String> = KEYS
        .iter()
        .map(|(a, k)| encode(*a, k, "Parallel requests"))
        .collect();

    let handles: Vec<_> = KEYS
        .iter()
        .map(|&(a, k)| std::thread::spawn(move || encode(a, k, "Parallel requests")))
        .collect();
    let actual: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(actual, expected);
}
