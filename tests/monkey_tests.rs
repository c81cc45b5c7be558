//! Monkey tests - long random key sequences and exhaustive short ones
//!
//! Every sequence mixes tokens with `=`, Backspace and Escape. After each
//! key the buffer must still satisfy the accumulator's shape rules.

mod common;

use calcpad::keymap::Key;
use calcpad::model::AppModel;
use calcpad::token::{is_number_boundary, is_operator_char};
use common::{buffer, press, test_model};

const KEYS: [Key; 21] = [
    Key::Char('0'),
    Key::Char('1'),
    Key::Char('2'),
    Key::Char('3'),
    Key::Char('4'),
    Key::Char('5'),
    Key::Char('6'),
    Key::Char('7'),
    Key::Char('8'),
    Key::Char('9'),
    Key::Char('+'),
    Key::Char('-'),
    Key::Char('*'),
    Key::Char('/'),
    Key::Char('.'),
    Key::Char('('),
    Key::Char(')'),
    Key::Char('='),
    Key::Enter,
    Key::Backspace,
    Key::Escape,
];

/// xorshift64, enough to spread key choices without a dependency
struct KeyStream(u64);

impl KeyStream {
    fn next_key(&mut self) -> Key {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        KEYS[(x % KEYS.len() as u64) as usize]
    }
}

fn assert_buffer_shape(model: &AppModel, history: &[Key]) {
    let buf = buffer(model);

    assert!(!buf.is_empty(), "empty buffer after {:?}", history);
    assert!(
        buf.chars()
            .all(|c| c.is_ascii_digit() || c == '.' || is_number_boundary(c)),
        "unexpected character in {:?} after {:?}",
        buf,
        history
    );

    let chars: Vec<char> = buf.chars().collect();
    assert!(
        chars
            .windows(2)
            .all(|w| !(is_operator_char(w[0]) && is_operator_char(w[1]))),
        "adjacent operators in {:?} after {:?}",
        buf,
        history
    );

    for number in buf.split(is_number_boundary) {
        assert!(
            number.matches('.').count() <= 1,
            "number {:?} in {:?} has two decimal points after {:?}",
            number,
            buf,
            history
        );
    }
}

fn run_keys(model: &mut AppModel, keys: &[Key]) {
    for (i, key) in keys.iter().enumerate() {
        press(model, *key);
        assert_buffer_shape(model, &keys[..=i]);
    }
}

// ========================================================================
// Random Key Storms
// ========================================================================

#[test]
fn test_random_key_storm_keeps_buffer_well_formed() {
    for seed in [0x9E37_79B9_7F4A_7C15_u64, 42, 7, 0xDEAD_BEEF, 1 << 40] {
        let mut stream = KeyStream(seed);
        let keys: Vec<Key> = (0..5_000).map(|_| stream.next_key()).collect();

        let mut model = test_model();
        run_keys(&mut model, &keys);
    }
}

#[test]
fn test_random_storm_without_clear_does_not_crash() {
    let mut stream = KeyStream(0x1234_5678);
    let keys: Vec<Key> = (0..5_000)
        .map(|_| stream.next_key())
        .filter(|key| *key != Key::Escape)
        .collect();

    let mut model = test_model();
    run_keys(&mut model, &keys);
}

#[test]
fn test_preview_hidden_whenever_error_shown() {
    let mut stream = KeyStream(99);
    let mut model = test_model();

    for _ in 0..5_000 {
        press(&mut model, stream.next_key());
        if model.ui.error.is_some() {
            assert!(model.ui.preview.is_empty());
        }
    }
}

// ========================================================================
// Exhaustive Short Sequences
// ========================================================================

#[test]
fn test_every_short_sequence_keeps_buffer_well_formed() {
    let alphabet = [
        Key::Char('1'),
        Key::Char('0'),
        Key::Char('.'),
        Key::Char('-'),
        Key::Char('*'),
        Key::Char('('),
        Key::Char(')'),
        Key::Char('='),
        Key::Backspace,
        Key::Escape,
    ];

    let mut keys = Vec::with_capacity(4);
    for len in 1..=4u32 {
        for mut n in 0..alphabet.len().pow(len) {
            keys.clear();
            for _ in 0..len {
                keys.push(alphabet[n % alphabet.len()]);
                n /= alphabet.len();
            }
            let mut model = test_model();
            run_keys(&mut model, &keys);
        }
    }
}

#[test]
fn test_committed_results_keep_buffer_well_formed() {
    // Seed the buffer with committed decimals and negatives, then keep typing
    for prefix in ["0.1+0.2=", "1-4=", "1/3=", "-.5*3=", "2/8="] {
        let mut stream = KeyStream(prefix.len() as u64 + 1);
        let mut keys: Vec<Key> = prefix.chars().map(Key::from_char).collect();
        keys.extend((0..500).map(|_| stream.next_key()));

        let mut model = test_model();
        run_keys(&mut model, &keys);
    }
}
