use glyphshift_core::{
    CharsetMode, Config, ConfigBuilder, RotationAlphabet, RotationParams, RoundExecutor,
    ShiftEngine, validate,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIGITS: &str = "0123456789";
const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const HEX_CHARS: &str = "0123456789abcdefABCDEF";
const SYMBOLS: &str = "!.,'\"?_=-+@#$%&()";

fn random_string(rng: &mut StdRng, pool: &str, len: usize) -> String {
    let pool: Vec<char> = pool.chars().collect();
    (0..len).map(|_| pool[rng.gen_range(0..pool.len())]).collect()
}

fn executor(alphabet: RotationAlphabet, params: RotationParams) -> RoundExecutor {
    RoundExecutor::new(alphabet, params)
}

#[test]
fn forward_then_backward_restores_input() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let cases = [
        (RotationAlphabet::Ascii, format!("{DIGITS}{LETTERS} ")),
        (RotationAlphabet::Hex, HEX_CHARS.to_string()),
        (RotationAlphabet::Generic, format!("{DIGITS}{LETTERS}")),
    ];
    for _ in 0..64 {
        let shift = rng.gen_range(-9..=9);
        let params = RotationParams::new(shift).with_ignore_space(true);
        for (alphabet, pool) in &cases {
            let len = rng.gen_range(1..80);
            let input = random_string(&mut rng, pool, len);
            let forward = executor(*alphabet, params).apply_round(&input);
            let back = executor(*alphabet, params.reversed()).apply_round(&forward);
            assert_eq!(back, input, "{alphabet:?} shift={shift}");
        }
    }
}

#[test]
fn printable_class_inverts_for_generic() {
    // Sources and targets both stay inside ' '..='/' for these offsets.
    let params = RotationParams::new(4);
    let input = " !\"#$%&'";
    let forward = executor(RotationAlphabet::Generic, params).apply_round(input);
    assert_eq!(forward, "$%&'()*+");
    let back = executor(RotationAlphabet::Generic, params.reversed()).apply_round(&forward);
    assert_eq!(back, input);
}

#[test]
fn repeated_rounds_equal_one_scaled_round() {
    let mut rng = StdRng::seed_from_u64(42);
    let classes: [(RotationAlphabet, &str, i32); 4] = [
        (RotationAlphabet::Ascii, DIGITS, 10),
        (RotationAlphabet::Ascii, LETTERS, 26),
        (RotationAlphabet::Hex, "abcdefABCDEF", 6),
        (RotationAlphabet::Generic, LETTERS, 26),
    ];
    for _ in 0..32 {
        let shift = rng.gen_range(-7..=7);
        let rounds = rng.gen_range(1..12usize);
        for (alphabet, pool, modulus) in classes {
            let input = random_string(&mut rng, pool, 40);
            let many = executor(alphabet, RotationParams::new(shift)).run(&input, rounds);
            let scaled = (shift * rounds as i32).rem_euclid(modulus);
            let once = executor(alphabet, RotationParams::new(scaled)).apply_round(&input);
            assert_eq!(many, once, "{alphabet:?} shift={shift} rounds={rounds}");
        }
    }
}

#[test]
fn repeated_rounds_equal_one_scaled_round_for_printables() {
    for rounds in 1..=10usize {
        let input = " !\"#$%";
        let many = executor(RotationAlphabet::Generic, RotationParams::new(1)).run(input, rounds);
        let once = executor(RotationAlphabet::Generic, RotationParams::new(rounds as i32 % 95))
            .apply_round(input);
        assert_eq!(many, once, "rounds={rounds}");
    }
}

// Printables outside every letter/digit class of `alphabet`.
fn printable_only(alphabet: RotationAlphabet, ch: char) -> bool {
    if !(' '..='~').contains(&ch) {
        return false;
    }
    match alphabet {
        RotationAlphabet::Hex => !ch.is_ascii_hexdigit(),
        RotationAlphabet::Generic => {
            !(ch.is_numeric() || ch.is_uppercase() || ch.is_lowercase())
        }
        RotationAlphabet::Ascii => false,
    }
}

#[test]
fn repeated_rounds_equal_one_scaled_round_across_printable_range() {
    let mut rng = StdRng::seed_from_u64(95);
    for alphabet in [RotationAlphabet::Hex, RotationAlphabet::Generic] {
        let mut checked = 0;
        for _ in 0..4_000 {
            let start = char::from(rng.gen_range(b' '..=b'~'));
            if !printable_only(alphabet, start) {
                continue;
            }
            let shift = rng.gen_range(-6..=6);
            let rounds = rng.gen_range(1..=5usize);
            let stepper = executor(alphabet, RotationParams::new(shift));
            // Only a walk that never enters a letter or digit class obeys mod 95.
            let mut current = start.to_string();
            let mut stayed = true;
            for _ in 1..rounds {
                current = stepper.apply_round(&current);
                let ch = current.chars().next().unwrap();
                stayed &= printable_only(alphabet, ch);
            }
            if !stayed {
                continue;
            }
            let input = start.to_string();
            let many = stepper.run(&input, rounds);
            let scaled = (shift * rounds as i32).rem_euclid(95);
            let once = executor(alphabet, RotationParams::new(scaled)).apply_round(&input);
            assert_eq!(many, once, "{alphabet:?} start={start:?} shift={shift} rounds={rounds}");
            if shift != 0 && rounds > 1 {
                checked += 1;
            }
        }
        assert!(checked > 30, "{alphabet:?} only checked {checked} multi-round walks");
    }
}

#[test]
fn hash_only_is_deterministic_and_avalanches() {
    let mut rng = StdRng::seed_from_u64(7);
    let pool = format!("{DIGITS}{LETTERS}{SYMBOLS} ");
    for hash_rounds in 1..=4 {
        let engine = ShiftEngine::new(ConfigBuilder::new().with_hash_rounds(hash_rounds).build());
        let input = random_string(&mut rng, &pool, 24);
        let first = engine.hash_only(&input).unwrap();
        let second = engine.hash_only(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 128);

        let mut tweaked: Vec<char> = input.chars().collect();
        tweaked[0] = if tweaked[0] == 'a' { 'b' } else { 'a' };
        let tweaked: String = tweaked.into_iter().collect();
        let other = engine.hash_only(&tweaked).unwrap();
        let shared_prefix = first
            .chars()
            .zip(other.chars())
            .take_while(|(a, b)| a == b)
            .count();
        assert!(shared_prefix < 8, "digests share a {shared_prefix}-char prefix");
        let matching = first
            .chars()
            .zip(other.chars())
            .filter(|(a, b)| a == b)
            .count();
        assert!(matching < 32, "digests agree at {matching} positions");
    }
}

#[test]
fn validation_rejects_any_foreign_character() {
    let mut rng = StdRng::seed_from_u64(99);
    let allowed = [
        (CharsetMode::Ascii, format!("{DIGITS}{LETTERS} "), ";!\t\u{e9}"),
        (CharsetMode::Hex, format!("{HEX_CHARS} \t\n"), "gxZ;!"),
        (CharsetMode::Generic, format!("{DIGITS}{LETTERS}{SYMBOLS} "), ";{}[]\t"),
    ];
    for (mode, pool, foreign) in &allowed {
        assert!(validate(*mode, "").is_err());
        for _ in 0..32 {
            let len = rng.gen_range(1..40);
            let clean = random_string(&mut rng, pool, len);
            assert!(validate(*mode, &clean).is_ok(), "{mode} rejected {clean:?}");
            let bad = random_string(&mut rng, foreign, 1);
            let at = rng.gen_range(0..=clean.len());
            let mut dirty = clean.clone();
            dirty.insert_str(at, &bad);
            assert!(validate(*mode, &dirty).is_err(), "{mode} accepted {dirty:?}");
        }
    }
}

#[test]
fn engine_outputs_keep_length_for_rotations() {
    let mut rng = StdRng::seed_from_u64(1234);
    let engine = ShiftEngine::new(Config::default());
    for _ in 0..16 {
        let len = rng.gen_range(1..300);
        let input = random_string(&mut rng, &format!("{DIGITS}{LETTERS} "), len);
        assert_eq!(engine.ascii_rotate(&input).unwrap().len(), input.len());
        let hex = random_string(&mut rng, HEX_CHARS, len);
        assert_eq!(engine.hex_rotate(&hex).unwrap().len(), hex.len());
    }
}
