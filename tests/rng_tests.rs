//! RNG tests for werewolf-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие перестановок
//! - что shuffle – перестановка (ничего не теряется и не дублируется)
//! - краевые случаи (пустой срез, один элемент)
//! - генерацию кодов сессий через RandomSource

use werewolf_engine::engine::RandomSource;
use werewolf_engine::infra::{generate_code, generate_unique_code, DeterministicRng, CODE_LEN};

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..16).collect();
    let mut b: Vec<u32> = (0..16).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 — different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a: Vec<u32> = (0..16).collect();
    let mut b: Vec<u32> = (0..16).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3 — shuffle is a permutation
//
#[test]
fn shuffle_produces_no_duplicates() {
    let mut rng = DeterministicRng::from_seed(555);

    let mut cards = (0..16).collect::<Vec<u32>>();
    rng.shuffle(&mut cards);

    let mut sorted = cards.clone();
    sorted.sort_unstable();
    sorted.dedup();

    assert_eq!(sorted.len(), 16, "Shuffled pool must keep all 16 cards");
}

//
// TEST 4 — shuffle on empty slice must not crash
//
#[test]
fn shuffle_empty_slice_ok() {
    let mut rng = DeterministicRng::from_seed(42);
    let mut arr: Vec<u32> = vec![];
    rng.shuffle(&mut arr);
    assert!(arr.is_empty());
}

//
// TEST 5 — shuffle on 1-element slice must remain the same
//
#[test]
fn shuffle_one_element_ok() {
    let mut rng = DeterministicRng::from_seed(42);
    let mut arr = vec![123];
    rng.shuffle(&mut arr);
    assert_eq!(arr, vec![123]);
}

//
// TEST 6 — session codes: 5 заглавных букв, без повторов внутри кода
//
#[test]
fn generate_code_shape() {
    let mut rng = DeterministicRng::from_seed(7);

    for _ in 0..100 {
        let code = generate_code(&mut rng);
        assert_eq!(code.chars().count(), CODE_LEN);
        assert!(code.chars().all(|c| c.is_ascii_uppercase()));

        let mut letters: Vec<char> = code.chars().collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), CODE_LEN);
    }
}

//
// TEST 7 — generate_code детерминирован по seed
//
#[test]
fn generate_code_deterministic() {
    let mut r1 = DeterministicRng::from_seed(900);
    let mut r2 = DeterministicRng::from_seed(900);

    assert_eq!(generate_code(&mut r1), generate_code(&mut r2));
}

//
// TEST 8 — generate_unique_code пропускает занятые коды
//
#[test]
fn generate_unique_code_skips_taken() {
    let mut r1 = DeterministicRng::from_seed(31);
    let taken = generate_code(&mut r1);

    // тот же seed: первый кандидат совпадёт с taken и будет отброшен
    let mut r2 = DeterministicRng::from_seed(31);
    let free = generate_unique_code(&mut r2, |c| c == taken);

    assert_ne!(free, taken);
    assert_eq!(free.chars().count(), CODE_LEN);
}
