use super::*;

#[test]
fn xmur3_matches_reference_values() {
    assert_eq!(xmur3("abc123"), 3_312_988_223);
    assert_eq!(xmur3("seed"), 131_604_589);
    assert_eq!(xmur3(""), 167_010_153);
}

#[test]
fn stream_matches_reference_values() {
    let mut rng = SeededRng::new("abc123");
    let got: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
    assert_eq!(got, vec![1_131_022_037, 636_457_222, 478_043_750, 4_210_982_785]);
}

#[test]
fn empty_seed_substitutes_only_the_first_word() {
    let mut blank = SeededRng::new("");
    assert_eq!(
        blank,
        SeededRng::from_words(xmur3(DEFAULT_SEED), xmur3("$"), xmur3("@"), xmur3("#"))
    );
    assert_eq!(blank.next_f64(), 0.9607875822111964);
    assert_eq!(SeededRng::new(DEFAULT_SEED).next_f64(), 0.5677963919006288);
}

#[test]
fn same_seed_same_stream_and_one_char_changes_it() {
    let mut a = SeededRng::new("sunset-01");
    let mut b = SeededRng::new("sunset-01");
    let mut c = SeededRng::new("sunset-02");
    let sa: Vec<u32> = (0..32).map(|_| a.next_u32()).collect();
    let sb: Vec<u32> = (0..32).map(|_| b.next_u32()).collect();
    let sc: Vec<u32> = (0..32).map(|_| c.next_u32()).collect();
    assert_eq!(sa, sb);
    assert_ne!(sa, sc);
}

#[test]
fn floats_stay_in_unit_interval() {
    let mut rng = SeededRng::new("range");
    for _ in 0..10_000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn next_int_is_inclusive_and_bounded() {
    let mut rng = SeededRng::new("ints");
    let mut seen = [false; 7];
    for _ in 0..2_000 {
        let v = rng.next_int(0, 6);
        assert!((0..=6).contains(&v));
        seen[v as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
    assert_eq!(rng.next_int(4, 4), 4);
    let swapped = rng.next_int(9, 3);
    assert!((3..=9).contains(&swapped));
}

#[test]
fn pick_handles_empty_and_nonempty() {
    let mut rng = SeededRng::new("pick");
    let empty: [u8; 0] = [];
    assert!(rng.pick(&empty).is_none());
    let items = [10, 20, 30];
    for _ in 0..100 {
        assert!(items.contains(rng.pick(&items).unwrap()));
    }
}

#[test]
fn shuffle_is_a_permutation_and_reproducible() {
    let items: Vec<u32> = (0..20).collect();
    let a = SeededRng::new("shuffle").shuffle(&items);
    let b = SeededRng::new("shuffle").shuffle(&items);
    assert_eq!(a, b);
    let mut sorted = a.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, items);
    assert_ne!(a, items);
}

#[test]
fn shuffle_consumes_one_draw_per_element() {
    let mut a = SeededRng::new("draws");
    let mut b = SeededRng::new("draws");
    let _ = a.shuffle(&[1, 2, 3, 4, 5]);
    for _ in 0..5 {
        b.next_u32();
    }
    assert_eq!(a, b);
}
