use draw_poker::evaluator::{Category, Comparison};
use draw_poker::hand::{Hand, PokerHand};

/// Reference hands for one category: two typical examples, the weakest and
/// strongest of the category, a suit-swapped twin of `example`, and a near
/// miss that lands in a different category.
struct Fixture {
    category: Category,
    example: &'static str,
    other: &'static str,
    lowest: &'static str,
    highest: &'static str,
    equivalent: &'static str,
    near_miss: &'static str,
}

const FIXTURES: [Fixture; 9] = [
    Fixture {
        category: Category::HighCard,
        example: "2D 4H 7S 9C JH",
        other: "3S 5D 8H TC KH",
        lowest: "2D 3H 4S 5C 7H",
        highest: "9D JH QS KC AH",
        equivalent: "2D 4C 7D 9S JS",
        near_miss: "2D 4H 7S 9C 9D",
    },
    Fixture {
        category: Category::OnePair,
        example: "2D 2H 7S 9C JH",
        other: "AS AD 8H TC KH",
        lowest: "2D 2H 3S 4C 5H",
        highest: "AH AS JC QD KS",
        equivalent: "2D 2C 7H 9S JS",
        near_miss: "2D 7H 7S 9C 9H",
    },
    Fixture {
        category: Category::TwoPair,
        example: "2D 2H 7S 7C JH",
        other: "AS AD KH KC 9H",
        lowest: "2D 2H 3S 3C 4H",
        highest: "AH AS KH KD QS",
        equivalent: "2D 2C 7H 7S JD",
        near_miss: "2D 2H 7S 7C 7H",
    },
    Fixture {
        category: Category::ThreeOfAKind,
        example: "2D 2H 2S 7C JH",
        other: "AS AD AH KC 9H",
        lowest: "2D 2H 2S 3C 4H",
        highest: "AH AS AC KD QS",
        equivalent: "2D 2C 2H 7S JD",
        near_miss: "7S 7C 7H 4D 4H",
    },
    Fixture {
        category: Category::Straight,
        example: "TD JH KS QC AH",
        other: "AS 2D 3H 4C 5H",
        lowest: "AD 2H 3C 4S 5H",
        highest: "TD JH QS KC AH",
        equivalent: "TS JD KC QH AD",
        near_miss: "2D 3H 4S 5C 7H",
    },
    Fixture {
        category: Category::Flush,
        example: "2D 4D 7D 9D JD",
        other: "3S 5S 8S TS KS",
        lowest: "2D 3D 4D 5D 7D",
        highest: "9D JD QD KD AD",
        equivalent: "2H 4H 7H 9H JH",
        near_miss: "2D 4D 7D 9D JH",
    },
    Fixture {
        category: Category::FullHouse,
        example: "2D 2H 2S 7C 7H",
        other: "AS AD AH KC KH",
        lowest: "2D 2H 2S 3C 3H",
        highest: "AH AS AC KD KS",
        equivalent: "2D 2H 2C 7D 7S",
        near_miss: "2D 2H 2S 7C 2C",
    },
    Fixture {
        category: Category::FourOfAKind,
        example: "2D 2H 2S 2C 7H",
        other: "AS AD AH AC KH",
        lowest: "2D 2H 2S 2C 3H",
        highest: "AH AS AC AD KS",
        equivalent: "2D 2H 2S 2C 7D",
        near_miss: "2D 2H 2S 3C 3H",
    },
    Fixture {
        category: Category::StraightFlush,
        example: "2D 3D 4D 5D 6D",
        other: "AS 2S 3S 4S 5S",
        lowest: "AH 2H 3H 4H 5H",
        highest: "TD JD QD KD AD",
        equivalent: "2H 3H 4H 5H 6H",
        near_miss: "2D 3D 4D 5D 6H",
    },
];

fn hand(notation: &str) -> PokerHand {
    PokerHand::from_notation(notation)
}

#[test]
fn examples_are_identified() {
    for f in &FIXTURES {
        for notation in [f.example, f.other, f.lowest, f.highest, f.equivalent] {
            let h = hand(notation);
            assert!(h.is_valid(), "{notation}");
            assert_eq!(h.category(), f.category, "{notation}");
        }
    }
}

#[test]
fn near_misses_fall_elsewhere() {
    for f in &FIXTURES {
        let h = hand(f.near_miss);
        assert!(h.is_valid(), "{}", f.near_miss);
        assert_ne!(h.category(), f.category, "{}", f.near_miss);
    }
}

#[test]
fn suit_swapped_twins_are_equal() {
    for f in &FIXTURES {
        let a = hand(f.example);
        let b = hand(f.equivalent);
        assert_eq!(a.compare(&b), Comparison::Equal, "{} vs {}", f.example, f.equivalent);
        assert_eq!(a.score(), b.score());
    }
}

#[test]
fn extremes_bound_each_category() {
    for f in &FIXTURES {
        let low = hand(f.lowest);
        let high = hand(f.highest);
        assert_eq!(low.compare(&high), Comparison::Less, "{}", f.category);
        assert_eq!(high.compare(&low), Comparison::Greater, "{}", f.category);
        for notation in [f.example, f.other] {
            let h = hand(notation);
            assert_ne!(h.compare(&low), Comparison::Less, "{notation} below {}", f.lowest);
            assert_ne!(h.compare(&high), Comparison::Greater, "{notation} above {}", f.highest);
        }
    }
}

#[test]
fn best_of_a_category_loses_to_worst_of_the_next() {
    for pair in FIXTURES.windows(2) {
        let top = hand(pair[0].highest);
        let bottom = hand(pair[1].lowest);
        assert_eq!(top.compare(&bottom), Comparison::Less, "{} vs {}", pair[0].highest, pair[1].lowest);
    }
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = hand("AS 2D 3H 4C 5H");
    let six_high = hand("2D 3H 4S 5C 6H");
    let trips = hand("AH AS AC KD QS");
    assert_eq!(wheel.compare(&six_high), Comparison::Less);
    assert_eq!(wheel.compare(&trips), Comparison::Greater);

    let steel_wheel = hand("AS 2S 3S 4S 5S");
    let six_high_flush = hand("2D 3D 4D 5D 6D");
    let quads = hand("AH AS AC AD KS");
    assert_eq!(steel_wheel.compare(&six_high_flush), Comparison::Less);
    assert_eq!(steel_wheel.compare(&quads), Comparison::Greater);
}

#[test]
fn kickers_break_ties() {
    assert_eq!(hand("AS AD KH KC 9H").compare(&hand("AH AC KS KD 8H")), Comparison::Greater);
    assert_eq!(hand("7S 7D 2H 3C 9H").compare(&hand("7H 7C 2S 4D 8H")), Comparison::Greater);
    assert_eq!(hand("3S 3D 3H 2C 2H").compare(&hand("2S 2D 2C AH AC")), Comparison::Greater);
}

#[test]
fn malformed_hands_are_invalid() {
    let cases = [
        "3D 9H 7S 5C TD JH", // six cards
        "3D 9H 7S 5C",       // four cards
        "2D 2D AS 7C KD",    // repeated card
        "3F TS AC QD 4H",    // no such suit
        "1S 2D 3D 4D 5D",    // no such rank
        "",
    ];
    let good = hand("AS KS QS JS TS");
    for notation in cases {
        let h = hand(notation);
        assert!(!h.is_valid(), "{notation:?}");
        assert_eq!(h.category(), Category::Invalid);
        assert_eq!(h.score().raw(), 0);
        assert_eq!(h.compare(&good), Comparison::Invalid);
        assert_eq!(good.compare(&h), Comparison::Invalid);
    }
    assert_eq!(hand("3F TS AC QD 4H").malformed(), ["3F"]);
}

#[test]
fn descriptions_name_the_category() {
    assert_eq!(hand("2D 2H 2S 7C 7H").description(), "Full house");
    assert_eq!(hand("2D").description(), "Invalid");
    assert_eq!(Category::StraightFlush.to_string(), "Straight flush");
}
