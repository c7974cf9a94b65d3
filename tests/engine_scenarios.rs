use draw_poker::agents::{BotProfile, HumanAgent, Intent, Strategy};
use draw_poker::cards::Card;
use draw_poker::engine::{EngineConfig, EngineError, HandHistoryVerb, Phase, PokerEngine, MAX_PLAYERS};
use draw_poker::hand::Hand;
use draw_poker::player::PlayerStatus;
use std::collections::HashSet;

fn bots(seed: u64, n: usize) -> PokerEngine {
    let mut e = PokerEngine::new(EngineConfig::default().with_seed(seed));
    for strategy in Strategy::ALL.iter().cycle().take(n) {
        e.seat_bot(BotProfile::for_strategy(*strategy)).unwrap();
    }
    e
}

#[test]
fn scripted_humans_play_a_full_hand() {
    let mut e = PokerEngine::new(EngineConfig::default().with_seed(5));
    e.seat_human(HumanAgent::scripted([Intent::Raise(20.0), Intent::Discard(vec![0, 1]), Intent::Call]))
        .unwrap();
    e.seat_human(HumanAgent::scripted([Intent::Call, Intent::StandPat, Intent::Fold])).unwrap();

    e.start_game().unwrap();
    assert_eq!(e.phase(), Phase::Showdown);
    assert_eq!(e.current_round(), 1);
    assert_eq!(e.pot(), 80.0);
    assert_eq!(e.players()[0].status(), PlayerStatus::Calling);
    assert_eq!(e.players()[1].status(), PlayerStatus::Folded);

    let sd = e.end_game().unwrap();
    assert_eq!(sd.winners, vec![0]);
    assert!(!sd.is_split());
    assert_eq!(sd.outcomes[0].balance, 130.0);
    assert_eq!(sd.outcomes[1].balance, 70.0);
    assert_eq!(e.phase(), Phase::Finished);

    let verbs: Vec<HandHistoryVerb> = e.history().iter().map(|h| h.verb).collect();
    assert_eq!(
        verbs,
        [
            HandHistoryVerb::Ante,
            HandHistoryVerb::Ante,
            HandHistoryVerb::Raise,
            HandHistoryVerb::Call,
            HandHistoryVerb::Draw,
            HandHistoryVerb::StandPat,
            HandHistoryVerb::Call,
            HandHistoryVerb::Fold,
            HandHistoryVerb::Win,
        ]
    );
    let draw = &e.history()[4];
    assert_eq!((draw.seat, draw.amount, draw.round), (0, Some(2.0), 0));
}

#[test]
fn calling_a_zero_blind_folds() {
    let mut e = PokerEngine::new(EngineConfig::default().with_seed(5));
    e.seat_human(HumanAgent::scripted([Intent::Call])).unwrap();
    e.seat_human(HumanAgent::scripted([Intent::Raise(15.0)])).unwrap();
    e.ante_up().unwrap();
    e.deal_cards().unwrap();
    e.betting_round().unwrap();
    assert!(e.players()[0].is_folded());
    assert_eq!(e.players()[1].status(), PlayerStatus::Raising);
    assert_eq!(e.blind(), 15.0);
}

#[test]
fn failed_ante_folds_player_and_skips_pot() {
    let mut e = PokerEngine::new(EngineConfig::default().with_seed(9));
    e.add_player(Box::new(HumanAgent::new()), 5.0).unwrap();
    e.seat_bot(BotProfile::for_strategy(Strategy::Balanced)).unwrap();
    e.seat_bot(BotProfile::for_strategy(Strategy::Aggressive)).unwrap();

    e.ante_up().unwrap();
    assert_eq!(e.pot(), 20.0);
    assert!(e.players()[0].is_folded());
    assert_eq!(e.players()[0].balance(), 5.0);
    assert_eq!(e.history()[0].verb, HandHistoryVerb::AnteFailed);
    assert_eq!(e.history()[0].amount, None);

    e.deal_cards().unwrap();
    assert!(e.players()[0].hand().is_empty());
    assert_eq!(e.deck_len(), 42);
    e.betting_round().unwrap();
    e.drawing_round().unwrap();
    e.advance_round().unwrap();
    assert!(e.players()[0].is_folded());
    e.betting_round().unwrap();

    let sd = e.end_game().unwrap();
    assert!(!sd.winners.contains(&0));
    assert_eq!(sd.outcomes[0].balance, 5.0);
    assert_eq!(sd.outcomes[0].status, PlayerStatus::Folded);
}

#[test]
fn full_table_gets_distinct_cards() {
    let mut e = bots(11, MAX_PLAYERS);
    e.ante_up().unwrap();
    e.deal_cards().unwrap();
    let dealt: Vec<Card> = e.players().iter().flat_map(|p| p.hand().cards().to_vec()).collect();
    assert_eq!(dealt.len(), MAX_PLAYERS * 5);
    let unique: HashSet<Card> = dealt.iter().copied().collect();
    assert_eq!(unique.len(), dealt.len());
    assert_eq!(e.deck_len(), 52 - MAX_PLAYERS * 5);
    assert!(e.players().iter().all(|p| p.hand().is_valid()));
}

#[test]
fn cards_stay_unique_through_the_draw() {
    for seed in 0..20 {
        let mut e = bots(seed, MAX_PLAYERS);
        e.start_game().unwrap();
        let held: Vec<Card> = e.players().iter().flat_map(|p| p.hand().cards().to_vec()).collect();
        let unique: HashSet<Card> = held.iter().copied().collect();
        assert_eq!(unique.len(), held.len(), "seed {seed}");
        assert_eq!(held.len() + e.deck_len() + e.discard_len(), 52, "seed {seed}");
    }
}

#[test]
fn money_is_conserved_for_every_table_size() {
    for n in 2..=MAX_PLAYERS {
        for seed in 0..10 {
            let mut e = bots(seed, n);
            let before: f64 = e.players().iter().map(|p| p.balance()).sum();
            e.start_game().unwrap();
            let sd = e.end_game().unwrap();
            let after: f64 = sd.outcomes.iter().map(|o| o.balance).sum();
            assert!((after + e.pot() - before).abs() < 1e-6, "n {n} seed {seed}");
            assert_eq!(e.phase(), Phase::Finished);
            for &w in &sd.winners {
                assert_ne!(sd.outcomes[w].status, PlayerStatus::Folded);
                assert!(sd.outcomes[w].hand.is_valid());
            }
        }
    }
}

#[test]
fn seeded_tables_replay_exactly() {
    let run = |seed| {
        let mut e = bots(seed, 5);
        e.start_game().unwrap();
        let sd = e.end_game().unwrap();
        let hands: Vec<String> = sd.outcomes.iter().map(|o| o.hand.to_string()).collect();
        let balances: Vec<f64> = sd.outcomes.iter().map(|o| o.balance).collect();
        (hands, balances, sd.winners, e.history().to_vec())
    };
    assert_eq!(run(21), run(21));
}

#[test]
fn finished_engine_rejects_further_steps() {
    let mut e = bots(4, 2);
    e.start_game().unwrap();
    e.end_game().unwrap();
    assert_eq!(e.start_game(), Err(EngineError::OutOfPhase { expected: Phase::Seating, actual: Phase::Finished }));
    assert!(e.showdown().is_err());
    assert!(e.seat_bot(BotProfile::default()).is_err());
}
