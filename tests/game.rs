//! Game integration tests.

use std::collections::HashSet;
use std::thread;

use hpjack::{
    ActionError, Card, CardId, DealError, DealerError, Game, GameOptions, GameState, Hand,
    HpCategory, JoinError, Outcome, Participant, PlayerId, Role, SHOE_SIZE, Shoe, ShoeError,
    ShoeSnapshot, ShowdownError, SnapshotError, StartError, determine_outcome,
    generate_invite_code,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const ASH: PlayerId = PlayerId(1);
const MISTY: PlayerId = PlayerId(2);

fn card(id: u32, hp: u32) -> Card {
    Card::new(id, hp).unwrap()
}

/// Builds a shoe whose n-th draw has HP `draws[n]` and id `n`.
fn shoe_from_draws(draws: &[u32]) -> Shoe {
    let cards = draws
        .iter()
        .zip(0u32..)
        .map(|(&hp, id)| card(id, hp))
        .collect();
    Shoe::from_cards(cards)
}

/// A started table with Ash and Misty seated over a stacked shoe.
fn two_player_table(draws: &[u32]) -> Game {
    let game = Game::with_shoe(GameOptions::default(), shoe_from_draws(draws), "TESTCODE");
    game.join(ASH, "Ash", 10).unwrap();
    game.join(MISTY, "Misty", 20).unwrap();
    game.start().unwrap();
    game
}

fn catalog() -> Vec<Card> {
    vec![card(25, 60), card(6, 180), card(150, 200), card(143, 260)]
}

#[test]
fn shoe_draws_in_order_then_exhausts() {
    let (a, b, c) = (card(1, 50), card(2, 70), card(3, 90));
    let shoe = Shoe::from_cards(vec![a, b, c]);

    assert_eq!(shoe.draw(), Ok(a));
    assert_eq!(shoe.draw(), Ok(b));
    assert_eq!(shoe.draw(), Ok(c));
    assert_eq!(shoe.draw(), Err(ShoeError::Exhausted));
    assert_eq!(shoe.drawn_count(), 3);
    assert!(shoe.is_exhausted());
}

#[test]
fn shoe_rejects_empty_catalog() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(
        Shoe::new(&[], SHOE_SIZE, &mut rng).unwrap_err(),
        ShoeError::EmptyCatalog
    );
    assert_eq!(
        Game::new(GameOptions::default(), &[], 1).err(),
        Some(ShoeError::EmptyCatalog)
    );
}

#[test]
fn shoe_is_built_from_catalog_and_reproducible() {
    let catalog = catalog();
    let first = Shoe::new(&catalog, SHOE_SIZE, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
    let second = Shoe::new(&catalog, SHOE_SIZE, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();

    assert_eq!(first.len(), SHOE_SIZE);
    assert_eq!(first.drawn_count(), 0);
    assert!(first.cards().iter().all(|c| catalog.contains(c)));
    assert_eq!(first.cards(), second.cards());
}

#[test]
fn draw_at_detects_a_moved_cursor() {
    let shoe = shoe_from_draws(&[100, 120]);

    assert_eq!(shoe.draw_at(0).unwrap().id, CardId(0));
    assert_eq!(
        shoe.draw_at(0),
        Err(ShoeError::CursorMismatch {
            expected: 0,
            actual: 1
        })
    );
    assert_eq!(shoe.draw_at(1).unwrap().id, CardId(1));
    assert_eq!(shoe.draw_at(2), Err(ShoeError::Exhausted));
}

#[test]
fn restored_shoe_continues_from_cursor() {
    let cards = vec![card(1, 50), card(2, 60), card(3, 70)];
    let shoe = Shoe::restore(ShoeSnapshot {
        cards: cards.clone(),
        drawn_count: 2,
    })
    .unwrap();
    assert_eq!(shoe.draw(), Ok(cards[2]));
    assert_eq!(shoe.draw(), Err(ShoeError::Exhausted));

    assert_eq!(
        Shoe::restore(ShoeSnapshot {
            cards,
            drawn_count: 4
        })
        .unwrap_err(),
        ShoeError::CursorOutOfRange { drawn: 4, len: 3 }
    );
}

#[test]
fn concurrent_draws_never_share_a_position() {
    let shoe = shoe_from_draws(&[10; 200]);
    let shared = &shoe;

    let per_thread: Vec<Vec<u32>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move || {
                    (0..25)
                        .map(|_| shared.draw().unwrap().id.0)
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for ids in &per_thread {
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
    let mut all: Vec<u32> = per_thread.into_iter().flatten().collect();
    all.sort_unstable();
    assert_eq!(all, (0..200).collect::<Vec<_>>());
    assert_eq!(shoe.draw(), Err(ShoeError::Exhausted));
}

#[test]
fn outcome_scenarios() {
    // Scenario A: 120 + 100 against a dealer on 250.
    assert_eq!(determine_outcome(220, 250), Outcome::Loss);
    // Scenario B: goal beats a plain 380.
    assert_eq!(determine_outcome(400, 380), Outcome::Win);
    // Scenario C: a busted player loses even against a busted dealer.
    assert_eq!(determine_outcome(410, 500), Outcome::Loss);
    // Scenario E: equal totals push.
    assert_eq!(determine_outcome(300, 300), Outcome::Push);

    assert_eq!(determine_outcome(300, 410), Outcome::Win);
    assert_eq!(determine_outcome(390, 400), Outcome::Loss);
    assert_eq!(determine_outcome(400, 400), Outcome::Push);
}

#[test]
fn hand_total_and_categories() {
    let mut hand = Hand::new();
    assert_eq!(hand.total(), 0);

    hand.add_card(card(1, 220));
    hand.add_card(card(2, 180));
    assert_eq!(hand.total(), 400);
    assert!(hand.is_goal());
    assert!(!hand.is_bust());

    hand.add_card(card(3, 30));
    assert!(hand.is_bust());
    assert_eq!(hand.cards()[2].id, CardId(3));

    assert_eq!(card(1, 40).category(), HpCategory::Low);
    assert_eq!(card(1, 80).category(), HpCategory::MediumLow);
    assert_eq!(card(1, 120).category(), HpCategory::Medium);
    assert_eq!(card(1, 200).category(), HpCategory::MediumHigh);
    assert_eq!(card(1, 250).category(), HpCategory::High);
}

#[test]
fn join_errors() {
    let options = GameOptions::default().with_max_players(2);
    let game = Game::with_shoe(options, shoe_from_draws(&[100; 8]), "TESTCODE");

    game.join(ASH, "Ash", 10).unwrap();
    assert_eq!(game.join(ASH, "Ash again", 10), Err(JoinError::AlreadyJoined));
    game.join(MISTY, "Misty", 10).unwrap();
    assert_eq!(game.join(PlayerId(3), "Brock", 10), Err(JoinError::TableFull));

    game.start().unwrap();
    assert_eq!(game.join(PlayerId(3), "Brock", 10), Err(JoinError::InvalidState));

    let ash = game.get_player(ASH).unwrap();
    assert_eq!(ash.role(), Role::Player { id: ASH, stake: 10 });
    assert_eq!(ash.name(), "Ash");
    assert!(ash.hand().is_empty());
    assert!(!ash.is_standing());
}

#[test]
fn start_requires_minimum_players() {
    let game = Game::with_shoe(GameOptions::default(), shoe_from_draws(&[100; 8]), "TESTCODE");
    game.join(ASH, "Ash", 10).unwrap();

    assert_eq!(game.start(), Err(StartError::NotEnoughPlayers));
    assert_eq!(game.state(), GameState::Waiting);

    game.join(MISTY, "Misty", 10).unwrap();
    game.start().unwrap();
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.start(), Err(StartError::InvalidState));
}

#[test]
fn deal_alternates_players_then_dealer() {
    let game = two_player_table(&[100, 110, 120, 130, 140, 150]);
    game.deal().unwrap();

    let ids = |p: Participant| {
        p.hand().cards().iter().map(|c| c.id.0).collect::<Vec<_>>()
    };
    assert_eq!(ids(game.get_player(ASH).unwrap()), vec![0, 3]);
    assert_eq!(ids(game.get_player(MISTY).unwrap()), vec![1, 4]);
    assert_eq!(ids(game.dealer()), vec![2, 5]);

    assert_eq!(game.get_player(ASH).unwrap().total(), 230);
    assert_eq!(game.get_player(MISTY).unwrap().total(), 250);
    assert_eq!(game.dealer().total(), 270);
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn deal_errors() {
    let game = Game::with_shoe(GameOptions::default(), shoe_from_draws(&[100; 5]), "TESTCODE");
    assert_eq!(game.deal(), Err(DealError::InvalidState));

    game.join(ASH, "Ash", 10).unwrap();
    game.join(MISTY, "Misty", 10).unwrap();
    game.start().unwrap();
    assert_eq!(game.deal(), Err(DealError::NotEnoughCards));
    assert_eq!(game.shoe().drawn_count(), 0);

    let game = two_player_table(&[100; 8]);
    game.deal().unwrap();
    assert_eq!(game.deal(), Err(DealError::AlreadyDealt));
}

#[test]
fn dealt_goal_stands_immediately() {
    let game = two_player_table(&[200, 100, 100, 200, 100, 100]);
    game.deal().unwrap();

    let ash = game.get_player(ASH).unwrap();
    assert_eq!(ash.total(), 400);
    assert!(ash.is_standing());
    assert_eq!(game.hit(ASH), Err(ActionError::InvalidAction));
}

#[test]
fn hit_to_goal_stands_and_blocks_further_actions() {
    let game = two_player_table(&[200, 100, 100, 100, 100, 100, 100]);
    game.deal().unwrap();

    let drawn = game.hit(ASH).unwrap();
    assert_eq!(drawn.hp(), 100);

    let ash = game.get_player(ASH).unwrap();
    assert_eq!(ash.total(), 400);
    assert!(ash.is_standing());

    assert_eq!(game.hit(ASH), Err(ActionError::InvalidAction));
    assert_eq!(game.stand(ASH), Err(ActionError::InvalidAction));
}

#[test]
fn hit_to_bust_stands() {
    let game = two_player_table(&[200, 100, 100, 100, 100, 100, 150]);
    game.deal().unwrap();

    game.hit(ASH).unwrap();
    let ash = game.get_player(ASH).unwrap();
    assert_eq!(ash.total(), 450);
    assert!(ash.hand().is_bust());
    assert!(ash.is_standing());
}

#[test]
fn hit_below_goal_keeps_player_active() {
    let game = two_player_table(&[100, 100, 100, 100, 100, 100, 60]);
    game.deal().unwrap();

    game.hit(MISTY).unwrap();
    let misty = game.get_player(MISTY).unwrap();
    assert_eq!(misty.total(), 260);
    assert!(misty.is_active());

    game.stand(MISTY).unwrap();
    assert!(game.get_player(MISTY).unwrap().is_standing());
    assert_eq!(game.stand(MISTY), Err(ActionError::InvalidAction));
}

#[test]
fn hit_with_empty_shoe_returns_error() {
    let game = two_player_table(&[100; 6]);
    game.deal().unwrap();

    assert_eq!(game.hit(ASH), Err(ActionError::ShoeExhausted));
    assert!(game.get_player(ASH).unwrap().is_active());
    assert_eq!(game.get_player(ASH).unwrap().hand().len(), 2);
}

#[test]
fn actions_rejected_outside_dealt_round() {
    let game = two_player_table(&[100; 8]);
    assert_eq!(game.hit(ASH), Err(ActionError::InvalidState));
    assert_eq!(game.stand(ASH), Err(ActionError::InvalidState));

    game.deal().unwrap();
    assert_eq!(game.hit(PlayerId(99)), Err(ActionError::PlayerNotFound));
}

#[test]
fn dealer_waits_for_every_player() {
    let game = two_player_table(&[100; 8]);
    assert_eq!(game.dealer_play().unwrap_err(), DealerError::InvalidState);

    game.deal().unwrap();
    game.stand(ASH).unwrap();
    assert!(!game.all_standing());
    assert_eq!(game.dealer_play().unwrap_err(), DealerError::PlayersNotStanding);
    assert_eq!(game.dealer_hit().unwrap_err(), DealerError::PlayersNotStanding);
}

#[test]
fn dealer_on_threshold_does_not_draw() {
    let game = two_player_table(&[150, 100, 150, 150, 100, 150, 50]);
    game.deal().unwrap();
    game.stand(ASH).unwrap();
    game.stand(MISTY).unwrap();

    let drawn = game.dealer_play().unwrap();
    assert!(drawn.is_empty());
    assert!(game.dealer().is_standing());
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.dealer_play().unwrap_err(), DealerError::AlreadyStanding);

    let result = game.showdown().unwrap();
    // Scenario E: 300 against 300.
    assert_eq!(result.player(ASH).unwrap().outcome, Outcome::Push);
    assert_eq!(result.player(MISTY).unwrap().outcome, Outcome::Loss);
}

#[test]
fn dealer_draws_until_threshold() {
    let game = two_player_table(&[100, 100, 100, 100, 100, 100, 60, 30, 50, 120]);
    game.deal().unwrap();
    game.stand(ASH).unwrap();
    game.stand(MISTY).unwrap();

    let drawn = game.dealer_play().unwrap();
    let hps: Vec<u32> = drawn.iter().map(Card::hp).collect();
    assert_eq!(hps, vec![60, 30, 50]);
    assert_eq!(game.dealer().total(), 340);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn exhausted_shoe_forces_dealer_to_stand() {
    let game = two_player_table(&[120, 150, 100, 100, 130, 100, 50]);
    game.deal().unwrap();
    game.stand(ASH).unwrap();
    game.stand(MISTY).unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(game.dealer().total(), 250);
    assert!(game.dealer().is_standing());

    let result = game.showdown().unwrap();
    assert_eq!(result.dealer_total, 250);
    // Scenario A: 120 + 100 against 250.
    assert_eq!(result.player(ASH).unwrap().outcome, Outcome::Loss);
    assert_eq!(result.player(MISTY).unwrap().outcome, Outcome::Win);
}

#[test]
fn dealer_hit_reports_exhaustion() {
    let game = two_player_table(&[100, 100, 100, 100, 100, 100, 40]);
    game.deal().unwrap();
    game.stand(ASH).unwrap();
    game.stand(MISTY).unwrap();

    assert_eq!(game.dealer_hit().unwrap().hp(), 40);
    assert_eq!(game.dealer().total(), 240);
    assert!(!game.dealer().is_standing());
    assert_eq!(game.dealer_hit().unwrap_err(), DealerError::ShoeExhausted);
}

#[test]
fn dealer_hit_refuses_at_threshold() {
    let game = two_player_table(&[100, 100, 200, 100, 100, 180, 50, 100]);
    game.deal().unwrap();
    game.stand(ASH).unwrap();
    game.stand(MISTY).unwrap();
    assert_eq!(game.dealer().total(), 380);

    assert_eq!(game.dealer_hit().unwrap_err(), DealerError::InvalidAction);
    assert_eq!(game.dealer().total(), 380);
    assert_eq!(game.cards_remaining(), 2);

    assert!(game.dealer_play().unwrap().is_empty());
    let result = game.showdown().unwrap();
    assert_eq!(result.dealer_total, 380);
    assert_eq!(result.player(ASH).unwrap().outcome, Outcome::Loss);
}

#[test]
fn dealer_hit_stops_once_threshold_is_reached() {
    let game = two_player_table(&[100, 100, 100, 100, 100, 100, 60, 50, 70]);
    game.deal().unwrap();
    game.stand(ASH).unwrap();
    game.stand(MISTY).unwrap();

    assert_eq!(game.dealer_hit().unwrap().hp(), 60);
    assert_eq!(game.dealer_hit().unwrap().hp(), 50);
    assert_eq!(game.dealer().total(), 310);
    assert_eq!(game.dealer_hit().unwrap_err(), DealerError::InvalidAction);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn basic_round_flow() {
    let game = two_player_table(&[220, 150, 200, 180, 150, 180]);
    assert_eq!(game.results(), None);

    game.deal().unwrap();
    assert!(game.get_player(ASH).unwrap().is_standing());

    assert_eq!(game.showdown().unwrap_err(), ShowdownError::PlayersNotStanding);
    game.stand(MISTY).unwrap();
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::DealerNotFinished);

    assert!(game.dealer_play().unwrap().is_empty());
    let result = game.showdown().unwrap();
    assert_eq!(game.state(), GameState::Finished);

    assert_eq!(result.dealer_total, 380);
    assert!(!result.dealer_bust);
    assert!(!result.dealer_goal);

    // Scenario B: a goal beats a plain 380.
    let ash = result.player(ASH).unwrap();
    assert_eq!(ash.outcome, Outcome::Win);
    assert_eq!(ash.player_total, 400);
    assert_eq!(ash.stake, 10);

    let misty = result.player(MISTY).unwrap();
    assert_eq!(misty.outcome, Outcome::Loss);
    assert_eq!(misty.name, "Misty");

    assert_eq!(result.winners(), vec![ASH]);
    assert_eq!(game.results(), Some(result));

    assert_eq!(game.hit(MISTY), Err(ActionError::InvalidState));
    assert_eq!(game.dealer_play().unwrap_err(), DealerError::InvalidState);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn snapshot_restores_a_table_mid_round() {
    let game = two_player_table(&[100, 110, 120, 130, 140, 150, 60]);
    game.deal().unwrap();
    game.stand(ASH).unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.state, GameState::InProgress);
    assert_eq!(snapshot.shoe.drawn_count, 6);
    assert_eq!(snapshot.invite_code, "TESTCODE");
    assert_eq!(snapshot.options, GameOptions::default());

    let restored = Game::from_snapshot(snapshot).unwrap();
    assert!(restored.get_player(ASH).unwrap().is_standing());
    assert_eq!(restored.dealer().total(), 270);

    let drawn = restored.hit(MISTY).unwrap();
    assert_eq!(drawn.id, CardId(6));
    assert_eq!(restored.get_player(MISTY).unwrap().total(), 310);
}

#[test]
fn snapshot_keeps_table_options() {
    let options = GameOptions::default().with_max_players(3).with_min_players(3);
    let game = Game::with_shoe(options, shoe_from_draws(&[100; 8]), "TESTCODE");
    game.join(ASH, "Ash", 10).unwrap();
    game.join(MISTY, "Misty", 10).unwrap();

    let restored = Game::from_snapshot(game.snapshot()).unwrap();
    assert_eq!(restored.options, options);
    assert_eq!(restored.start(), Err(StartError::NotEnoughPlayers));
    restored.join(PlayerId(3), "Brock", 10).unwrap();
    assert_eq!(restored.join(PlayerId(4), "Gary", 10), Err(JoinError::TableFull));
}

#[test]
fn restore_rejects_misplaced_roles() {
    let game = two_player_table(&[100; 8]);
    game.deal().unwrap();

    let mut swapped = game.snapshot();
    core::mem::swap(&mut swapped.dealer, &mut swapped.players[0]);
    assert_eq!(
        Game::from_snapshot(swapped).err(),
        Some(SnapshotError::DealerSlotHoldsPlayer)
    );

    let mut extra_dealer = game.snapshot();
    extra_dealer.players.push(Participant::dealer());
    assert_eq!(
        Game::from_snapshot(extra_dealer).err(),
        Some(SnapshotError::PlayerSlotHoldsDealer)
    );
}

#[test]
fn restore_rejects_duplicate_and_excess_seats() {
    let game = two_player_table(&[100; 8]);

    let mut duplicated = game.snapshot();
    duplicated.players.push(Participant::player(ASH, "Ash again", 10));
    assert_eq!(
        Game::from_snapshot(duplicated).err(),
        Some(SnapshotError::DuplicatePlayer(ASH))
    );

    let mut crowded = game.snapshot();
    crowded.options = crowded.options.with_max_players(1);
    assert_eq!(
        Game::from_snapshot(crowded).err(),
        Some(SnapshotError::TooManyPlayers { seated: 2, max: 1 })
    );

    let mut bad_cursor = game.snapshot();
    bad_cursor.shoe.drawn_count = 9;
    assert_eq!(
        Game::from_snapshot(bad_cursor).err(),
        Some(SnapshotError::Shoe(ShoeError::CursorOutOfRange { drawn: 9, len: 8 }))
    );
}

#[test]
fn concurrent_hits_draw_consecutive_cards() {
    let players: Vec<PlayerId> = (1..=4).map(PlayerId).collect();
    let game = Game::with_shoe(GameOptions::default(), shoe_from_draws(&[10; 30]), "TESTCODE");
    for &id in &players {
        game.join(id, "trainer", 0).unwrap();
    }
    game.start().unwrap();
    game.deal().unwrap();

    thread::scope(|scope| {
        for &id in &players {
            let game = &game;
            scope.spawn(move || {
                for _ in 0..5 {
                    game.hit(id).unwrap();
                }
            });
        }
    });

    assert_eq!(game.shoe().drawn_count(), 30);
    let mut seen = HashSet::new();
    for &id in &players {
        let player = game.get_player(id).unwrap();
        assert_eq!(player.hand().len(), 7);
        for c in player.hand().cards() {
            assert!(seen.insert(c.id.0));
        }
    }
    for c in game.dealer().hand().cards() {
        assert!(seen.insert(c.id.0));
    }
    assert_eq!(seen, (0..30).collect::<HashSet<u32>>());
}

#[test]
fn tables_get_reproducible_invite_codes() {
    let first = Game::new(GameOptions::default(), &catalog(), 3).unwrap();
    let second = Game::new(GameOptions::default(), &catalog(), 3).unwrap();
    assert_eq!(first.invite_code(), second.invite_code());
    assert_eq!(first.shoe().cards(), second.shoe().cards());

    let code = generate_invite_code(&mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));
}

#[cfg(feature = "serde")]
#[test]
fn json_names_match_session_store() {
    assert_eq!(
        serde_json::to_string(&GameState::InProgress).unwrap(),
        "\"in-progress\""
    );
    assert_eq!(serde_json::to_string(&Outcome::Push).unwrap(), "\"push\"");

    let game = two_player_table(&[100; 8]);
    game.deal().unwrap();
    let json = serde_json::to_string(&game.snapshot()).unwrap();
    let back: hpjack::TableSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, game.snapshot());
}
