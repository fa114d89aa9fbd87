//! Property tests for combatant and battle invariants.

use proptest::prelude::*;

use cardclash::battle::BattleBuilder;
use cardclash::cards::CardId;
use cardclash::core::{BattleRng, Combatant, CombatantConfig};

#[derive(Clone, Debug)]
enum PileOp {
    Draw(usize),
    Discard(usize),
    StartTurn(usize),
    EndTurn,
}

fn pile_op() -> impl Strategy<Value = PileOp> {
    prop_oneof![
        (0usize..8).prop_map(PileOp::Draw),
        (0usize..10).prop_map(PileOp::Discard),
        (0usize..8).prop_map(PileOp::StartTurn),
        Just(PileOp::EndTurn),
    ]
}

fn combatant(deck_size: u32, seed: u64) -> Combatant {
    let deck = (0..deck_size).map(CardId::new).collect();
    let config = CombatantConfig::new("Prop", 30, 3).with_deck(deck);
    Combatant::new(&config, BattleRng::new(seed))
}

proptest! {
    /// Invariant: deck + hand + discard never changes size.
    #[test]
    fn card_conservation(
        deck_size in 0u32..20,
        seed in any::<u64>(),
        ops in prop::collection::vec(pile_op(), 0..60),
    ) {
        let mut c = combatant(deck_size, seed);

        for op in ops {
            match op {
                PileOp::Draw(n) => { c.draw(n); }
                PileOp::Discard(i) => { c.discard_card(i); }
                PileOp::StartTurn(n) => { c.start_turn(n); }
                PileOp::EndTurn => c.end_turn(),
            }
            prop_assert_eq!(
                c.deck().len() + c.hand().len() + c.discard_pile().len(),
                deck_size as usize
            );
        }
    }

    /// Invariant: a draw that reshuffles empties the discard pile first.
    #[test]
    fn reshuffle_empties_discard(deck_size in 1u32..15, extra in 1usize..10, seed in any::<u64>()) {
        let mut c = combatant(deck_size, seed);
        c.draw(deck_size as usize);
        c.end_turn();
        prop_assert!(c.deck().is_empty());

        let reshuffled = c.draw(extra);
        prop_assert!(reshuffled);
        prop_assert_eq!(c.hand().len(), extra.min(deck_size as usize));
        prop_assert!(c.discard_pile().is_empty());
    }

    /// Invariant: mana stays within [0, max_mana] and hp never exceeds max_hp.
    #[test]
    fn resource_clamping(
        amounts in prop::collection::vec(-10i64..10, 0..40),
        heals in prop::collection::vec(0i64..50, 0..10),
    ) {
        let mut c = combatant(0, 0);
        c.start_turn(0);

        for amount in amounts {
            c.add_mana(amount);
            prop_assert!(c.mana() >= 0 && c.mana() <= c.max_mana());
        }

        c.take_damage(15);
        for heal in heals {
            let before = c.hp();
            let gained = c.add_hp(heal);
            prop_assert!(c.hp() <= c.max_hp());
            prop_assert_eq!(c.hp() - before, gained);
            prop_assert!(gained <= heal);
        }
    }

    /// Invariant: damage is absorbed by defend before hp.
    #[test]
    fn damage_absorption(defend in 0i64..20, amount in 0i64..40) {
        let mut c = combatant(0, 0);
        c.add_defend(defend);
        let hp = c.hp();

        let report = c.take_damage(amount);

        prop_assert_eq!(report.blocked, defend.min(amount));
        prop_assert_eq!(report.dealt, amount - report.blocked);
        prop_assert_eq!(c.defend(), defend - report.blocked);
        prop_assert_eq!(c.hp(), hp - report.dealt);
    }

    /// Invariant: a new turn always refills mana and clears defend.
    #[test]
    fn turn_reset(mana_delta in -5i64..5, defend in 0i64..30) {
        let mut c = combatant(5, 1);
        c.add_mana(mana_delta);
        c.add_defend(defend);

        c.start_turn(2);

        prop_assert_eq!(c.mana(), c.max_mana());
        prop_assert_eq!(c.defend(), 0);
    }

    /// Invariant: rejected card plays leave the battle untouched.
    #[test]
    fn rejected_plays_do_not_mutate(seed in any::<u64>(), indices in prop::collection::vec(0usize..8, 1..12)) {
        let mut battle = BattleBuilder::new().seed(seed).build().unwrap();
        battle.start_battle().unwrap();

        for index in indices {
            let before = battle.snapshot();
            if battle.play_card(index).is_err() {
                prop_assert_eq!(battle.snapshot(), before);
            }
            if !battle.is_running() {
                break;
            }
        }
    }
}
