//! The battle state machine.
//!
//! `Battle` owns both combatants, the turn counter, the action log and the
//! enemy policy. Drivers reach it only through the four intents
//! (`start_battle`, `play_card`, `end_player_turn`, `execute_enemy_turn`)
//! or `apply`, which dispatches an `Intent` value to the same methods.
//!
//! ## Atomicity
//!
//! Every intent validates before it mutates. A rejected intent returns a
//! `BattleError` and leaves the battle exactly as it was. Once a card's
//! cost is paid its effects always resolve in full.
//!
//! ## Defeat
//!
//! Checked after every single card play. When the caster's opponent is at
//! `hp <= 0` the caster wins; otherwise a caster at `hp <= 0` loses. The
//! battle moves to `Phase::Over` and accepts no further intents.

use std::sync::Arc;

use im::Vector;
use tracing::{debug, info, trace, warn};

use crate::cards::{CardCatalog, CardId};
use crate::core::rng::{ENEMY_DECK_STREAM, ENEMY_POLICY_STREAM, PLAYER_DECK_STREAM};
use crate::core::{
    ActionLog, BattleConfig, BattleError, BattleResult, BattleRng, BattleSnapshot, Combatant,
    CombatantConfig, Intent, IntentRecord, Phase, Side, Sides,
};
use crate::effects::{BattleEvent, EffectResolver, EventList, ResolverContext};
use crate::policy::{EnemyPolicy, PolicyView};

/// Result of one accepted card play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Card that was played.
    pub card: CardId,
    /// One event per effect, in effect order.
    pub events: EventList,
    /// Set when this play ended the battle.
    pub result: Option<BattleResult>,
}

/// Result of a whole enemy turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnemyTurnOutcome {
    /// Hand indices played, each relative to the hand at the time.
    pub plays: Vec<usize>,
    /// Events from every play, concatenated in order.
    pub events: Vec<BattleEvent>,
    /// Set when the enemy turn ended the battle.
    pub result: Option<BattleResult>,
}

/// Result of `Battle::apply`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntentOutcome {
    Started,
    Played(PlayOutcome),
    TurnEnded,
    EnemyTurn(EnemyTurnOutcome),
}

impl IntentOutcome {
    /// Events produced by the intent, if any.
    #[must_use]
    pub fn events(&self) -> &[BattleEvent] {
        match self {
            IntentOutcome::Played(outcome) => &outcome.events[..],
            IntentOutcome::EnemyTurn(outcome) => &outcome.events[..],
            IntentOutcome::Started | IntentOutcome::TurnEnded => &[],
        }
    }
}

/// A single battle between the player and the enemy.
#[derive(Debug)]
pub struct Battle {
    catalog: Arc<CardCatalog>,
    config: BattleConfig,
    setup: Sides<CombatantConfig>,
    combatants: Sides<Combatant>,
    phase: Phase,
    turn: u32,
    log: ActionLog,
    result: Option<BattleResult>,
    policy: Box<dyn EnemyPolicy>,
    policy_rng: BattleRng,
    history: Vector<IntentRecord>,
}

impl Battle {
    /// Create a battle with freshly shuffled decks.
    ///
    /// Fails with `UnknownCard` if either deck names a card missing from the
    /// catalog.
    pub fn new(
        catalog: Arc<CardCatalog>,
        config: BattleConfig,
        player: CombatantConfig,
        enemy: CombatantConfig,
    ) -> Result<Self, BattleError> {
        let setup = Sides::new(player, enemy);
        for (_, side) in setup.iter() {
            catalog.validate_deck(&side.deck)?;
        }

        let root = BattleRng::new(config.seed);
        let combatants = setup.map(|side, combatant| {
            let stream = match side {
                Side::Player => PLAYER_DECK_STREAM,
                Side::Enemy => ENEMY_DECK_STREAM,
            };
            Combatant::new(combatant, root.for_context(stream))
        });

        debug!(
            seed = config.seed,
            player = %setup.player.name,
            enemy = %setup.enemy.name,
            policy = ?config.enemy_policy,
            "battle created"
        );

        Ok(Self {
            catalog,
            log: ActionLog::new(config.action_log_capacity),
            policy: config.enemy_policy.build(),
            policy_rng: root.for_context(ENEMY_POLICY_STREAM),
            config,
            setup,
            combatants,
            phase: Phase::NotStarted,
            turn: 0,
            result: None,
            history: Vector::new(),
        })
    }

    /// Replace the enemy policy chosen by the config.
    ///
    /// Replays rebuild the configured policy, so battles using a custom
    /// policy do not replay faithfully.
    #[must_use]
    pub fn with_policy(mut self, policy: Box<dyn EnemyPolicy>) -> Self {
        self.policy = policy;
        self
    }

    // === Intents ===

    /// Begin the battle with the first player turn.
    pub fn start_battle(&mut self) -> Result<(), BattleError> {
        self.require_phase(Intent::StartBattle, Phase::NotStarted)?;
        let turn = self.turn;

        info!(
            player = self.combatants.player.name(),
            enemy = self.combatants.enemy.name(),
            "battle started"
        );
        self.log.push(format!(
            "{} faces {}",
            self.combatants.player.name(),
            self.combatants.enemy.name()
        ));

        self.start_player_turn();
        self.record_intent(Intent::StartBattle, turn);
        Ok(())
    }

    /// Play the player's hand card at `index` against the enemy.
    pub fn play_card(&mut self, index: usize) -> Result<PlayOutcome, BattleError> {
        self.require_turn(Intent::PlayCard(index), Side::Player)?;
        let turn = self.turn;

        let outcome = self.play_for(Side::Player, index)?;
        self.record_intent(Intent::PlayCard(index), turn);
        Ok(outcome)
    }

    /// Discard the player's hand and hand the turn to the enemy.
    pub fn end_player_turn(&mut self) -> Result<(), BattleError> {
        self.require_turn(Intent::EndPlayerTurn, Side::Player)?;
        let turn = self.turn;

        self.combatants.player.end_turn();
        self.phase = Phase::EnemyTurn;
        debug!(turn, "player turn ended");

        self.record_intent(Intent::EndPlayerTurn, turn);
        Ok(())
    }

    /// Run the enemy's whole turn, then start the next player turn.
    ///
    /// The enemy draws, plays cards its policy picks until the policy stops
    /// or the battle ends, then discards its hand.
    pub fn execute_enemy_turn(&mut self) -> Result<EnemyTurnOutcome, BattleError> {
        self.require_turn(Intent::ExecuteEnemyTurn, Side::Enemy)?;
        let turn = self.turn;

        if self.combatants.enemy.start_turn(self.config.draw_per_turn) {
            self.log_reshuffle(Side::Enemy);
        }

        let mut outcome = EnemyTurnOutcome::default();
        let catalog = Arc::clone(&self.catalog);

        loop {
            let choice = {
                let enemy = &self.combatants.enemy;
                let view = PolicyView::new(enemy.hand(), enemy.mana(), &catalog);
                self.policy.choose_card(&view, &mut self.policy_rng)
            };
            let Some(index) = choice else {
                break;
            };

            match self.play_for(Side::Enemy, index) {
                Ok(play) => {
                    outcome.plays.push(index);
                    outcome.events.extend(play.events);
                    if play.result.is_some() {
                        outcome.result = play.result;
                        break;
                    }
                }
                Err(err) => {
                    warn!(policy = self.policy.name(), index, %err, "policy chose an unplayable card");
                    break;
                }
            }
        }

        if outcome.plays.is_empty() {
            self.log
                .push(format!("{} does nothing", self.combatants.enemy.name()));
        }

        self.combatants.enemy.end_turn();
        if self.result.is_none() {
            self.start_player_turn();
        }

        self.record_intent(Intent::ExecuteEnemyTurn, turn);
        Ok(outcome)
    }

    /// Dispatch an intent to the matching operation.
    pub fn apply(&mut self, intent: Intent) -> Result<IntentOutcome, BattleError> {
        match intent {
            Intent::StartBattle => self.start_battle().map(|()| IntentOutcome::Started),
            Intent::PlayCard(index) => self.play_card(index).map(IntentOutcome::Played),
            Intent::EndPlayerTurn => self.end_player_turn().map(|()| IntentOutcome::TurnEnded),
            Intent::ExecuteEnemyTurn => self.execute_enemy_turn().map(IntentOutcome::EnemyTurn),
        }
    }

    // === Internals ===

    fn require_phase(&self, intent: Intent, expected: Phase) -> Result<(), BattleError> {
        if self.phase == expected {
            return Ok(());
        }
        self.reject(intent)
    }

    fn require_turn(&self, intent: Intent, side: Side) -> Result<(), BattleError> {
        if self.phase.acting_side() == Some(side) {
            return Ok(());
        }
        self.reject(intent)
    }

    fn reject(&self, intent: Intent) -> Result<(), BattleError> {
        debug!(intent = intent.name(), phase = %self.phase, "intent rejected");
        Err(BattleError::IllegalPhase {
            intent: intent.name(),
            phase: self.phase,
        })
    }

    fn start_player_turn(&mut self) {
        self.turn += 1;
        self.phase = Phase::PlayerTurn;

        if self.combatants.player.start_turn(self.config.draw_per_turn) {
            self.log_reshuffle(Side::Player);
        }
        debug!(turn = self.turn, hand = self.combatants.player.hand().len(), "player turn started");
    }

    /// Pay for, discard and resolve a hand card for `side`.
    fn play_for(&mut self, side: Side, index: usize) -> Result<PlayOutcome, BattleError> {
        let catalog = Arc::clone(&self.catalog);
        let caster = &self.combatants[side];

        let card_id = caster
            .hand()
            .get(index)
            .copied()
            .ok_or(BattleError::InvalidCardIndex {
                index,
                hand_len: caster.hand().len(),
            })?;
        let card = catalog.lookup(card_id)?;

        let cost = card.cost_amount();
        let available = caster.mana();
        if cost > available {
            debug!(%side, card = %card.name, cost, available, "card rejected");
            return Err(BattleError::InsufficientMana { cost, available });
        }

        let caster = &mut self.combatants[side];
        caster.spend_mana(cost);
        caster.discard_card(index);

        let mut context = ResolverContext::from_sides(&mut self.combatants, side);
        let events = EffectResolver::resolve(card, &mut context);
        trace!(%side, card = %card.name, events = events.len(), "card resolved");

        let caster_name = self.combatants[side].name().to_string();
        self.log.push(format!("{} plays {}", caster_name, card.name));
        for event in &events {
            let line = event.describe(&caster_name, self.combatants[event.target].name());
            self.log.push(line);
        }

        let result = self.check_defeat(side);
        Ok(PlayOutcome {
            card: card_id,
            events,
            result,
        })
    }

    fn check_defeat(&mut self, caster: Side) -> Option<BattleResult> {
        let winner = if self.combatants[caster.opponent()].is_defeated() {
            caster
        } else if self.combatants[caster].is_defeated() {
            caster.opponent()
        } else {
            return None;
        };

        let result = BattleResult {
            winner,
            turn: self.turn,
        };
        self.result = Some(result);
        self.phase = Phase::Over;

        info!(winner = %winner, turn = self.turn, "battle over");
        self.log
            .push(format!("{} wins!", self.combatants[winner].name()));
        Some(result)
    }

    fn log_reshuffle(&mut self, side: Side) {
        let name = self.combatants[side].name();
        debug!(%side, "discard pile reshuffled");
        self.log
            .push(format!("{} shuffles their discard pile into their deck", name));
    }

    fn record_intent(&mut self, intent: Intent, turn: u32) {
        let sequence = self.history.len() as u32;
        self.history.push_back(IntentRecord {
            intent,
            turn,
            sequence,
        });
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current turn number. Zero before the battle starts.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// False only once the battle is over.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Over
    }

    #[must_use]
    pub fn result(&self) -> Option<BattleResult> {
        self.result
    }

    #[must_use]
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    #[must_use]
    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side]
    }

    #[must_use]
    pub fn player(&self) -> &Combatant {
        &self.combatants.player
    }

    #[must_use]
    pub fn enemy(&self) -> &Combatant {
        &self.combatants.enemy
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<CardCatalog> {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Starting configuration for a side.
    #[must_use]
    pub fn setup(&self, side: Side) -> &CombatantConfig {
        &self.setup[side]
    }

    /// Accepted intents in order.
    #[must_use]
    pub fn history(&self) -> &Vector<IntentRecord> {
        &self.history
    }

    #[must_use]
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Plain-data picture of the battle for presentation.
    #[must_use]
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            phase: self.phase,
            turn: self.turn,
            combatants: self.combatants.map(|_, c| c.view()),
            log: self.log.lines(),
            result: self.result,
        }
    }
}
