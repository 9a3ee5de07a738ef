//! War engine: dealing, turn resolution, war escalation, win detection.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::turn::{Showdown, StakeKind, StakedCard, TurnOutcome, TurnReport, TurnStats};
use super::view::{SeatView, TableView};
use crate::cards::{Card, Deck};
use crate::core::{DealMode, GameRng, PlayerId, PlayerMap, WarConfig};
use crate::rules::{GameResult, RulesEngine, WinReason};

/// Engine phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ready to play the next turn.
    Idle,
    /// A turn has been resolved and its cards are still on the table.
    AwaitingResolution,
    /// One player has won.
    Finished,
}

/// Where the two-click turn cycle stands while the game is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TurnStep {
    Ready,
    Showing,
}

/// One game of War.
///
/// Mutated only through `advance` (or `resolve_turn`). Every card is
/// always in exactly one of: a hand, a won pile, or the pot.
#[derive(Clone, Debug)]
pub struct WarGame {
    config: WarConfig,
    players: PlayerMap<Player>,
    /// Cards staked and not yet awarded.
    pot: Vec<StakedCard>,
    /// Cards laid out by the last turn, kept for display.
    table: Vec<StakedCard>,
    /// War rounds fought in the current turn.
    war_depth: u32,
    step: TurnStep,
    /// Set once; the game is finished exactly when this is `Some`.
    result: Option<GameResult>,
    total_cards: usize,
    stats: TurnStats,
    rng: GameRng,
}

/// Builder for creating a WarGame.
#[derive(Clone, Debug, Default)]
pub struct WarGameBuilder {
    config: WarConfig,
}

impl WarGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: WarConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.config.player_names = PlayerMap::from_pair(first.into(), second.into());
        self
    }

    pub fn deal_mode(mut self, mode: DealMode) -> Self {
        self.config.deal_mode = mode;
        self
    }

    pub fn war_stake(mut self, cards: usize) -> Self {
        self.config.war_stake = cards;
        self
    }

    pub fn max_war_rounds(mut self, cap: Option<u32>) -> Self {
        self.config.max_war_rounds = cap;
        self
    }

    /// Build the game and deal a full deck.
    pub fn build(self, seed: u64) -> WarGame {
        let mut game = WarGame::empty(self.config, seed);

        let mut deck = Deck::new();
        match game.config.deal_mode {
            DealMode::Shuffled => deck.shuffle(&mut game.rng.for_context("deal")),
            DealMode::Ordered => deck.turn_face_up(),
        }
        game.deal(&mut deck);

        game
    }

    /// Build the game with prearranged hands instead of dealing.
    ///
    /// Each hand is listed in draw order: the first card is played first.
    pub fn build_with_hands(self, seed: u64, first: Vec<Card>, second: Vec<Card>) -> WarGame {
        let mut game = WarGame::empty(self.config, seed);

        for (seat, hand) in [(PlayerId::FIRST, first), (PlayerId::SECOND, second)] {
            for card in hand.into_iter().rev() {
                game.players[seat].take_card(card.with_face_up(true));
            }
        }
        game.total_cards = game.card_total();

        game
    }
}

impl WarGame {
    fn empty(config: WarConfig, seed: u64) -> Self {
        let players = PlayerMap::new(|seat| Player::new(config.name(seat)));
        Self {
            config,
            players,
            pot: Vec::new(),
            table: Vec::new(),
            war_depth: 0,
            step: TurnStep::Ready,
            result: None,
            total_cards: 0,
            stats: TurnStats::default(),
            rng: GameRng::new(seed),
        }
    }

    /// Deal alternately, player1 first, until the deck is empty.
    fn deal(&mut self, deck: &mut Deck) {
        let mut dealt = 0;
        'deal: loop {
            for seat in PlayerId::both() {
                let Ok(card) = deck.deal() else {
                    break 'deal;
                };
                self.players[seat].take_card(card.with_face_up(true));
                dealt += 1;
            }
        }
        debug!("total cards dealt: {}", dealt);
        self.total_cards = dealt;
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &WarConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.result, self.step) {
            (Some(_), _) => Phase::Finished,
            (None, TurnStep::Ready) => Phase::Idle,
            (None, TurnStep::Showing) => Phase::AwaitingResolution,
        }
    }

    #[must_use]
    pub fn pot(&self) -> &[StakedCard] {
        &self.pot
    }

    /// Cards laid out by the most recent turn.
    #[must_use]
    pub fn table(&self) -> &[StakedCard] {
        &self.table
    }

    #[must_use]
    pub fn war_depth(&self) -> u32 {
        self.war_depth
    }

    #[must_use]
    pub fn stats(&self) -> TurnStats {
        self.stats
    }

    /// Cards in play for this game (52 for a dealt deck).
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Count every card in hands, won piles and the pot.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.players.iter().map(|(_, p)| p.card_count()).sum::<usize>() + self.pot.len()
    }

    /// Clone the game for lookahead.
    ///
    /// Piles are persistent vectors, so this is cheap. The copy gets a
    /// forked RNG: its reshuffles differ from this game's.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let rng = self.rng.fork();
        Self { rng, ..self.clone() }
    }

    // === Turn resolution ===

    /// Perform one step: play a turn, clear the last one, or nothing if
    /// the game is over.
    pub fn resolve_turn(&mut self) -> TurnOutcome {
        if let Some(result) = self.result {
            return TurnOutcome::Finished(result);
        }

        match self.step {
            TurnStep::Showing => {
                self.table.clear();
                self.war_depth = 0;
                self.step = TurnStep::Ready;
                TurnOutcome::Cleared
            }
            TurnStep::Ready => TurnOutcome::Played(self.play_turn()),
        }
    }

    fn play_turn(&mut self) -> TurnReport {
        let mut report = TurnReport::default();
        self.table.clear();
        self.war_depth = 0;
        self.stats.turns_played += 1;

        let (mut first, mut second) = match self.stake_pair(StakeKind::Battle) {
            Ok(pair) => pair,
            Err(loser) => {
                self.forfeit(loser, &mut report);
                return report;
            }
        };

        loop {
            let showdown = Showdown { first, second };
            report.showdowns.push(showdown);
            debug!(
                "{}{}: {} vs. {}: {}",
                if self.war_depth == 0 { "" } else { "WAR: " },
                self.config.name(PlayerId::FIRST),
                first.rank,
                self.config.name(PlayerId::SECOND),
                second.rank,
            );

            if let Some(winner) = showdown.winner() {
                self.award(winner, &mut report);
                return report;
            }

            if self.war_depth == 0 {
                self.mark_war_cause();
                info!("WAR!");
            } else {
                info!("ANOTHER WAR!");
            }

            if self.config.max_war_rounds.is_some_and(|cap| self.war_depth >= cap) {
                info!("war limit reached, {} cards stay in the pot", self.pot.len());
                self.table = self.pot.clone();
                return report;
            }

            self.war_depth += 1;
            self.stats.war_rounds += 1;
            report.war_rounds = self.war_depth;

            match self.stake_war_round() {
                Ok((a, b)) => {
                    first = a;
                    second = b;
                }
                Err(loser) => {
                    self.forfeit(loser, &mut report);
                    return report;
                }
            }
        }
    }

    /// Stake the hidden cards, alternating seats, then one reveal each.
    fn stake_war_round(&mut self) -> Result<(Card, Card), PlayerId> {
        for _ in 0..self.config.war_stake {
            self.stake_pair(StakeKind::FaceDown)?;
        }
        self.stake_pair(StakeKind::Reveal)
    }

    /// Player1 stakes, then player2. Fails with the seat that ran dry.
    fn stake_pair(&mut self, kind: StakeKind) -> Result<(Card, Card), PlayerId> {
        let first = self.stake(PlayerId::FIRST, kind)?;
        let second = self.stake(PlayerId::SECOND, kind)?;
        Ok((first, second))
    }

    fn stake(&mut self, seat: PlayerId, kind: StakeKind) -> Result<Card, PlayerId> {
        let face_up = kind != StakeKind::FaceDown;
        let card = self.players[seat]
            .play_card(face_up, &mut self.rng)
            .map_err(|err| {
                debug!("{}: {}", self.config.name(seat), err);
                seat
            })?;

        self.pot.push(StakedCard { owner: seat, card, kind });
        self.stats.cards_played += 1;
        Ok(card)
    }

    /// Retag the tied battle pair at the end of the pot.
    fn mark_war_cause(&mut self) {
        for staked in self.pot.iter_mut().rev().take(2) {
            staked.kind = StakeKind::WarCause;
        }
    }

    /// Move the pot to the winner's won pile and lay it out on the table.
    fn award_pot(&mut self, winner: PlayerId, report: &mut TurnReport) {
        let pot = std::mem::take(&mut self.pot);
        report.winner = Some(winner);
        report.cards_won = pot.len();

        self.players[winner].collect(pot.iter().map(|staked| staked.card));
        debug!(
            "{}: {} cards won",
            self.config.name(winner),
            self.players[winner].won_cards().len()
        );
        self.table = pot;
    }

    fn award(&mut self, winner: PlayerId, report: &mut TurnReport) {
        self.award_pot(winner, report);
        self.step = TurnStep::Showing;

        if let Some(seat) = self.holder_of_all_cards() {
            self.finish(seat, WinReason::CollectedAllCards);
        }
    }

    fn forfeit(&mut self, loser: PlayerId, report: &mut TurnReport) {
        info!(
            "{} doesn't have enough cards to complete the turn",
            self.config.name(loser)
        );
        report.forfeit = Some(loser);
        let winner = loser.opponent();
        self.award_pot(winner, report);
        self.finish(winner, WinReason::OpponentExhausted);
    }

    fn finish(&mut self, winner: PlayerId, reason: WinReason) {
        info!("{} is the winner!", self.config.name(winner));
        self.result = Some(GameResult { winner, reason });
    }

    /// The seat holding every card between hand and won pile, if any.
    fn holder_of_all_cards(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, player)| player.card_count() == self.total_cards)
            .map(|(seat, _)| seat)
    }

    // === Observation ===

    /// Build the render model for the current state.
    #[must_use]
    pub fn table_view(&self) -> TableView {
        TableView {
            phase: self.phase(),
            seats: PlayerMap::new(|seat| {
                let player = &self.players[seat];
                SeatView {
                    player: seat,
                    name: player.name().to_string(),
                    top_card: player.top_card().copied(),
                    hand_count: player.hand().len(),
                    won_count: player.won_cards().len(),
                }
            }),
            table: self.table.clone(),
            pot_size: self.pot.len(),
            war_depth: self.war_depth,
            result: self.result,
            stats: self.stats,
        }
    }
}

impl RulesEngine for WarGame {
    type Outcome = TurnOutcome;
    type View = TableView;

    fn advance(&mut self) -> TurnOutcome {
        self.resolve_turn()
    }

    fn result(&self) -> Option<GameResult> {
        self.result
    }

    fn view(&self) -> TableView {
        self.table_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit, DECK_SIZE};

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::new(rank).unwrap())
    }

    fn hand(suit: Suit, ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| card(suit, r)).collect()
    }

    #[test]
    fn test_game_creation() {
        let game = WarGameBuilder::new().build(42);

        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.total_cards(), DECK_SIZE);
        assert_eq!(game.player(PlayerId::FIRST).hand().len(), 26);
        assert_eq!(game.player(PlayerId::SECOND).hand().len(), 26);
        assert!(game.pot().is_empty());
        assert!(game
            .player(PlayerId::FIRST)
            .hand()
            .iter()
            .all(|c| c.face_up));
    }

    #[test]
    fn test_ordered_deal_alternates() {
        let game = WarGameBuilder::new().deal_mode(DealMode::Ordered).build(1);
        let deck = Deck::new();

        // Deck end goes to player1, the next card to player2
        let last = deck.cards()[DECK_SIZE - 1];
        let next = deck.cards()[DECK_SIZE - 2];
        assert_eq!(game.player(PlayerId::FIRST).hand()[0], last);
        assert_eq!(game.player(PlayerId::SECOND).hand()[0], next);
    }

    #[test]
    fn test_ordered_deal_ignores_seed() {
        let a = WarGameBuilder::new().deal_mode(DealMode::Ordered).build(1);
        let b = WarGameBuilder::new().deal_mode(DealMode::Ordered).build(2);

        assert_eq!(
            a.player(PlayerId::FIRST).hand(),
            b.player(PlayerId::FIRST).hand()
        );
    }

    #[test]
    fn test_shuffled_deal_depends_on_seed() {
        let a = WarGameBuilder::new().build(1);
        let b = WarGameBuilder::new().build(2);

        assert_ne!(
            a.player(PlayerId::FIRST).hand(),
            b.player(PlayerId::FIRST).hand()
        );
    }

    #[test]
    fn test_basic_turn() {
        let mut game = WarGameBuilder::new().build_with_hands(
            0,
            hand(Suit::Hearts, &[10, 2]),
            hand(Suit::Clubs, &[5, 3]),
        );

        let TurnOutcome::Played(report) = game.resolve_turn() else {
            panic!("expected a played turn");
        };

        assert_eq!(report.winner, Some(PlayerId::FIRST));
        assert_eq!(report.cards_won, 2);
        assert!(!report.had_war());
        assert_eq!(game.player(PlayerId::FIRST).won_cards().len(), 2);
        assert!(game.pot().is_empty());
        assert_eq!(game.phase(), Phase::AwaitingResolution);
        assert_eq!(game.table().len(), 2);
    }

    #[test]
    fn test_clear_then_next_turn() {
        let mut game = WarGameBuilder::new().build_with_hands(
            0,
            hand(Suit::Hearts, &[10, 2]),
            hand(Suit::Clubs, &[5, 3]),
        );

        game.resolve_turn();
        assert_eq!(game.resolve_turn(), TurnOutcome::Cleared);
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.table().is_empty());

        let TurnOutcome::Played(report) = game.resolve_turn() else {
            panic!("expected a played turn");
        };
        assert_eq!(report.winner, Some(PlayerId::SECOND));
    }

    #[test]
    fn test_war_marks_cause_cards() {
        let mut game = WarGameBuilder::new().build_with_hands(
            0,
            hand(Suit::Hearts, &[7, 2, 3, 4, 9, 10]),
            hand(Suit::Clubs, &[7, 5, 6, 8, 4, 11]),
        );

        game.resolve_turn();

        let table = game.table();
        assert_eq!(table.len(), 10);
        assert_eq!(table.iter().filter(|s| s.is_war_cause()).count(), 2);
        assert!(table[0].is_war_cause() && table[1].is_war_cause());
        assert_eq!(
            table.iter().filter(|s| s.kind == StakeKind::FaceDown).count(),
            6
        );
        assert!(table
            .iter()
            .filter(|s| s.kind == StakeKind::FaceDown)
            .all(|s| !s.is_face_up()));
        assert_eq!(
            table.iter().filter(|s| s.kind == StakeKind::Reveal).count(),
            2
        );
    }

    #[test]
    fn test_face_down_alternates_seats() {
        let mut game = WarGameBuilder::new().build_with_hands(
            0,
            hand(Suit::Hearts, &[7, 2, 3, 4, 9, 10]),
            hand(Suit::Clubs, &[7, 5, 6, 8, 4, 11]),
        );

        game.resolve_turn();

        let owners: Vec<_> = game.table().iter().map(|s| s.owner).collect();
        let expected: Vec<_> = (0..5)
            .flat_map(|_| [PlayerId::FIRST, PlayerId::SECOND])
            .collect();
        assert_eq!(owners, expected);
    }

    #[test]
    fn test_war_cap_carries_pot() {
        let mut game = WarGameBuilder::new().max_war_rounds(Some(0)).build_with_hands(
            0,
            hand(Suit::Hearts, &[7, 12]),
            hand(Suit::Clubs, &[7, 3]),
        );

        let TurnOutcome::Played(report) = game.resolve_turn() else {
            panic!("expected a played turn");
        };
        assert_eq!(report.winner, None);
        assert_eq!(game.pot().len(), 2);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.card_total(), 4);

        // The next turn takes the carried cards too
        let TurnOutcome::Played(report) = game.resolve_turn() else {
            panic!("expected a played turn");
        };
        assert_eq!(report.winner, Some(PlayerId::FIRST));
        assert_eq!(report.cards_won, 4);
        assert!(game.is_terminal());
    }

    #[test]
    fn test_finished_game_ignores_advances() {
        let mut game = WarGameBuilder::new().build_with_hands(
            0,
            hand(Suit::Hearts, &[7, 2, 3]),
            hand(Suit::Clubs, &[7, 5, 6, 8, 4]),
        );

        game.resolve_turn();
        let result = game.result().unwrap();
        assert_eq!(game.phase(), Phase::Finished);

        let stats = game.stats();
        for _ in 0..3 {
            assert_eq!(game.resolve_turn(), TurnOutcome::Finished(result));
        }
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.stats(), stats);
        assert_eq!(game.table().len(), 6);
    }

    #[test]
    fn test_stats_count_turn() {
        let mut game = WarGameBuilder::new().build_with_hands(
            0,
            hand(Suit::Hearts, &[7, 2, 3, 4, 9, 10]),
            hand(Suit::Clubs, &[7, 5, 6, 8, 4, 11]),
        );

        game.resolve_turn();
        game.resolve_turn();
        game.resolve_turn();

        let stats = game.stats();
        assert_eq!(stats.turns_played, 2);
        assert_eq!(stats.war_rounds, 1);
        assert_eq!(stats.cards_played, 12);
    }

    #[test]
    fn test_fork_is_independent() {
        let mut game = WarGameBuilder::new().build(5);
        let mut fork = game.fork();

        fork.play_to_end(20);

        assert_eq!(game.stats().turns_played, 0);
        assert_eq!(game.player(PlayerId::FIRST).hand().len(), 26);
        assert!(fork.stats().turns_played > 0);
    }

    #[test]
    fn test_view_matches_state() {
        let mut game = WarGameBuilder::new().player_names("Ann", "Bo").build(11);
        game.resolve_turn();

        let view = game.view();
        assert_eq!(view.phase, game.phase());
        assert_eq!(view.seats[PlayerId::FIRST].name, "Ann");
        for seat in PlayerId::both() {
            let player = game.player(seat);
            assert_eq!(view.seats[seat].hand_count, player.hand().len());
            assert_eq!(view.seats[seat].won_count, player.won_cards().len());
            assert_eq!(view.seats[seat].top_card.as_ref(), player.top_card());
        }
        assert_eq!(view.table, game.table());
    }
}
