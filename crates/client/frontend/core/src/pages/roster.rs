use client_store_core::StoreError;
use roster_core::{Fighter, FighterId, FighterPatch, StatKind, TeamStats, aggregate};

use crate::command::{Command, Ticket};
use crate::view_model::FighterCardView;

/// Team overview: every fighter as a card, plus the team averages.
#[derive(Clone, Debug, Default)]
pub struct RosterPage {
    fighters: Vec<Fighter>,
    stats: TeamStats,
    selected: usize,
    loading: bool,
    latest_load: Option<Ticket>,
}

impl RosterPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a list load. Only the reply to the latest load is applied.
    pub(crate) fn begin_load(&mut self, ticket: Ticket) -> Command {
        self.loading = true;
        self.latest_load = Some(ticket);
        Command::List
    }

    pub(crate) fn on_listed(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Fighter>, StoreError>,
    ) -> Result<(), StoreError> {
        if self.latest_load != Some(ticket) {
            tracing::debug!(?ticket, "superseded list reply dropped");
            return Ok(());
        }
        self.loading = false;
        self.set_fighters(result?);
        Ok(())
    }

    /// Applies a successful quick update to the local list.
    pub(crate) fn on_updated(
        &mut self,
        id: &FighterId,
        patch: &FighterPatch,
        result: Result<(), StoreError>,
    ) -> Result<Option<&Fighter>, StoreError> {
        result?;
        let Some(index) = self.fighters.iter().position(|f| &f.id == id) else {
            return Ok(None);
        };
        self.fighters[index] = patch.apply_to(&self.fighters[index]);
        self.stats = aggregate(&self.fighters);
        Ok(self.fighters.get(index))
    }

    /// Replaces the list and recomputes team stats, keeping the selection in range.
    pub fn set_fighters(&mut self, fighters: Vec<Fighter>) {
        self.stats = aggregate(&fighters);
        self.fighters = fighters;
        self.selected = self.selected.min(self.fighters.len().saturating_sub(1));
    }

    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    pub fn team_stats(&self) -> TeamStats {
        self.stats
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.fighters.is_empty()).then_some(self.selected)
    }

    pub fn selected(&self) -> Option<&Fighter> {
        self.fighters.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.fighters.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Nudges one stat of the selected fighter. `None` at the bounds.
    pub fn quick_update(&self, kind: StatKind, delta: i64) -> Option<Command> {
        let fighter = self.selected()?;
        let current = fighter.stats.get(kind);
        let adjusted = current.saturating_add(delta);
        if adjusted == current {
            return None;
        }
        Some(Command::Update {
            id: fighter.id.clone(),
            patch: FighterPatch::new().with_stat(kind, adjusted),
        })
    }

    pub fn cards(&self) -> Vec<FighterCardView> {
        self.fighters
            .iter()
            .enumerate()
            .map(|(i, fighter)| FighterCardView::from_fighter(fighter, i == self.selected))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{NewFighter, Stat, StatLine};

    fn fighter(id: &str, s: i64, p: i64, m: i64) -> Fighter {
        Fighter::from_new(
            id.into(),
            NewFighter::new(format!("F{id}")).with_stats(StatLine::from_values(s, p, m)),
        )
    }

    fn loaded(fighters: Vec<Fighter>) -> RosterPage {
        let mut page = RosterPage::new();
        let ticket = Ticket::new(1, 0);
        page.begin_load(ticket);
        page.on_listed(ticket, Ok(fighters)).unwrap();
        page
    }

    #[test]
    fn listing_computes_team_stats() {
        let page = loaded(vec![
            fighter("1", 8, 5, 3),
            fighter("2", 6, 9, 4),
            fighter("3", 3, 4, 10),
        ]);
        let stats = page.team_stats();
        assert_eq!(stats.total_fighters, 3);
        assert_eq!(
            (stats.avg_strength, stats.avg_speed, stats.avg_magic, stats.team_power),
            (6, 6, 6, 6)
        );
        assert!(!page.is_loading());
    }

    #[test]
    fn older_list_reply_is_ignored() {
        let mut page = RosterPage::new();
        let first = Ticket::new(1, 0);
        let second = Ticket::new(1, 1);
        page.begin_load(first);
        page.begin_load(second);

        page.on_listed(second, Ok(vec![fighter("2", 1, 1, 1)])).unwrap();
        page.on_listed(first, Ok(vec![])).unwrap();

        assert_eq!(page.fighters().len(), 1);
    }

    #[test]
    fn quick_update_recomputes_from_updated_list() {
        let mut page = loaded(vec![fighter("1", 1, 1, 1), fighter("2", 1, 1, 1)]);
        let Some(Command::Update { id, patch }) = page.quick_update(StatKind::Strength, 9) else {
            panic!("expected update");
        };
        assert_eq!(patch.strength, Some(Stat::new(10)));

        page.on_updated(&id, &patch, Ok(())).unwrap();
        assert_eq!(page.fighters()[0].stats.strength.get(), 10);
        // (10 + 1) / 2 rounds half-up to 6.
        assert_eq!(page.team_stats().avg_strength, 6);
    }

    #[test]
    fn quick_update_at_bound_is_a_no_op() {
        let page = loaded(vec![fighter("1", 10, 1, 1)]);
        assert_eq!(page.quick_update(StatKind::Strength, 1), None);
        assert_eq!(page.quick_update(StatKind::Speed, -1), None);
        assert_eq!(RosterPage::new().quick_update(StatKind::Magic, 1), None);
    }

    #[test]
    fn failed_update_leaves_list_untouched() {
        let mut page = loaded(vec![fighter("1", 3, 3, 3)]);
        let before = page.team_stats();
        let id = FighterId::from("1");
        let err = page
            .on_updated(
                &id,
                &FighterPatch::new().with_stat(StatKind::Magic, Stat::MAX),
                Err(StoreError::NotFound(id.clone())),
            )
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(page.team_stats(), before);
    }

    #[test]
    fn selection_stays_in_range() {
        let mut page = loaded(vec![fighter("1", 1, 1, 1), fighter("2", 1, 1, 1)]);
        page.select_next();
        page.select_next();
        assert_eq!(page.selected_index(), Some(1));

        page.set_fighters(vec![fighter("3", 1, 1, 1)]);
        assert_eq!(page.selected_index(), Some(0));
        assert!(page.cards()[0].selected);

        page.set_fighters(vec![]);
        assert_eq!(page.selected_index(), None);
        assert!(page.selected().is_none());
    }
}
