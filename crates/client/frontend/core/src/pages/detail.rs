use client_store_core::StoreError;
use roster_core::{Fighter, FighterId};

use crate::command::Command;
use crate::view_model::FighterDetailView;

/// Single fighter with its power level, traits and special ability.
#[derive(Clone, Debug)]
pub struct DetailPage {
    id: FighterId,
    fighter: Option<Fighter>,
    loading: bool,
}

impl DetailPage {
    pub fn new(id: FighterId) -> Self {
        Self {
            id,
            fighter: None,
            loading: false,
        }
    }

    pub(crate) fn begin_load(&mut self) -> Command {
        self.loading = true;
        Command::Get(self.id.clone())
    }

    pub(crate) fn on_fetched(
        &mut self,
        result: Result<Fighter, StoreError>,
    ) -> Result<(), StoreError> {
        self.loading = false;
        self.fighter = Some(result?);
        Ok(())
    }

    pub fn id(&self) -> &FighterId {
        &self.id
    }

    pub fn fighter(&self) -> Option<&Fighter> {
        self.fighter.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view(&self) -> Option<FighterDetailView> {
        self.fighter.as_ref().map(FighterDetailView::from_fighter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{FighterClass, NewFighter, StatLine};

    #[test]
    fn load_then_view() {
        let mut page = DetailPage::new("4".into());
        assert_eq!(page.begin_load(), Command::Get("4".into()));
        assert!(page.is_loading() && page.view().is_none());

        let fighter = Fighter::from_new(
            "4".into(),
            NewFighter::new("Mystic Seer")
                .with_class(FighterClass::Mage)
                .with_stats(StatLine::from_values(3, 5, 10)),
        );
        page.on_fetched(Ok(fighter)).unwrap();

        let view = page.view().unwrap();
        assert_eq!(view.ability.name, "Arcane Blast");
        assert_eq!(view.traits, ["Wise", "Mystical", "Powerful"]);
        assert!(!page.is_loading());
    }

    #[test]
    fn failed_fetch_keeps_page_empty() {
        let mut page = DetailPage::new("9".into());
        page.begin_load();
        let err = page
            .on_fetched(Err(StoreError::NotFound("9".into())))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(page.fighter().is_none());
        assert!(!page.is_loading());
    }
}
