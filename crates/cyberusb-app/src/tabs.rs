//! Tab router: exactly one navigation item / panel is active at a time

use cyberusb_core::prelude::*;
use cyberusb_core::TabId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabRouter {
    active: TabId,
}

impl TabRouter {
    pub fn active(&self) -> TabId {
        self.active
    }

    pub fn is_active(&self, tab: TabId) -> bool {
        self.active == tab
    }

    /// Activate `tab`, deactivating every other one
    pub fn select(&mut self, tab: TabId) {
        if self.active != tab {
            debug!("Tab {} -> {}", self.active, tab);
        }
        self.active = tab;
    }

    /// Activate a tab by its identifier. Unknown identifiers are rejected and
    /// the current tab stays active.
    pub fn select_id(&mut self, id: &str) -> Result<TabId> {
        let tab: TabId = id.parse()?;
        self.select(tab);
        Ok(tab)
    }

    pub fn next(&mut self) {
        let idx = (self.active.index() + 1) % TabId::ALL.len();
        self.select(TabId::ALL[idx]);
    }

    pub fn previous(&mut self) {
        let len = TabId::ALL.len();
        let idx = (self.active.index() + len - 1) % len;
        self.select(TabId::ALL[idx]);
    }

    /// Every tab with its active marker, in navigation order
    pub fn markers(&self) -> impl Iterator<Item = (TabId, bool)> + '_ {
        TabId::ALL.iter().map(move |tab| (*tab, self.is_active(*tab)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(router: &TabRouter) -> usize {
        router.markers().filter(|(_, active)| *active).count()
    }

    #[test]
    fn test_default_is_dashboard() {
        let router = TabRouter::default();
        assert_eq!(router.active(), TabId::Dashboard);
        assert_eq!(active_count(&router), 1);
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut router = TabRouter::default();
        for tab in TabId::ALL {
            router.select(tab);
            assert_eq!(active_count(&router), 1);
            assert!(router.is_active(tab));
        }
    }

    #[test]
    fn test_select_id_known() {
        let mut router = TabRouter::default();
        assert_eq!(router.select_id("security").unwrap(), TabId::Security);
        assert!(router.is_active(TabId::Security));
    }

    #[test]
    fn test_select_id_unknown_keeps_current() {
        let mut router = TabRouter::default();
        router.select(TabId::Performance);
        let err = router.select_id("reports").unwrap_err();
        assert!(matches!(err, Error::UnknownTab { .. }));
        assert_eq!(router.active(), TabId::Performance);
        assert_eq!(active_count(&router), 1);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut router = TabRouter::default();
        router.select(TabId::Settings);
        router.next();
        assert_eq!(router.active(), TabId::Dashboard);
        router.previous();
        assert_eq!(router.active(), TabId::Settings);
    }
}
