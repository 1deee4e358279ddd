use crate::section::SectionId;

/// Tracks which section is nearest the top of the viewport.
///
/// The tracker never reads the DOM itself: every update receives a lookup from
/// section to the current top edge of its element (`None` when the element is
/// not on the page).
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    active: SectionId,
    window_px: f64,
    // set by a manual navigation, cleared once the scroll settles
    navigating_to: Option<SectionId>,
}

impl ScrollSpy {
    pub fn new(window_px: f64) -> Self {
        Self {
            active: SectionId::Home,
            window_px,
            navigating_to: None,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_navigating(&self) -> bool {
        self.navigating_to.is_some()
    }

    /// Recompute the active section after a scroll event.
    ///
    /// While a manual navigation is in flight the recomputation is skipped so
    /// the smooth scroll does not flicker through the sections it passes.
    pub fn on_scroll<F>(&mut self, top_of: F) -> SectionId
    where
        F: Fn(SectionId) -> Option<f64>,
    {
        if self.navigating_to.is_some() {
            return self.active;
        }
        if let Some(id) = locate(&SectionId::ALL, self.window_px, top_of) {
            self.active = id;
        }
        self.active
    }

    /// A nav click: the target becomes active right away.
    pub fn navigate(&mut self, target: SectionId) {
        self.active = target;
        self.navigating_to = Some(target);
    }

    /// Scrolling has stopped; hand control back to `on_scroll`.
    pub fn settle(&mut self) {
        self.navigating_to = None;
    }
}

/// First candidate, in priority order, whose top edge lies in `[0, window_px]`.
pub fn locate<F>(candidates: &[SectionId], window_px: f64, top_of: F) -> Option<SectionId>
where
    F: Fn(SectionId) -> Option<f64>,
{
    candidates.iter().copied().find(|&id| {
        top_of(id).is_some_and(|top| (0.0..=window_px).contains(&top))
    })
}

/// The back-to-top button shows strictly past the threshold.
pub fn back_to_top_visible(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: f64 = 300.0;

    fn layout(tops: &[(SectionId, f64)]) -> impl Fn(SectionId) -> Option<f64> + '_ {
        move |id| tops.iter().find(|(s, _)| *s == id).map(|(_, top)| *top)
    }

    #[test]
    fn test_section_in_window_becomes_active() {
        let mut spy = ScrollSpy::new(WINDOW);
        let tops = [
            (SectionId::Home, -1200.0),
            (SectionId::About, -500.0),
            (SectionId::Skills, 150.0),
            (SectionId::Projects, 900.0),
            (SectionId::Experience, 1700.0),
            (SectionId::Contact, 2400.0),
        ];
        assert_eq!(spy.on_scroll(layout(&tops)), SectionId::Skills);
        assert_eq!(spy.active(), SectionId::Skills);
    }

    #[test]
    fn test_no_qualifying_section_keeps_previous() {
        let mut spy = ScrollSpy::new(WINDOW);
        spy.on_scroll(layout(&[(SectionId::Projects, 10.0)]));
        assert_eq!(spy.active(), SectionId::Projects);

        // mid-way through a tall section: every top is out of the window
        let tops = [
            (SectionId::Projects, -400.0),
            (SectionId::Experience, 450.0),
        ];
        assert_eq!(spy.on_scroll(layout(&tops)), SectionId::Projects);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        assert_eq!(
            locate(&SectionId::ALL, WINDOW, layout(&[(SectionId::About, 0.0)])),
            Some(SectionId::About)
        );
        assert_eq!(
            locate(&SectionId::ALL, WINDOW, layout(&[(SectionId::About, 300.0)])),
            Some(SectionId::About)
        );
        assert_eq!(
            locate(&SectionId::ALL, WINDOW, layout(&[(SectionId::About, 300.5)])),
            None
        );
        assert_eq!(
            locate(&SectionId::ALL, WINDOW, layout(&[(SectionId::About, -0.5)])),
            None
        );
    }

    #[test]
    fn test_priority_order_wins_over_proximity() {
        // both qualify; the earlier section is chosen even though the later one
        // sits closer to the top
        let tops = [(SectionId::Skills, 280.0), (SectionId::Contact, 5.0)];
        assert_eq!(
            locate(&SectionId::ALL, WINDOW, layout(&tops)),
            Some(SectionId::Skills)
        );
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let mut spy = ScrollSpy::new(WINDOW);
        assert_eq!(spy.on_scroll(|_| None), SectionId::Home);
        assert_eq!(
            spy.on_scroll(layout(&[(SectionId::Experience, 42.0)])),
            SectionId::Experience
        );
    }

    #[test]
    fn test_navigation_sets_active_immediately() {
        let mut spy = ScrollSpy::new(WINDOW);
        spy.navigate(SectionId::Contact);
        assert_eq!(spy.active(), SectionId::Contact);
        assert!(spy.is_navigating());

        // the smooth scroll passes over "about"; it must not take over
        let passing = [(SectionId::About, 120.0)];
        assert_eq!(spy.on_scroll(layout(&passing)), SectionId::Contact);

        spy.settle();
        assert!(!spy.is_navigating());
        assert_eq!(spy.on_scroll(layout(&passing)), SectionId::About);
    }

    #[test]
    fn test_back_to_top_threshold_is_exclusive() {
        assert!(!back_to_top_visible(0.0, 300.0));
        assert!(!back_to_top_visible(300.0, 300.0));
        assert!(back_to_top_visible(301.0, 300.0));
    }
}
