//! Tracks which page section is currently "in view" for nav highlighting.

/// Pixels of lookahead added to the scroll offset so a section lights up
/// slightly before its top edge reaches the viewport top.
pub const LOOKAHEAD: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub top: f32,
    pub height: f32,
}

impl Section {
    pub fn new(id: &'static str, top: f32, height: f32) -> Self {
        Self { id, top, height }
    }

    fn contains(&self, pos: f32) -> bool {
        pos >= self.top && pos < self.top + self.height
    }
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    active: &'static str,
}

impl ScrollSpy {
    pub fn new(initial: &'static str) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    /// Recomputed on every scroll event. The first section (in page order)
    /// whose range contains `offset + LOOKAHEAD` becomes active. When no
    /// section matches, the previous active section is retained.
    pub fn on_scroll(&mut self, offset: f32, sections: &[Section]) {
        let pos = offset + LOOKAHEAD;
        if let Some(section) = sections.iter().find(|s| s.contains(pos)) {
            self.active = section.id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("hero", 0.0, 800.0),
            Section::new("about", 800.0, 800.0),
            Section::new("services", 1600.0, 800.0),
        ]
    }

    #[test]
    fn lookahead_selects_next_section_near_boundary() {
        let mut spy = ScrollSpy::new("hero");
        // 750 + 100 = 850 falls inside about's [800, 1600) range.
        spy.on_scroll(750.0, &sections());
        assert_eq!(spy.active(), "about");
    }

    #[test]
    fn top_of_page_selects_first_section() {
        let mut spy = ScrollSpy::new("hero");
        spy.on_scroll(0.0, &sections());
        assert_eq!(spy.active(), "hero");
    }

    #[test]
    fn exact_section_start_minus_lookahead_activates_it() {
        let mut spy = ScrollSpy::new("hero");
        spy.on_scroll(700.0, &sections());
        assert_eq!(spy.active(), "about");
        spy.on_scroll(699.0, &sections());
        assert_eq!(spy.active(), "hero");
    }

    #[test]
    fn no_match_retains_previous_active() {
        let mut spy = ScrollSpy::new("hero");
        spy.on_scroll(1000.0, &sections());
        assert_eq!(spy.active(), "about");
        // Past the last section's range: nothing matches, "about" sticks.
        spy.on_scroll(5000.0, &sections());
        assert_eq!(spy.active(), "about");
    }

    #[test]
    fn empty_section_list_never_changes_active() {
        let mut spy = ScrollSpy::new("hero");
        spy.on_scroll(1234.0, &[]);
        assert_eq!(spy.active(), "hero");
    }
}
