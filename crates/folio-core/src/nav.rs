/// Mobile navigation menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any link inside the menu closes it.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_close() {
        let mut nav = NavMenu::default();
        assert!(nav.toggle());
        assert_eq!(nav.aria_expanded(), "true");
        nav.close();
        assert!(!nav.is_open());
        assert!(nav.toggle());
        assert!(!nav.toggle());
        assert_eq!(nav.aria_expanded(), "false");
    }
}
