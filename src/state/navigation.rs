use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    CreateAccount,
}

impl View {
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::CreateAccount => "/create-account",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// View history. Never empty; the landing view is the root.
#[derive(Debug, Clone)]
pub struct Navigation {
    history: Vec<View>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            history: vec![View::Landing],
        }
    }
}

impl Navigation {
    pub fn current(&self) -> View {
        self.history.last().copied().unwrap_or(View::Landing)
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    pub fn push(&mut self, view: View) {
        tracing::debug!(from = %self.current(), to = %view, "navigate");
        self.history.push(view);
    }

    /// Swaps the current entry, so going back skips the replaced view.
    pub fn replace(&mut self, view: View) {
        tracing::debug!(from = %self.current(), to = %view, "navigate (replace)");
        match self.history.last_mut() {
            Some(current) => *current = view,
            None => self.history.push(view),
        }
        self.history.dedup();
    }

    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.history.pop();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_landing() {
        let nav = Navigation::default();
        assert_eq!(nav.current(), View::Landing);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn push_and_back() {
        let mut nav = Navigation::default();
        nav.push(View::CreateAccount);
        assert_eq!(nav.current(), View::CreateAccount);
        assert!(nav.back());
        assert_eq!(nav.current(), View::Landing);
        assert!(!nav.back());
    }

    #[test]
    fn replace_removes_form_from_history() {
        let mut nav = Navigation::default();
        nav.push(View::CreateAccount);
        nav.replace(View::Landing);
        assert_eq!(nav.current(), View::Landing);
        assert!(!nav.can_go_back());
    }
}
