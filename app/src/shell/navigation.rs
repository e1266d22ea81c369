//! Screens and navigation between them

use crate::error::{AppError, AppResult};
use std::fmt;
use std::str::FromStr;
use tokio::sync::watch;
use tracing::debug;

/// Screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Exercises,
    AddExercise,
    Meals,
    AddMeal,
    Statistics,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Screen::Dashboard,
        Screen::Exercises,
        Screen::AddExercise,
        Screen::Meals,
        Screen::AddMeal,
        Screen::Statistics,
        Screen::Profile,
    ];

    /// Heading shown at the top of the screen
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Exercises => "Exercises",
            Screen::AddExercise => "Add Exercise",
            Screen::Meals => "Meals",
            Screen::AddMeal => "Add Meal",
            Screen::Statistics => "Statistics",
            Screen::Profile => "Profile",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Screen {
    type Err = AppError;

    /// Accepts titles and identifiers in any case, with spaces, dashes or
    /// underscores between words
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Screen::ALL
            .into_iter()
            .find(|screen| normalize(screen.title()) == wanted)
            .ok_or_else(|| AppError::UnknownScreen(s.trim().to_string()))
    }
}

/// Tracks the active screen and publishes every change
#[derive(Debug)]
pub struct Navigator {
    current: watch::Sender<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Navigator showing the dashboard
    pub fn new() -> Self {
        let (current, _) = watch::channel(Screen::Dashboard);
        Self { current }
    }

    pub fn current(&self) -> Screen {
        *self.current.borrow()
    }

    /// Switch to `screen`; subscribers are only notified when it differs
    pub fn navigate_to(&self, screen: Screen) {
        let changed = self.current.send_if_modified(|current| {
            if *current == screen {
                return false;
            }
            *current = screen;
            true
        });
        if changed {
            debug!(screen = %screen, "Navigated");
        }
    }

    /// Switch to the screen called `name`, leaving the current one on error
    pub fn navigate_by_name(&self, name: &str) -> AppResult<Screen> {
        let screen = name.parse::<Screen>()?;
        self.navigate_to(screen);
        Ok(screen)
    }

    pub fn subscribe(&self) -> watch::Receiver<Screen> {
        self.current.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("dashboard", Screen::Dashboard)]
    #[case("add-exercise", Screen::AddExercise)]
    #[case("add_exercise", Screen::AddExercise)]
    #[case("Add Exercise", Screen::AddExercise)]
    #[case("AddMeal", Screen::AddMeal)]
    #[case(" STATISTICS ", Screen::Statistics)]
    fn test_screen_from_str(#[case] name: &str, #[case] expected: Screen) {
        assert_eq!(name.parse::<Screen>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_screen() {
        let err = "Settings".parse::<Screen>().unwrap_err();
        assert!(matches!(err, AppError::UnknownScreen(ref name) if name == "Settings"));
    }

    #[test]
    fn test_titles_parse_back() {
        for screen in Screen::ALL {
            assert_eq!(screen.title().parse::<Screen>().unwrap(), screen);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: titles parse regardless of letter case
        #[test]
        fn prop_titles_ignore_case(
            index in 0usize..Screen::ALL.len(),
            upper in proptest::collection::vec(any::<bool>(), 16)
        ) {
            let screen = Screen::ALL[index];
            let name: String = screen
                .title()
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                .collect();
            prop_assert_eq!(name.parse::<Screen>().unwrap(), screen);
        }
    }

    #[test]
    fn test_navigator_starts_on_dashboard() {
        assert_eq!(Navigator::new().current(), Screen::Dashboard);
    }

    #[test]
    fn test_navigate_by_name_publishes() {
        let navigator = Navigator::new();
        let mut changes = navigator.subscribe();

        let screen = navigator.navigate_by_name("meals").unwrap();
        assert_eq!(screen, Screen::Meals);
        assert_eq!(navigator.current(), Screen::Meals);
        assert!(changes.has_changed().unwrap());
        assert_eq!(*changes.borrow_and_update(), Screen::Meals);
    }

    #[test]
    fn test_same_screen_does_not_notify() {
        let navigator = Navigator::new();
        let changes = navigator.subscribe();
        navigator.navigate_to(Screen::Dashboard);
        assert!(!changes.has_changed().unwrap());
    }

    #[test]
    fn test_failed_navigation_keeps_screen() {
        let navigator = Navigator::new();
        navigator.navigate_to(Screen::Profile);
        assert!(navigator.navigate_by_name("nowhere").is_err());
        assert_eq!(navigator.current(), Screen::Profile);
    }
}
