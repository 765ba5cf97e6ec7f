use std::fmt;

/// The screens of the application. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Login,
    DietaryPreference,
    RecipeSuggestion,
    Favorites,
    GroceryList,
    Feedback,
}

impl Screen {
    /// Screens reachable from the navigation bar once logged in
    pub const NAVIGABLE: [Screen; 5] = [
        Screen::DietaryPreference,
        Screen::RecipeSuggestion,
        Screen::Favorites,
        Screen::GroceryList,
        Screen::Feedback,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::DietaryPreference => "Diet",
            Screen::RecipeSuggestion => "Recipes",
            Screen::Favorites => "Favorites",
            Screen::GroceryList => "Grocery List",
            Screen::Feedback => "Feedback",
        }
    }

    /// Where the login/diet wizard goes after this screen's action succeeds
    pub fn advance(self) -> Screen {
        match self {
            Screen::Login => Screen::DietaryPreference,
            Screen::DietaryPreference => Screen::RecipeSuggestion,
            other => other,
        }
    }

    /// Resolve a navigation request. Nothing but the wizard moves before
    /// login, and nothing navigates back to the login screen.
    pub fn navigate(self, target: Screen, logged_in: bool) -> Screen {
        if logged_in && target != Screen::Login {
            target
        } else {
            self
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
