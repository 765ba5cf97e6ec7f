/// Shared data structures for the application state
///
/// These types flow between the flat-file store and the screens.

use std::fmt;
use std::str::FromStr;

/// A single recipe, stored as the free-form text block it was loaded from.
/// Two recipes are the same recipe when their text is identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recipe(String);

impl Recipe {
    pub fn new(text: impl Into<String>) -> Self {
        Recipe(text.into())
    }

    /// The full recipe text
    pub fn text(&self) -> &str {
        &self.0
    }

    /// First non-blank line, used as the recipe's name on the grocery list
    pub fn name(&self) -> &str {
        self.0
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dietary preference offered on the second screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DietaryPreference {
    Vegetarian,
    Vegan,
    GlutenFree,
    NonVegetarian,
    #[default]
    Custom,
}

impl DietaryPreference {
    /// All choices, in the order the picker shows them
    pub const ALL: [DietaryPreference; 5] = [
        DietaryPreference::Vegetarian,
        DietaryPreference::Vegan,
        DietaryPreference::GlutenFree,
        DietaryPreference::NonVegetarian,
        DietaryPreference::Custom,
    ];

    /// Label used both on screen and in user_preferences.txt
    pub fn label(self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::GlutenFree => "Gluten-Free",
            DietaryPreference::NonVegetarian => "Non-Vegetarian",
            DietaryPreference::Custom => "Custom",
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreference(pub String);

impl FromStr for DietaryPreference {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DietaryPreference::ALL
            .into_iter()
            .find(|pref| pref.label() == s)
            .ok_or_else(|| UnknownPreference(s.to_string()))
    }
}

/// Who is using the app and what they like to eat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSession {
    /// Set once at login, never changed afterwards
    pub user: Option<String>,
    /// None means no preference has been saved yet
    pub preference: Option<DietaryPreference>,
}

impl UserSession {
    pub fn with_preference(preference: Option<DietaryPreference>) -> Self {
        Self {
            user: None,
            preference,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Name for log lines; empty before login
    pub fn user_name(&self) -> &str {
        self.user.as_deref().unwrap_or("")
    }
}
