use super::data::Recipe;

/// The recipe catalog, in file order, plus the recipe currently on screen.
///
/// Navigation wraps around in both directions. `selected` is `None` until
/// the user first steps through the list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    selected: Option<usize>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The recipe currently displayed, if any
    pub fn current(&self) -> Option<&Recipe> {
        self.selected.and_then(|i| self.recipes.get(i))
    }

    /// Step forward, wrapping to the first recipe after the last.
    /// The first call lands on index 0.
    pub fn next(&mut self) -> Option<&Recipe> {
        let len = self.recipes.len();
        if len == 0 {
            return None;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % len,
            None => 0,
        });
        self.current()
    }

    /// Step backward, wrapping to the last recipe before the first.
    /// With nothing selected yet this lands on the last recipe.
    pub fn previous(&mut self) -> Option<&Recipe> {
        let len = self.recipes.len();
        if len == 0 {
            return None;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        });
        self.current()
    }
}
