use super::data::Recipe;

/// Favorite recipes, in the order they were added.
/// The same recipe may appear more than once.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    items: Vec<Recipe>,
    selected: Option<usize>,
}

impl Favorites {
    pub fn new(items: Vec<Recipe>) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    pub fn items(&self) -> &[Recipe] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, recipe: Recipe) {
        self.items.push(recipe);
    }

    /// Highlight an entry in the list. Out of range indices clear the selection.
    pub fn select(&mut self, index: usize) {
        self.selected = (index < self.items.len()).then_some(index);
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Remove the highlighted recipe and return it.
    /// With duplicates, the earliest equal entry goes, matching how the
    /// favorites log is replayed on load.
    pub fn remove_selected(&mut self) -> Option<Recipe> {
        let index = self.selected.take()?;
        let recipe = self.items.get(index)?;
        let first = self.items.iter().position(|r| r == recipe)?;
        Some(self.items.remove(first))
    }
}

/// Grocery list: recipe names added this session. Never written to disk.
#[derive(Debug, Clone, Default)]
pub struct GroceryList {
    items: Vec<String>,
}

impl GroceryList {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, recipe: &Recipe) {
        self.items.push(recipe.name().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_kept() {
        let mut favorites = Favorites::default();
        favorites.add(Recipe::new("Toast"));
        favorites.add(Recipe::new("Toast"));
        assert_eq!(favorites.items().len(), 2);
    }

    #[test]
    fn remove_requires_selection() {
        let mut favorites = Favorites::new(vec![Recipe::new("Toast")]);
        assert!(favorites.remove_selected().is_none());
        assert_eq!(favorites.items().len(), 1);
    }

    #[test]
    fn removing_a_duplicate_drops_the_earliest_copy() {
        let mut favorites = Favorites::new(vec![
            Recipe::new("Toast"),
            Recipe::new("Salad"),
            Recipe::new("Toast"),
        ]);
        favorites.select(2);
        assert_eq!(favorites.remove_selected(), Some(Recipe::new("Toast")));
        assert_eq!(
            favorites.items(),
            &[Recipe::new("Salad"), Recipe::new("Toast")]
        );
        assert_eq!(favorites.selected_index(), None);
    }

    #[test]
    fn selecting_out_of_range_clears_selection() {
        let mut favorites = Favorites::new(vec![Recipe::new("Toast")]);
        favorites.select(0);
        favorites.select(5);
        assert_eq!(favorites.selected_index(), None);
    }

    #[test]
    fn grocery_list_holds_recipe_names() {
        let mut groceries = GroceryList::default();
        groceries.add(&Recipe::new("Pancakes\nflour, eggs, milk"));
        groceries.add(&Recipe::new("Pancakes\nflour, eggs, milk"));
        assert_eq!(groceries.items(), &["Pancakes", "Pancakes"]);
    }
}
