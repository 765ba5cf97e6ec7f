/// State management module
///
/// This module handles all application state, including:
/// - The flat-file store (library.rs)
/// - Recipes, diets and the user session (data.rs)
/// - Recipe navigation (catalog.rs)
/// - Favorites and the grocery list (favorites.rs)
/// - The cooking countdown (timer.rs)
/// - Which screen is showing (screen.rs)

pub mod catalog;
pub mod data;
pub mod favorites;
pub mod library;
pub mod screen;
pub mod timer;
