use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::data::{DietaryPreference, Recipe, UnknownPreference};
use crate::error::AppError;

/// Prefix of the marker line written when a favorite is removed
pub const REMOVED_PREFIX: &str = "Removed: ";

/// The flat text files the application reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFile {
    Recipes,
    Favorites,
    Preferences,
    Login,
    Feedback,
}

impl StoreFile {
    pub fn file_name(self) -> &'static str {
        match self {
            StoreFile::Recipes => "recipes.txt",
            StoreFile::Favorites => "favorites.txt",
            StoreFile::Preferences => "user_preferences.txt",
            StoreFile::Login => "login.txt",
            StoreFile::Feedback => "feedback.txt",
        }
    }

    /// Human name used in load error messages
    pub fn label(self) -> &'static str {
        match self {
            StoreFile::Recipes => "recipes",
            StoreFile::Favorites => "favorites",
            StoreFile::Preferences => "preferences",
            StoreFile::Login => "login log",
            StoreFile::Feedback => "feedback",
        }
    }
}

/// The Library is the persistence gateway.
/// It owns the data directory and knows the format of every file in it.
///
/// Every write opens, appends (or rewrites) and closes the file in one call.
/// Nothing is buffered between calls.
pub struct Library {
    data_dir: PathBuf,
}

impl Library {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        info!("📁 Data directory: {}", data_dir.display());
        Library { data_dir }
    }

    /// Full path to one of the store files
    pub fn path(&self, file: StoreFile) -> PathBuf {
        self.data_dir.join(file.file_name())
    }

    /// Load the recipe catalog.
    /// Recipes are separated by one or more blank lines.
    pub fn load_recipes(&self) -> Result<Vec<Recipe>, AppError> {
        let contents = read(&self.path(StoreFile::Recipes)).map_err(|source| {
            AppError::FileLoad {
                file: StoreFile::Recipes,
                source,
            }
        })?;

        let recipes = parse_recipes(&contents);
        info!("📖 Loaded {} recipes", recipes.len());
        Ok(recipes)
    }

    /// Load favorites by replaying the append-only favorites log.
    /// A missing file just means nothing has been favorited yet.
    pub fn load_favorites(&self) -> Result<Vec<Recipe>, AppError> {
        let contents = match read(&self.path(StoreFile::Favorites)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No favorites file yet");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(AppError::FileLoad {
                    file: StoreFile::Favorites,
                    source,
                })
            }
        };

        let favorites = replay_favorites(&contents);
        info!("⭐ Loaded {} favorites", favorites.len());
        Ok(favorites)
    }

    /// First line of the preference file.
    /// Missing, unreadable or unrecognised all mean "no preference".
    pub fn load_preference(&self) -> Option<DietaryPreference> {
        let contents = read(&self.path(StoreFile::Preferences)).ok()?;
        let first = contents.lines().next()?.trim();
        if first.is_empty() {
            return None;
        }
        match first.parse() {
            Ok(pref) => Some(pref),
            Err(UnknownPreference(value)) => {
                debug!("Ignoring unknown stored preference {value:?}");
                None
            }
        }
    }

    /// Replace the preference file with the single current value
    pub fn save_preference(&self, preference: DietaryPreference) -> Result<(), AppError> {
        let path = self.path(StoreFile::Preferences);
        fs::write(&path, format!("{}\n", preference.label())).map_err(|source| {
            AppError::FileWrite {
                file: StoreFile::Preferences,
                source,
            }
        })?;
        info!("💾 Saved dietary preference: {}", preference);
        Ok(())
    }

    /// Append `text` plus a line terminator to one of the store files.
    /// The file handle is dropped before returning, on success or failure.
    pub fn append_line(&self, file: StoreFile, text: &str) -> Result<(), AppError> {
        let path = self.path(file);
        append(&path, text).map_err(|source| AppError::FileWrite { file, source })?;
        debug!("Appended to {}", file.file_name());
        Ok(())
    }

    pub fn record_login(&self, user: &str) -> Result<(), AppError> {
        self.append_line(StoreFile::Login, &format!("User: {user}"))
    }

    pub fn record_feedback(&self, user: &str, feedback: &str) -> Result<(), AppError> {
        self.append_line(
            StoreFile::Feedback,
            &format!("User: {user} - Feedback: {feedback}"),
        )
    }

    pub fn record_favorite(&self, recipe: &Recipe) -> Result<(), AppError> {
        self.append_line(StoreFile::Favorites, &escape_favorite(recipe.text()))
    }

    pub fn record_favorite_removal(&self, recipe: &Recipe) -> Result<(), AppError> {
        self.append_line(
            StoreFile::Favorites,
            &format!("{REMOVED_PREFIX}{}", escape_favorite(recipe.text())),
        )
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("data_dir", &self.data_dir)
            .finish()
    }
}

fn read(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

fn append(path: &Path, text: &str) -> io::Result<()> {
    let mut file: File = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{text}")
}

/// Split recipe file contents into trimmed blocks separated by blank lines
pub fn parse_recipes(contents: &str) -> Vec<Recipe> {
    let mut recipes = Vec::new();
    let mut block = String::new();

    for line in contents.lines() {
        if line.trim().is_empty() {
            push_block(&mut recipes, &block);
            block.clear();
        } else {
            block.push_str(line);
            block.push('\n');
        }
    }
    push_block(&mut recipes, &block);

    recipes
}

fn push_block(recipes: &mut Vec<Recipe>, block: &str) {
    let trimmed = block.trim();
    if !trimmed.is_empty() {
        recipes.push(Recipe::new(trimmed));
    }
}

/// Rebuild the favorites list from the log.
/// A `Removed: ` line cancels the earliest matching entry still present.
pub fn replay_favorites(contents: &str) -> Vec<Recipe> {
    let mut favorites: Vec<Recipe> = Vec::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.strip_prefix(REMOVED_PREFIX) {
            Some(removed) => {
                let removed = unescape_favorite(removed);
                if let Some(pos) = favorites.iter().position(|r| r.text() == removed) {
                    favorites.remove(pos);
                }
            }
            None => favorites.push(Recipe::new(unescape_favorite(line))),
        }
    }

    favorites
}

/// Encode a recipe as a single physical line.
/// Text that would read back as a removal marker gets a leading `\`.
pub fn escape_favorite(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    if text.starts_with(REMOVED_PREFIX) {
        out.push('\\');
    }
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            c => out.push(c),
        }
    }
    out
}

pub fn unescape_favorite(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn texts(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(Recipe::text).collect()
    }

    #[test]
    fn recipes_split_on_blank_lines() {
        let contents = "Pancakes\nflour, eggs\n\n\n  \nOmelette\neggs  \n\nToast";
        let recipes = parse_recipes(contents);
        assert_eq!(
            texts(&recipes),
            vec!["Pancakes\nflour, eggs", "Omelette\neggs", "Toast"]
        );
    }

    #[test]
    fn missing_recipe_file_is_a_load_error() {
        let dir = tempdir().expect("tempdir");
        let library = Library::new(dir.path());
        let err = library.load_recipes().expect_err("no recipes.txt");
        assert!(matches!(
            err,
            AppError::FileLoad {
                file: StoreFile::Recipes,
                ..
            }
        ));
    }

    #[test]
    fn missing_favorites_file_is_empty() {
        let dir = tempdir().expect("tempdir");
        let library = Library::new(dir.path());
        assert!(library.load_favorites().expect("load").is_empty());
    }

    #[test]
    fn favorites_round_trip_multi_line_recipes() {
        let dir = tempdir().expect("tempdir");
        let library = Library::new(dir.path());
        let soup = Recipe::new("Tomato Soup\ntomatoes\\basil\nSimmer 20 min.");
        let toast = Recipe::new("Toast");

        library.record_favorite(&soup).expect("write");
        library.record_favorite(&toast).expect("write");

        let on_disk = fs::read_to_string(library.path(StoreFile::Favorites)).expect("read");
        assert_eq!(on_disk.lines().count(), 2);
        assert!(on_disk.ends_with("Toast\n"));

        let reloaded = Library::new(dir.path()).load_favorites().expect("load");
        assert_eq!(reloaded, vec![soup, toast]);
    }

    #[test]
    fn removal_markers_are_replayed() {
        let dir = tempdir().expect("tempdir");
        let library = Library::new(dir.path());
        let toast = Recipe::new("Toast");
        let salad = Recipe::new("Salad");

        library.record_favorite(&toast).expect("write");
        library.record_favorite(&salad).expect("write");
        library.record_favorite(&toast).expect("write");
        library.record_favorite_removal(&toast).expect("write");

        let on_disk = fs::read_to_string(library.path(StoreFile::Favorites)).expect("read");
        assert_eq!(on_disk, "Toast\nSalad\nToast\nRemoved: Toast\n");

        let favorites = library.load_favorites().expect("load");
        assert_eq!(texts(&favorites), vec!["Salad", "Toast"]);
    }

    #[test]
    fn removal_of_unknown_favorite_is_ignored() {
        let favorites = replay_favorites("Salad\nRemoved: Pie\n\n");
        assert_eq!(texts(&favorites), vec!["Salad"]);
    }

    #[test]
    fn escaping_leaves_plain_text_alone() {
        assert_eq!(escape_favorite("Fried rice"), "Fried rice");
        assert_eq!(escape_favorite("a\nb\\c"), "a\\nb\\\\c");
        assert_eq!(unescape_favorite("a\\nb\\\\c"), "a\nb\\c");
        assert_eq!(unescape_favorite("trailing\\"), "trailing\\");
    }

    #[test]
    fn entries_that_look_like_markers_round_trip() {
        let dir = tempdir().expect("tempdir");
        let library = Library::new(dir.path());
        let tricky = Recipe::new("Removed: Toast\nbread");
        let toast = Recipe::new("Toast\nbread");

        library.record_favorite(&tricky).expect("write");
        library.record_favorite(&toast).expect("write");
        assert_eq!(library.load_favorites().expect("load"), vec![tricky.clone(), toast.clone()]);

        library.record_favorite_removal(&tricky).expect("write");
        assert_eq!(library.load_favorites().expect("load"), vec![toast]);

        let on_disk = fs::read_to_string(library.path(StoreFile::Favorites)).expect("read");
        assert_eq!(
            on_disk,
            "\\Removed: Toast\\nbread\nToast\\nbread\nRemoved: \\Removed: Toast\\nbread\n"
        );
    }

    #[test]
    fn preference_reads_first_line() {
        let dir = tempdir().expect("tempdir");
        let library = Library::new(dir.path());
        assert_eq!(library.load_preference(), None);

        fs::write(library.path(StoreFile::Preferences), "Vegan\nVegetarian\n").expect("write");
        assert_eq!(library.load_preference(), Some(DietaryPreference::Vegan));

        fs::write(library.path(StoreFile::Preferences), "Keto\n").expect("write");
        assert_eq!(library.load_preference(), None);
    }

    #[test]
    fn saving_preference_replaces_previous_value() {
        let dir = tempdir().expect("tempdir");
        let library = Library::new(dir.path());
        library.save_preference(DietaryPreference::Vegan).expect("save");
        library.save_preference(DietaryPreference::GlutenFree).expect("save");

        let on_disk = fs::read_to_string(library.path(StoreFile::Preferences)).expect("read");
        assert_eq!(on_disk, "Gluten-Free\n");
        assert_eq!(library.load_preference(), Some(DietaryPreference::GlutenFree));
    }

    #[test]
    fn log_lines_are_appended() {
        let dir = tempdir().expect("tempdir");
        let library = Library::new(dir.path());
        library.record_login("Bob").expect("login");
        library.record_login("Alice").expect("login");
        library.record_feedback("Alice", "Great app!").expect("feedback");

        let login = fs::read_to_string(library.path(StoreFile::Login)).expect("read");
        assert_eq!(login, "User: Bob\nUser: Alice\n");
        let feedback = fs::read_to_string(library.path(StoreFile::Feedback)).expect("read");
        assert_eq!(feedback, "User: Alice - Feedback: Great app!\n");
    }

    #[test]
    fn append_failure_reports_file() {
        let dir = tempdir().expect("tempdir");
        let library = Library::new(dir.path().join("missing-subdir"));
        let err = library.record_login("Bob").expect_err("directory does not exist");
        assert_eq!(err.to_string(), "Error saving to file: login.txt");
    }
}
